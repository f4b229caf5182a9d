// Archivo: bus.rs
// Propósito: definir el trait `ActionBus`, el contrato de transporte hacia
// el store anfitrión. Describe el canal por el que el coordinador y el
// persistor publican acciones etiquetadas.
use crate::domain::PersistAction;
use crate::errors::Result;

/// Contrato mínimo del canal de acciones del store anfitrión.
///
/// El coordinador trata el transporte como opaco: publica acciones en el
/// orden en que ocurren y asume que el bus las entrega en ese mismo orden
/// (disciplina single-threaded, ver `Coordinator`). Las implementaciones
/// concretas pueden despachar a un store real, a una cola o —para
/// pruebas— grabar las acciones en memoria (`RecordingBus`).
pub trait ActionBus: Send + Sync {
    /// Publica una acción etiquetada en el canal. Devuelve `Transport` si
    /// el canal la rechaza; el coordinador propaga el error sin reintentar.
    fn publish(&self, action: PersistAction) -> Result<()>;
}
