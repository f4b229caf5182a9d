// Archivo: domain.rs
// Propósito: tipos de dominio del canal de persistencia: acciones
// etiquetadas, snapshot de estado del persistor y constantes de wire.
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Tag de wire para la señal de inicio de persistencia.
pub const PERSIST: &str = "persist/PERSIST";
/// Tag de wire para la notificación de rehidratación de un slice.
pub const REHYDRATE: &str = "persist/REHYDRATE";
/// Tag de wire para la pausa de persistencia.
pub const PAUSE: &str = "persist/PAUSE";
/// Tag de wire para el flush del storage subyacente.
pub const FLUSH: &str = "persist/FLUSH";
/// Tag de wire para el purge del storage subyacente.
pub const PURGE: &str = "persist/PURGE";

/// Acción etiquetada que viaja por el canal del store anfitrión.
///
/// El coordinador sólo publica `Rehydrate`; el resto son señales de ciclo
/// de vida emitidas por el persistor para que las consuman los reducers u
/// observers de capas superiores. El coordinador las ignora.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PersistAction {
    /// Señal de inicio: el store anfitrión comienza (o reanuda) la
    /// persistencia de sus slices.
    #[serde(rename = "persist/PERSIST")]
    Persist,
    /// Resultado de la rehidratación de un slice: `payload` en éxito,
    /// `err` en fallo. Ambos pueden ser `None` (slice vacío).
    #[serde(rename = "persist/REHYDRATE")]
    Rehydrate {
        key: String,
        payload: Option<JsonValue>,
        err: Option<String>,
    },
    /// Pausa la escritura de slices. No afecta al registro.
    #[serde(rename = "persist/PAUSE")]
    Pause,
    /// Pide al storage volcar escrituras pendientes.
    #[serde(rename = "persist/FLUSH")]
    Flush,
    /// Pide al storage borrar el estado persistido.
    #[serde(rename = "persist/PURGE")]
    Purge,
}

impl PersistAction {
    /// Constructor ergonómico para la notificación de rehidratación.
    pub fn rehydrate(key: &str, payload: Option<JsonValue>, err: Option<String>) -> Self {
        PersistAction::Rehydrate { key: key.to_string(),
                                   payload,
                                   err }
    }

    /// Devuelve el tag de wire de la acción (p.ej. `persist/REHYDRATE`).
    pub fn action_type(&self) -> &'static str {
        match self {
            PersistAction::Persist => PERSIST,
            PersistAction::Rehydrate { .. } => REHYDRATE,
            PersistAction::Pause => PAUSE,
            PersistAction::Flush => FLUSH,
            PersistAction::Purge => PURGE,
        }
    }
}

/// Snapshot sincrónico del estado del persistor.
///
/// `registry` conserva el orden de registro de las keys pendientes;
/// `bootstrapped` es el flag monotónico de readiness. Refleja el estado
/// posterior a la última llamada completada (semántica single-threaded).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistorState {
    pub registry: Vec<String>,
    pub bootstrapped: bool,
}
