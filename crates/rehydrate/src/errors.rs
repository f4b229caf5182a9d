// Archivo: errors.rs
// Propósito: definir los errores del coordinador y el alias Result<T> usado
// por las APIs del crate. Los comentarios y variantes están en español.
use thiserror::Error;
/// Errores del coordinador de rehidratación.
///
/// - `Transport`: el bus de acciones rechazó una publicación.
/// - `State`: estado interno inaccesible (mutex envenenado).
/// - `Other`: cualquier otro error.
///
/// Nota: las anomalías del protocolo (completion sin registro previo,
/// completion duplicada, completion tras bootstrap) NO son errores; se
/// absorben como no-ops según el contrato del coordinador.
#[derive(Error, Debug)]
pub enum RehydrateError {
  /// El canal de acciones falló al publicar.
  #[error("Error de transporte: {0}")]
  Transport(String),
  /// Estado interno inaccesible (mutex envenenado).
  #[error("Estado inválido: {0}")]
  State(String),
  /// Otro tipo de error.
  #[error("Otro: {0}")]
  Other(String),
}
/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, RehydrateError>;
