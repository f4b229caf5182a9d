// Archivo: errors.rs
// Propósito: errores de la capa de persistor. Los fallos del coordinador
// se envuelven tal cual; el resto son problemas locales de la superficie.
use rehydrate::RehydrateError;
use thiserror::Error;

/// Errores de la superficie del persistor.
#[derive(Error, Debug)]
pub enum PersistorError {
  /// Fallo propagado del coordinador (transporte o estado interno).
  #[error("Error del coordinador: {0}")]
  Core(#[from] RehydrateError),
  /// Estado local del persistor inaccesible (mutex envenenado).
  #[error("Estado inválido: {0}")]
  State(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, PersistorError>;
