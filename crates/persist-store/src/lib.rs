//! persist-store: superficie de persistor sobre el coordinador
//!
//! Crate que define el handle `Persistor` y el constructor `persist_store`,
//! la cara visible del sistema hacia el store anfitrión: ciclo de vida
//! (persist/pause/flush/purge), passthrough de registro y rehidratación
//! hacia `rehydrate::Coordinator`, snapshot de estado y suscripciones.

pub mod config;
pub mod errors;
pub mod persistor;

pub use config::PersistorConfig;
pub use errors::PersistorError;
pub use persistor::{persist_store, Persistor, StateListener};
