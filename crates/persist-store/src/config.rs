// Archivo: config.rs
// Propósito: configuración del persistor, con construcción desde entorno
// (patrón `from_env` usando dotenvy).
use serde::{Deserialize, Serialize};

/// Configuración mínima expuesta por el persistor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistorConfig {
    /// Si es `true`, `persist_store` no publica la señal `persist/PERSIST`
    /// inicial; el caller debe llamar a `Persistor::persist()` cuando el
    /// store esté listo (arranque manual).
    pub manual_persist: bool,
}

impl Default for PersistorConfig {
    fn default() -> Self {
        PersistorConfig { manual_persist: false }
    }
}

impl PersistorConfig {
    /// Construye la configuración leyendo el entorno (carga `.env` si
    /// existe). Variables reconocidas:
    /// - `PERSIST_MANUAL`: "1"/"true" activa el arranque manual.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env_value(std::env::var("PERSIST_MANUAL").ok())
    }

    /// Parte pura de `from_env`, separada para poder probarla sin tocar el
    /// entorno del proceso.
    pub fn from_env_value(manual: Option<String>) -> Self {
        let manual_persist = manual.map(|v| {
                                       let v = v.trim().to_ascii_lowercase();
                                       v == "1" || v == "true" || v == "yes"
                                   })
                                   .unwrap_or(false);
        PersistorConfig { manual_persist }
    }
}
