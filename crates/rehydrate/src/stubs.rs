// Archivo: stubs.rs
// Propósito: implementaciones en memoria para pruebas y wiring rápido.
//
// Incluye un bus que graba cada acción publicada (`RecordingBus`) y un bus
// que siempre falla (`FailingBus`). Estas implementaciones no son durables
// y se usan para demos o pruebas locales.
use crate::bus::ActionBus;
use crate::domain::PersistAction;
use crate::errors::{RehydrateError, Result};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Registro de una publicación: acción más instante de publicación.
#[derive(Clone, Debug)]
pub struct PublishedRecord {
    pub action: PersistAction,
    pub created_at: DateTime<Utc>,
}

/// Bus en memoria que graba todas las acciones publicadas, en orden.
///
/// Equivalente para pruebas del canal del store anfitrión: los tests
/// inspeccionan lo publicado con `actions()` o `find_by_type()` en lugar
/// de conectar reducers reales. No garantiza durabilidad.
pub struct RecordingBus {
    records: Mutex<Vec<PublishedRecord>>,
}

impl RecordingBus {
    /// Crea un nuevo bus de grabación vacío.
    pub fn new() -> Self {
        Self { records: Mutex::new(Vec::new()) }
    }

    /// Copia de todas las acciones publicadas, en orden de publicación.
    pub fn actions(&self) -> Vec<PersistAction> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|r| r.action.clone())
            .collect()
    }

    /// Copia de los registros completos (acción + timestamp).
    pub fn records(&self) -> Vec<PublishedRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Busca la última acción publicada con el tag de wire dado
    /// (p.ej. `persist/REHYDRATE`). `None` si no hay ninguna.
    pub fn find_by_type(&self, action_type: &str) -> Option<PersistAction> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .rev()
            .find(|r| r.action.action_type() == action_type)
            .map(|r| r.action.clone())
    }

    /// Vacía el historial de publicaciones.
    pub fn clear(&self) {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Default for RecordingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionBus for RecordingBus {
    /// Graba la acción con el instante actual. Nunca falla.
    fn publish(&self, action: PersistAction) -> Result<()> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PublishedRecord { action,
                                    created_at: Utc::now() });
        Ok(())
    }
}

/// Bus que rechaza toda publicación. Útil para probar la propagación de
/// errores de transporte.
pub struct FailingBus;

impl ActionBus for FailingBus {
    fn publish(&self, _action: PersistAction) -> Result<()> {
        Err(RehydrateError::Transport("bus cerrado".into()))
    }
}
