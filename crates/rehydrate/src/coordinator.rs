// Archivo: coordinator.rs
// Propósito: implementar la estructura del `Coordinator` (transición de
// bootstrap).
//
// Nota: el coordinador sólo secuencia registro/completion sobre el
// `Registry` y publica notificaciones; la espera asíncrona real (lecturas
// de storage) ocurre fuera y vuelve a entrar por `rehydrate`.
use crate::bus::ActionBus;
use crate::domain::{PersistAction, PersistorState};
use crate::errors::{RehydrateError, Result};
use crate::registry::Registry;
use std::sync::{Arc, Mutex, MutexGuard};

/// Configuración simple del coordinador.
///
/// Actualmente vacío: sirve como placeholder para futuras opciones (por
/// ejemplo un timeout de rehidratación supervisado). La transición de
/// bootstrap es siempre por flanco; no hay modo level-triggered.
pub struct CoordinatorConfig {
    // Por ahora no contiene campos; se deja para expansión futura.
}

/// Callback de bootstrap: cero argumentos, invocado como mucho una vez.
pub type BootstrapCallback = Box<dyn Fn() + Send + Sync>;

/// Coordinador de rehidratación.
///
/// Responsabilidades principales:
/// - Registrar slices pendientes antes de que empiece su recarga
/// - Consumir completions (con payload o con error) vía `rehydrate`
/// - Publicar una notificación `persist/REHYDRATE` por cada completion
/// - Disparar el callback de bootstrap exactamente una vez, en el flanco
///   "registro no vacío → vacío"
///
/// Nota sobre errores y concurrencia:
/// - Las anomalías de protocolo (completion sin registro, duplicada o
///   tardía) se absorben como no-ops; sólo fallos del bus o del estado
///   interno devuelven `Err`.
/// - El flag se marca ANTES de soltar el lock y de invocar el callback,
///   de modo que llamadas re-entrantes desde el propio callback observan
///   `bootstrapped == true` y no pueden disparar una segunda invocación.
pub struct Coordinator<B>
    where B: ActionBus
{
    bus: Arc<B>,
    #[allow(dead_code)]
    config: CoordinatorConfig,
    registry: Mutex<Registry>,
    on_bootstrap: Option<BootstrapCallback>,
}

impl<B> Coordinator<B> where B: ActionBus
{
    /// Crea una nueva instancia del coordinador. `bus` es el canal de
    /// acciones inyectado; `on_bootstrap` es el callback opcional de
    /// readiness.
    pub fn new(bus: Arc<B>, config: CoordinatorConfig, on_bootstrap: Option<BootstrapCallback>) -> Self {
        Self { bus,
               config,
               registry: Mutex::new(Registry::new()),
               on_bootstrap }
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con
    /// `RehydrateError::State`.
    fn lock_registry(&self) -> Result<MutexGuard<'_, Registry>> {
        self.registry
            .lock()
            .map_err(|e| RehydrateError::State(format!("mutex poisoned: {:?}", e)))
    }

    /// Registra una ocurrencia de `key` como pendiente. No publica nada.
    ///
    /// Registrar la misma key N veces significa que hacen falta N
    /// completions antes de que deje de contar como pendiente. Registrar
    /// después del bootstrap actualiza el registro pero no revierte el flag.
    pub fn register(&self, key: &str) -> Result<()> {
        let mut reg = self.lock_registry()?;
        reg.register(key);
        log::debug!("registrada key '{}' ({} pendientes)", key, reg.len());
        Ok(())
    }

    /// Consume la completion de un slice y publica su notificación.
    ///
    /// Input:
    /// - `key`: slice que completó su recarga.
    /// - `payload`: datos recuperados en éxito (`None` si no hay).
    /// - `err`: indicador de fallo del storage (`None` en éxito). Un error
    ///   cuenta igualmente como completion: un slice fallido no bloquea el
    ///   readiness para siempre.
    ///
    /// La notificación se publica SIEMPRE, haya o no ocurrencia pendiente
    /// que eliminar. Después, si la eliminación vació un registro
    /// previamente no vacío y el flag seguía en `false`, se marca el flag
    /// y se invoca el callback de bootstrap.
    pub fn rehydrate(&self, key: &str, payload: Option<serde_json::Value>, err: Option<String>) -> Result<()> {
        let fire = {
            let mut reg = self.lock_registry()?;
            if !reg.contains(key) {
                // completion sin registro previo: tolerada, pero se anota
                log::warn!("rehydrate de key '{}' sin registro pendiente", key);
            }
            let emptied = reg.complete(key);
            let fire = emptied && !reg.bootstrapped();
            if fire {
                // marcar antes de soltar el lock: llamadas anidadas desde
                // el callback deben observar el estado BOOTSTRAPPED
                reg.mark_bootstrapped();
            }
            fire
        };

        self.bus.publish(PersistAction::rehydrate(key, payload, err))?;

        if fire {
            if let Some(cb) = &self.on_bootstrap {
                cb();
            }
        }
        Ok(())
    }

    /// Snapshot del estado actual: keys pendientes en orden de registro y
    /// flag de bootstrap. Refleja el estado posterior a la última llamada
    /// completada.
    pub fn state(&self) -> Result<PersistorState> {
        let reg = self.lock_registry()?;
        Ok(PersistorState { registry: reg.pending().to_vec(),
                            bootstrapped: reg.bootstrapped() })
    }
}
