// Archivo: persistor.rs
// Propósito: implementar `Persistor`, la capa orquestadora que expone las
// operaciones de alto nivel sobre la persistencia del store anfitrión
// (arrancar/pausar, flush/purge, snapshot de estado, suscripciones) y el
// constructor `persist_store`. Esta capa debe ser invocada desde el
// middleware del store o desde un supervisor externo.
use crate::config::PersistorConfig;
use crate::errors::{PersistorError, Result};
use chrono::{DateTime, Utc};
use rehydrate::{ActionBus, BootstrapCallback, Coordinator, CoordinatorConfig, PersistAction, PersistorState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Listener de estado: recibe un snapshot fresco tras cada operación que
/// muta el registro.
pub type StateListener = Box<dyn Fn(&PersistorState) + Send + Sync>;

/// Handle de persistencia del store anfitrión.
///
/// Orquesta el bus de acciones y el coordinador. El driver externo (el
/// middleware del store) llama `register` una vez por slice antes de su
/// recarga y `rehydrate` una vez por slice al completar; el resto de la
/// superficie son señales de ciclo de vida para el storage subyacente.
///
/// Los listeners registrados con `subscribe` se invocan de forma síncrona
/// y en orden de alta tras cada `register`/`rehydrate`; un listener no
/// debe volver a llamar `subscribe`/`unsubscribe` desde dentro.
pub struct Persistor<B>
    where B: ActionBus
{
    id: Uuid,
    started_at: DateTime<Utc>,
    coordinator: Arc<Coordinator<B>>,
    bus: Arc<B>,
    paused: Mutex<bool>,
    listeners: Mutex<Vec<(u64, StateListener)>>,
    next_listener_id: AtomicU64,
}

/// Construye un `Persistor` inyectando el bus y la configuración.
///
/// El `Coordinator` se construye internamente con el callback de bootstrap
/// opcional. Salvo que `config.manual_persist` esté activo, publica la
/// señal inicial `persist/PERSIST` antes de devolver el handle; con
/// arranque manual el persistor nace pausado y el caller decide cuándo
/// llamar `persist()`.
pub fn persist_store<B>(bus: Arc<B>,
                        config: PersistorConfig,
                        on_bootstrap: Option<BootstrapCallback>)
                        -> Result<Persistor<B>>
    where B: ActionBus + 'static
{
    let coordinator = Arc::new(Coordinator::new(bus.clone(), CoordinatorConfig {}, on_bootstrap));
    let persistor = Persistor { id: Uuid::new_v4(),
                                started_at: Utc::now(),
                                coordinator,
                                bus,
                                paused: Mutex::new(config.manual_persist),
                                listeners: Mutex::new(Vec::new()),
                                next_listener_id: AtomicU64::new(1) };
    if !config.manual_persist {
        persistor.persist()?;
    }
    Ok(persistor)
}

impl<B> Persistor<B> where B: ActionBus
{
    /// Identificador de esta instancia (para trazas y logs).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Instante de construcción del handle.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con
    /// `PersistorError::State`.
    fn lock<'a, T>(&'a self, m: &'a Mutex<T>) -> std::result::Result<MutexGuard<'a, T>, PersistorError> {
        m.lock().map_err(|e| PersistorError::State(format!("mutex poisoned: {:?}", e)))
    }

    /// Arranca (o reanuda) la persistencia: limpia el flag de pausa y
    /// publica `persist/PERSIST`.
    pub fn persist(&self) -> Result<()> {
        *self.lock(&self.paused)? = false;
        self.bus.publish(PersistAction::Persist)?;
        log::debug!("persistor {}: persist", self.id);
        Ok(())
    }

    /// Pausa la persistencia y publica `persist/PAUSE`. No toca el
    /// registro ni el flag de bootstrap.
    pub fn pause(&self) -> Result<()> {
        *self.lock(&self.paused)? = true;
        self.bus.publish(PersistAction::Pause)?;
        log::debug!("persistor {}: pause", self.id);
        Ok(())
    }

    /// Lectura del flag de pausa.
    pub fn is_paused(&self) -> Result<bool> {
        Ok(*self.lock(&self.paused)?)
    }

    /// Pide al storage volcar escrituras pendientes. Señal para capas
    /// inferiores; aquí sólo se publica la acción.
    pub fn flush(&self) -> Result<()> {
        self.bus.publish(PersistAction::Flush)?;
        Ok(())
    }

    /// Pide al storage borrar el estado persistido. Señal para capas
    /// inferiores; aquí sólo se publica la acción.
    pub fn purge(&self) -> Result<()> {
        self.bus.publish(PersistAction::Purge)?;
        Ok(())
    }

    /// Registra un slice pendiente (passthrough al coordinador) y notifica
    /// a los listeners con el snapshot resultante.
    pub fn register(&self, key: &str) -> Result<()> {
        self.coordinator.register(key)?;
        self.notify_listeners()
    }

    /// Entrega la completion de un slice (passthrough al coordinador) y
    /// notifica a los listeners. El callback de bootstrap, si aplica, corre
    /// antes que los listeners.
    pub fn rehydrate(&self, key: &str, payload: Option<serde_json::Value>, err: Option<String>) -> Result<()> {
        self.coordinator.rehydrate(key, payload, err)?;
        self.notify_listeners()
    }

    /// Snapshot del estado: keys pendientes en orden de registro y flag de
    /// bootstrap.
    pub fn get_state(&self) -> Result<PersistorState> {
        Ok(self.coordinator.state()?)
    }

    /// Alta de un listener de estado. Devuelve un id para `unsubscribe`.
    pub fn subscribe(&self, listener: StateListener) -> Result<u64> {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.lock(&self.listeners)?.push((id, listener));
        Ok(id)
    }

    /// Baja de un listener por id. Devuelve `true` si existía.
    pub fn unsubscribe(&self, id: u64) -> Result<bool> {
        let mut listeners = self.lock(&self.listeners)?;
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        Ok(listeners.len() != before)
    }

    fn notify_listeners(&self) -> Result<()> {
        let state = self.get_state()?;
        let listeners = self.lock(&self.listeners)?;
        for (_, listener) in listeners.iter() {
            listener(&state);
        }
        Ok(())
    }
}
