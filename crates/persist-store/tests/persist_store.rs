use persist_store::{persist_store, PersistorConfig};
use rehydrate::domain::{PersistAction, FLUSH, PAUSE, PERSIST, PURGE};
use rehydrate::stubs::RecordingBus;
use rehydrate::PersistorState;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn persist_store_publishes_initial_persist_action() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus.clone(), PersistorConfig::default(), None).expect("persist_store");
  let action = bus.find_by_type(PERSIST).expect("persist action published");
  assert_eq!(action, PersistAction::Persist);
  assert!(!persistor.is_paused().expect("is_paused"));
}

#[test]
fn manual_persist_defers_initial_action() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus.clone(),
                                PersistorConfig { manual_persist: true },
                                None).expect("persist_store");
  assert!(bus.find_by_type(PERSIST).is_none());
  assert!(persistor.is_paused().expect("is_paused"));

  persistor.persist().expect("persist");
  assert!(bus.find_by_type(PERSIST).is_some());
  assert!(!persistor.is_paused().expect("is_paused"));
}

#[test]
fn register_adds_key_to_registry() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus, PersistorConfig::default(), None).expect("persist_store");
  persistor.register("canary").expect("register");
  assert_eq!(persistor.get_state().expect("state").registry, vec!["canary".to_string()]);
}

#[test]
fn rehydrate_clears_registry_and_flags_bootstrapped() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus, PersistorConfig::default(), None).expect("persist_store");
  persistor.register("canary").expect("register");
  assert!(!persistor.get_state().expect("state").bootstrapped);
  persistor.rehydrate("canary", Some(json!({"foo": "bar"})), None).expect("rehydrate");
  let state = persistor.get_state().expect("state");
  assert!(state.registry.is_empty());
  assert!(state.bootstrapped);
}

#[test]
fn bootstrap_callback_fires_at_most_once_via_persistor() {
  let bus = Arc::new(RecordingBus::new());
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let persistor = persist_store(bus,
                                PersistorConfig::default(),
                                Some(Box::new(move || {
                                  counter.fetch_add(1, Ordering::SeqCst);
                                }))).expect("persist_store");

  persistor.register("canary").expect("register");
  persistor.rehydrate("canary", Some(json!({"foo": "bar"})), None).expect("rehydrate");
  assert_eq!(calls.load(Ordering::SeqCst), 1);

  persistor.register("canary").expect("register");
  persistor.rehydrate("canary", Some(json!({"foo": "bar"})), None).expect("rehydrate");
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn pause_flush_and_purge_publish_their_actions() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus.clone(), PersistorConfig::default(), None).expect("persist_store");

  persistor.pause().expect("pause");
  assert!(persistor.is_paused().expect("is_paused"));
  assert_eq!(bus.find_by_type(PAUSE), Some(PersistAction::Pause));

  persistor.flush().expect("flush");
  assert_eq!(bus.find_by_type(FLUSH), Some(PersistAction::Flush));

  persistor.purge().expect("purge");
  assert_eq!(bus.find_by_type(PURGE), Some(PersistAction::Purge));

  // ninguna señal de ciclo de vida toca el registro
  let state = persistor.get_state().expect("state");
  assert!(state.registry.is_empty());
  assert!(!state.bootstrapped);
}

#[test]
fn subscribe_delivers_post_call_snapshots() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus, PersistorConfig::default(), None).expect("persist_store");
  let seen: Arc<Mutex<Vec<PersistorState>>> = Arc::new(Mutex::new(Vec::new()));
  let sink = seen.clone();
  persistor.subscribe(Box::new(move |state| {
             sink.lock().expect("seen").push(state.clone());
           }))
           .expect("subscribe");

  persistor.register("canary").expect("register");
  persistor.rehydrate("canary", None, None).expect("rehydrate");

  let seen = seen.lock().expect("seen");
  assert_eq!(seen.len(), 2);
  assert_eq!(seen[0],
             PersistorState { registry: vec!["canary".to_string()],
                              bootstrapped: false });
  assert_eq!(seen[1],
             PersistorState { registry: vec![],
                              bootstrapped: true });
}

#[test]
fn unsubscribe_stops_delivery_without_touching_others() {
  let bus = Arc::new(RecordingBus::new());
  let persistor = persist_store(bus, PersistorConfig::default(), None).expect("persist_store");
  let first = Arc::new(AtomicUsize::new(0));
  let second = Arc::new(AtomicUsize::new(0));

  let c1 = first.clone();
  let id1 = persistor.subscribe(Box::new(move |_| {
                      c1.fetch_add(1, Ordering::SeqCst);
                    }))
                    .expect("subscribe");
  let c2 = second.clone();
  persistor.subscribe(Box::new(move |_| {
             c2.fetch_add(1, Ordering::SeqCst);
           }))
           .expect("subscribe");

  persistor.register("a").expect("register");
  assert!(persistor.unsubscribe(id1).expect("unsubscribe"));
  assert!(!persistor.unsubscribe(id1).expect("second unsubscribe"));
  persistor.register("b").expect("register");

  assert_eq!(first.load(Ordering::SeqCst), 1);
  assert_eq!(second.load(Ordering::SeqCst), 2);
}
