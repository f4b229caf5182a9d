use rehydrate::bus::ActionBus;
use rehydrate::coordinator::CoordinatorConfig;
use rehydrate::domain::{PersistAction, FLUSH, PERSIST, REHYDRATE};
use rehydrate::errors::RehydrateError;
use rehydrate::stubs::{FailingBus, RecordingBus};
use rehydrate::Coordinator;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

#[test]
fn recording_bus_preserves_publish_order() {
  let bus = RecordingBus::new();
  bus.publish(PersistAction::Persist).expect("publish");
  bus.publish(PersistAction::rehydrate("a", None, None)).expect("publish");
  bus.publish(PersistAction::Flush).expect("publish");
  let actions = bus.actions();
  assert_eq!(actions.len(), 3);
  assert_eq!(actions[0].action_type(), PERSIST);
  assert_eq!(actions[1].action_type(), REHYDRATE);
  assert_eq!(actions[2].action_type(), FLUSH);
}

#[test]
fn recording_bus_find_by_type_returns_last_match() {
  let bus = RecordingBus::new();
  bus.publish(PersistAction::rehydrate("first", None, None)).expect("publish");
  bus.publish(PersistAction::rehydrate("second", Some(json!(1)), None)).expect("publish");
  let found = bus.find_by_type(REHYDRATE).expect("find");
  assert_eq!(found,
             PersistAction::Rehydrate { key: "second".into(),
                                        payload: Some(json!(1)),
                                        err: None });
  assert!(bus.find_by_type(FLUSH).is_none());
}

#[test]
fn recording_bus_records_carry_timestamps() {
  let bus = RecordingBus::new();
  let before = Utc::now();
  bus.publish(PersistAction::Persist).expect("publish");
  let records = bus.records();
  assert_eq!(records.len(), 1);
  assert!(records[0].created_at >= before);
  assert!(records[0].created_at <= Utc::now());
}

#[test]
fn recording_bus_clear_empties_history() {
  let bus = RecordingBus::new();
  bus.publish(PersistAction::Purge).expect("publish");
  assert_eq!(bus.actions().len(), 1);
  bus.clear();
  assert!(bus.actions().is_empty());
}

#[test]
fn failing_bus_propagates_transport_error() {
  let coord = Coordinator::new(Arc::new(FailingBus), CoordinatorConfig {}, None);
  coord.register("canary").expect("register does not touch the bus");
  let err = coord.rehydrate("canary", None, None).expect_err("publish must fail");
  assert!(matches!(err, RehydrateError::Transport(_)));
}

#[test]
fn rehydrate_action_serializes_with_wire_tag() {
  let action = PersistAction::rehydrate("canary", Some(json!({"foo": "bar"})), None);
  let value = serde_json::to_value(&action).expect("serialize");
  assert_eq!(value["type"], json!("persist/REHYDRATE"));
  assert_eq!(value["key"], json!("canary"));
  assert_eq!(value["payload"], json!({"foo": "bar"}));
  assert_eq!(value["err"], json!(null));
  let back: PersistAction = serde_json::from_value(value).expect("deserialize");
  assert_eq!(back, action);
}
