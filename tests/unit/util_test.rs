//! Tests for utility functions

use meep_initiative::core::Actor;
use meep_initiative::util::{init_tracing, now_ms, ActorId};

#[test]
fn test_actor_ids_are_unique() {
    let a = ActorId::new();
    let b = ActorId::new();
    assert_ne!(a, b);
    assert_eq!(a.to_string(), a.as_uuid().to_string());
}

#[test]
fn test_actor_id_serializes_as_uuid_string() {
    let id = ActorId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: ActorId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_actor_snapshot_round_trip_fields() {
    let actor = Actor::new_with_fatigue("@", 4, 2);
    let snap = actor.snapshot();
    assert_eq!(snap.id, actor.id());
    assert_eq!(snap.label, "@");
    assert_eq!(snap.fatigue, 2);
    assert_eq!(snap.overhead, 4);
    assert!(!snap.has_died);
    assert!(!snap.has_mind);
}

#[test]
fn test_now_ms_is_positive() {
    assert!(now_ms() > 0);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
