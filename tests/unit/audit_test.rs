//! Tests for audit sinks

use meep_initiative::core::{
    build_audit_event, Actor, AuditAction, AuditSink, InMemoryAuditSink, TracingAuditSink,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);
    let actor = Actor::new("a", 2);

    sink.record(build_audit_event(3, &actor, AuditAction::Acted));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].round, 3);
    assert_eq!(events[0].actor_id, actor.id());
    assert_eq!(events[0].label, "a");
    assert_eq!(events[0].action, AuditAction::Acted);
    assert!(events[0].created_at_ms > 0);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);
    let actor = Actor::new("a", 2);

    sink.record(build_audit_event(1, &actor, AuditAction::Added));
    sink.record(build_audit_event(2, &actor, AuditAction::Acted));
    sink.record(build_audit_event(3, &actor, AuditAction::Reaped));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].round, 2); // First one popped
    assert_eq!(events[1].action, AuditAction::Reaped);

    sink.clear();
    assert!(sink.events().is_empty());
}

#[test]
fn test_events_with_filters_by_action() {
    let mut sink = InMemoryAuditSink::new(10);
    let actor = Actor::new("a", 2);
    for action in [AuditAction::Added, AuditAction::Suspended, AuditAction::Suspended] {
        sink.record(build_audit_event(1, &actor, action));
    }
    assert_eq!(sink.events_with(AuditAction::Suspended).len(), 2);
    assert!(sink.events_with(AuditAction::Orphaned).is_empty());
}

#[test]
fn test_audit_event_serializes_action_in_snake_case() {
    let event = build_audit_event(1, &Actor::new("a", 2), AuditAction::Orphaned);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "orphaned");
    assert_eq!(json["label"], "a");
}

#[test]
fn test_tracing_sink_accepts_events() {
    let mut sink = TracingAuditSink;
    sink.record(build_audit_event(1, &Actor::new("a", 2), AuditAction::Added));
}
