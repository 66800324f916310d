//! Tests for builder modules

use std::sync::Arc;
use std::time::Duration;

use meep_initiative::builders::InitiativeBuilder;
use meep_initiative::config::{InitiativeConfig, OrphanPolicy};
use meep_initiative::core::{
    Actor, AuditAction, InMemoryAuditSink, Pacing, SchedulerError, SharedAuditSink, Sleeper,
};
use meep_initiative::infra::ScriptedMind;
use parking_lot::Mutex;

struct NoSleep;

impl Sleeper for NoSleep {
    fn sleep(&self, _duration: Duration) {}
}

#[test]
fn test_builder_defaults() {
    let builder = InitiativeBuilder::new(InitiativeConfig::default());
    assert!(builder.audit_log().is_none());
    assert_eq!(builder.config().sleep_per_tick_ms, 0);

    let init = builder.build().unwrap();
    assert_eq!(init.pacing(), Pacing::Instant);
    assert!(init.is_idle());
}

#[test]
fn test_builder_rejects_negative_pace() {
    let config = InitiativeConfig {
        sleep_per_tick_ms: -10,
        ..InitiativeConfig::default()
    };
    let err = InitiativeBuilder::new(config).build().unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidPace(_)));
}

#[test]
fn test_builder_wires_audit_log_from_capacity() {
    let config = InitiativeConfig {
        audit_capacity: 16,
        ..InitiativeConfig::default()
    };
    let builder = InitiativeBuilder::new(config);
    let log = builder.audit_log().unwrap();
    let mut init = builder.build().unwrap();

    let mind = Arc::new(ScriptedMind::idle());
    init.add(Actor::new("a", 1).with_mind(&mind)).unwrap();
    assert!(init.advance());

    let actions: Vec<AuditAction> = log.lock().events().iter().map(|e| e.action).collect();
    assert_eq!(actions, [AuditAction::Added, AuditAction::Acted]);
}

#[test]
fn test_builder_custom_sleeper_and_policy() {
    let config = InitiativeConfig {
        sleep_per_tick_ms: 1000,
        orphan_policy: OrphanPolicy::Requeue,
        audit_capacity: 0,
    };
    let mut init = InitiativeBuilder::new(config)
        .with_sleeper(NoSleep)
        .build()
        .unwrap();
    assert_eq!(init.pacing(), Pacing::Paced(Duration::from_secs(1)));

    let orphan = Actor::new("ghost", 1);
    init.add(orphan.clone()).unwrap();
    assert!(!init.advance());
    assert!(init.contains(&orphan));
}

#[test]
fn test_builder_explicit_audit_replaces_log() {
    let config = InitiativeConfig {
        audit_capacity: 4,
        ..InitiativeConfig::default()
    };
    let custom: SharedAuditSink = Arc::new(Mutex::new(InMemoryAuditSink::new(4)));
    let builder = InitiativeBuilder::new(config).with_audit(Box::new(Arc::clone(&custom)));
    assert!(builder.audit_log().is_none());

    let mut init = builder.build().unwrap();
    init.add(Actor::new("a", 1)).unwrap();
    assert_eq!(custom.lock().events_with(AuditAction::Added).len(), 1);
}
