//! Tests for configuration validation

use std::collections::HashMap;
use std::time::Duration;

use meep_initiative::config::{InitiativeConfig, OrphanPolicy};
use meep_initiative::core::{Pacing, SchedulerError};

#[test]
fn test_default_config_is_instant() {
    let config = InitiativeConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.pacing().unwrap(), Pacing::Instant);
    assert_eq!(config.orphan_policy, OrphanPolicy::Drop);
    assert_eq!(config.audit_capacity, 0);
}

#[test]
fn test_paced_config() {
    let config = InitiativeConfig {
        sleep_per_tick_ms: 40,
        ..InitiativeConfig::default()
    };
    assert_eq!(
        config.pacing().unwrap(),
        Pacing::Paced(Duration::from_millis(40))
    );
}

#[test]
fn test_negative_sleep_is_invalid() {
    let config = InitiativeConfig {
        sleep_per_tick_ms: -5,
        ..InitiativeConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(matches!(config.pacing(), Err(SchedulerError::InvalidPace(_))));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "sleep_per_tick_ms": 100,
        "orphan_policy": "requeue",
        "audit_capacity": 32
    }"#;

    let config = InitiativeConfig::from_json_str(json).unwrap();
    assert_eq!(config.sleep_per_tick_ms, 100);
    assert_eq!(config.orphan_policy, OrphanPolicy::Requeue);
    assert_eq!(config.audit_capacity, 32);
}

#[test]
fn test_config_from_json_uses_defaults() {
    let config = InitiativeConfig::from_json_str("{}").unwrap();
    assert_eq!(config, InitiativeConfig::default());
}

#[test]
fn test_config_from_json_rejects_negative_sleep() {
    let err = InitiativeConfig::from_json_str(r#"{"sleep_per_tick_ms": -1}"#).unwrap_err();
    assert!(err.contains("sleep_per_tick_ms"));
}

#[test]
fn test_config_from_json_rejects_garbage() {
    let err = InitiativeConfig::from_json_str("not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_orphan_policy_parse() {
    assert_eq!("Drop".parse::<OrphanPolicy>().unwrap(), OrphanPolicy::Drop);
    assert_eq!(" requeue ".parse::<OrphanPolicy>().unwrap(), OrphanPolicy::Requeue);
    assert!("keep".parse::<OrphanPolicy>().is_err());
}

#[test]
fn test_config_from_variables() {
    let vars: HashMap<&str, &str> = [
        ("MEEP_SLEEP_PER_TICK_MS", " 15 "),
        ("MEEP_ORPHAN_POLICY", "requeue"),
        ("MEEP_AUDIT_CAPACITY", "8"),
    ]
    .into_iter()
    .collect();

    let config =
        InitiativeConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();

    assert_eq!(config.sleep_per_tick_ms, 15);
    assert_eq!(config.orphan_policy, OrphanPolicy::Requeue);
    assert_eq!(config.audit_capacity, 8);
}

#[test]
fn test_config_from_variables_defaults_and_errors() {
    let config = InitiativeConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, InitiativeConfig::default());

    let err = InitiativeConfig::from_lookup(|key| {
        (key == "MEEP_SLEEP_PER_TICK_MS").then(|| "-5".to_string())
    })
    .unwrap_err();
    assert!(!err.is_empty());

    let err = InitiativeConfig::from_lookup(|key| {
        (key == "MEEP_AUDIT_CAPACITY").then(|| "lots".to_string())
    })
    .unwrap_err();
    assert!(err.starts_with("MEEP_AUDIT_CAPACITY"));
}
