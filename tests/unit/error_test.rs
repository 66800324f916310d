//! Tests for error types

use meep_initiative::core::{Actor, SchedulerError};

#[test]
fn test_duplicate_actor_error() {
    let actor = Actor::new("a", 1);
    let err = SchedulerError::DuplicateActor(actor.id());
    assert_eq!(format!("{err}"), format!("actor already scheduled: {}", actor.id()));
}

#[test]
fn test_invalid_pace_error() {
    let err = SchedulerError::InvalidPace("negative".to_string());
    assert_eq!(format!("{err}"), "invalid pace: negative");
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("bad field".to_string());
    assert_eq!(format!("{err}"), "invalid configuration: bad field");
}

#[test]
fn test_errors_convert_to_anyhow() {
    fn fails() -> meep_initiative::core::AppResult<()> {
        let result: Result<(), SchedulerError> = Err(SchedulerError::InvalidPace("x".into()));
        result?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(err.downcast_ref::<SchedulerError>().is_some());
}
