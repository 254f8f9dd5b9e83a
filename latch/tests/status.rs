use latch::{ActionId, ActionStatus, ExecutionPolicy};

fn status(policy: ExecutionPolicy) -> ActionStatus {
    ActionStatus::idle(ActionId::new("save"), policy)
}

// =============================================================================
// Default Policy
// =============================================================================

#[test]
fn test_idle_default_policy() {
    let s = status(ExecutionPolicy::default());

    assert!(s.is_admission_allowed());
    assert!(!s.is_disabled());
    assert!(!s.is_visibly_loading());
    assert!(!s.should_cancel_previous());
}

#[test]
fn test_self_running_default_policy() {
    let s = ActionStatus {
        self_running: true,
        running_id: Some(ActionId::new("save")),
        ..status(ExecutionPolicy::default())
    };

    assert!(!s.is_admission_allowed());
    assert!(s.is_disabled());
    assert!(s.is_visibly_loading());
}

#[test]
fn test_self_running_without_slot() {
    // A sibling's completion can clear the slot while this run continues
    let s = ActionStatus {
        self_running: true,
        ..status(ExecutionPolicy::default())
    };

    assert!(!s.is_admission_allowed());
    assert!(s.is_disabled());
    assert!(s.is_visibly_loading());
}

#[test]
fn test_other_identifier_running() {
    let s = ActionStatus {
        running_id: Some(ActionId::new("publish")),
        ..status(ExecutionPolicy::default())
    };

    assert!(!s.is_admission_allowed());
    assert!(s.is_disabled());
    assert!(!s.is_visibly_loading());
}

#[test]
fn test_same_identifier_running_elsewhere() {
    let s = ActionStatus {
        running_id: Some(ActionId::new("save")),
        ..status(ExecutionPolicy::default())
    };

    assert!(!s.is_admission_allowed());
    assert!(s.is_disabled());
    assert!(s.is_visibly_loading(), "shared identifier shows as loading");
}

#[test]
fn test_ambient_loading_forces_loading() {
    let s = ActionStatus {
        ambient_loading: true,
        ..status(ExecutionPolicy::default())
    };

    assert!(s.is_visibly_loading());
    assert!(s.is_admission_allowed(), "ambient loading does not block");
    assert!(!s.is_disabled());
}

// =============================================================================
// Concurrent and Cancelling Policies
// =============================================================================

#[test]
fn test_concurrent_self_running() {
    let s = ActionStatus {
        self_running: true,
        running_id: Some(ActionId::new("save")),
        ..status(ExecutionPolicy::new().allow_concurrent())
    };

    assert!(s.is_admission_allowed());
    assert!(!s.is_disabled());
    assert!(s.is_visibly_loading());
}

#[test]
fn test_concurrent_other_running() {
    let s = ActionStatus {
        running_id: Some(ActionId::new("publish")),
        ..status(ExecutionPolicy::new().allow_concurrent())
    };

    assert!(s.is_admission_allowed());
    assert!(!s.is_disabled());
    assert!(!s.is_visibly_loading());
}

#[test]
fn test_cancel_running_independent_of_state() {
    let policy = ExecutionPolicy::new().cancel_running();
    let idle = status(policy);
    let running = ActionStatus {
        self_running: true,
        running_id: Some(ActionId::new("save")),
        ..status(policy)
    };

    assert!(idle.should_cancel_previous());
    assert!(running.should_cancel_previous());
}

#[test]
fn test_policy_flags_combine() {
    let policy = ExecutionPolicy::new().allow_concurrent().cancel_running();

    assert!(policy.allows_concurrent_executions);
    assert!(policy.cancels_running_execution);
    assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::new());
}

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn test_action_id_equality() {
    assert_eq!(ActionId::new("save"), ActionId::from("save"));
    assert_eq!(ActionId::from(String::from("save")).to_string(), "save");
    assert_ne!(ActionId::unique(), ActionId::unique());
}
