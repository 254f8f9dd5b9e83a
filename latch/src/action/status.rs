use crate::{ActionId, ExecutionPolicy};

/// Snapshot of everything the host needs to render an action.
///
/// All queries are pure functions of these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionStatus {
    pub own_id: ActionId,
    pub policy: ExecutionPolicy,
    /// This action's own run is in flight.
    pub self_running: bool,
    /// Identifier occupying the shared slot.
    pub running_id: Option<ActionId>,
    /// Host-supplied loading override.
    pub ambient_loading: bool,
}

impl ActionStatus {
    /// Idle status for `own_id` with an empty slot.
    pub fn idle(own_id: ActionId, policy: ExecutionPolicy) -> Self {
        Self {
            own_id,
            policy,
            self_running: false,
            running_id: None,
            ambient_loading: false,
        }
    }

    pub fn is_admission_allowed(&self) -> bool {
        (!self.self_running && self.running_id.is_none())
            || self.policy.allows_concurrent_executions
    }

    /// Running here, running under the same identifier elsewhere, or forced
    /// by the ambient signal.
    pub fn is_visibly_loading(&self) -> bool {
        self.self_running || self.running_id.as_ref() == Some(&self.own_id) || self.ambient_loading
    }

    /// Disabled while this action or any slot holder is running, unless
    /// concurrent executions are allowed.
    pub fn is_disabled(&self) -> bool {
        if self.policy.allows_concurrent_executions {
            return false;
        }
        self.self_running || self.running_id.is_some()
    }

    pub fn should_cancel_previous(&self) -> bool {
        self.policy.cancels_running_execution
    }
}
