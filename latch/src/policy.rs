//! Execution policy for async actions.

/// How an action treats a new activation while work is in flight.
///
/// Both flags are independent and may be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExecutionPolicy {
    /// Admit new activations even while this or a sibling action runs.
    /// Also keeps the action enabled at all times.
    pub allows_concurrent_executions: bool,

    /// Cancel the previously started run before starting a new one.
    pub cancels_running_execution: bool,
}

impl ExecutionPolicy {
    /// Single-flight: reject activations while anything holds the slot.
    pub const fn new() -> Self {
        Self {
            allows_concurrent_executions: false,
            cancels_running_execution: false,
        }
    }

    /// Allow overlapping executions.
    pub const fn allow_concurrent(mut self) -> Self {
        self.allows_concurrent_executions = true;
        self
    }

    /// Cancel the running execution when a new one is admitted.
    pub const fn cancel_running(mut self) -> Self {
        self.cancels_running_execution = true;
        self
    }
}
