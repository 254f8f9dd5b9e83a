//! Action error types.

use std::any::Any;

use thiserror::Error;

use crate::ActionId;

/// Errors that can occur when activating an action.
#[derive(Debug, Clone, Error)]
pub enum ActionError {
    /// `activate` was called outside a tokio runtime.
    #[error("action '{0}' activated outside a tokio runtime")]
    NoRuntime(ActionId),

    /// The operation panicked while building its future. No run was started
    /// and no state changed.
    #[error("action '{id}' operation panicked before starting: {message}")]
    OperationPanicked {
        /// The action that was activated.
        id: ActionId,
        /// Panic message extracted from the panic payload.
        message: String,
    },
}

/// Extract a human-readable message from a panic payload.
pub(crate) fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
