pub mod action;
pub mod error;
pub mod id;
pub mod policy;
pub mod scope;
pub mod wakeup;

pub use action::{Activation, ActionStatus, AsyncAction};
pub use error::ActionError;
pub use id::ActionId;
pub use policy::ExecutionPolicy;
pub use scope::{ActionScope, LoadingSignal, RunningSlot};

pub use tokio_util::sync::CancellationToken;

pub mod prelude {
    pub use crate::action::{Activation, ActionStatus, AsyncAction};
    pub use crate::error::ActionError;
    pub use crate::id::ActionId;
    pub use crate::policy::ExecutionPolicy;
    pub use crate::scope::{ActionScope, LoadingSignal, RunningSlot};
    pub use crate::wakeup::{WakeupReceiver, WakeupSender};
    pub use tokio_util::sync::CancellationToken;
}
