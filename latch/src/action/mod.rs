//! Single-flight async actions.
//!
//! An [`AsyncAction`] backs one activatable control. Each activation is
//! checked against the action's own run state, the scope's shared
//! [`RunningSlot`](crate::scope::RunningSlot) and its [`ExecutionPolicy`],
//! then either rejected or started on the current tokio runtime.
//!
//! Cancellation is cooperative. A superseded run's token is cancelled and
//! the operation is expected to observe it; the run's completion then leaves
//! all state alone so the superseding run owns the transition back to idle.

mod status;

use std::collections::BTreeMap;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::extract_panic_message;
use crate::scope::{lock, ActionScope};
use crate::{ActionError, ActionId, ExecutionPolicy};

pub use status::ActionStatus;

/// Outcome of [`AsyncAction::activate`].
#[derive(Debug)]
pub enum Activation {
    /// Admission was not allowed; nothing changed.
    Rejected,
    /// A new run was spawned.
    Started {
        /// Generation of the new run, unique per action.
        generation: u64,
        /// Whether a previous run's token was cancelled first.
        cancelled_previous: bool,
        /// Resolves after the run's completion has been applied.
        handle: JoinHandle<()>,
    },
}

impl Activation {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    /// Take the join handle of a started run.
    pub fn into_handle(self) -> Option<JoinHandle<()>> {
        match self {
            Self::Started { handle, .. } => Some(handle),
            Self::Rejected => None,
        }
    }
}

#[derive(Debug, Default)]
struct RunState {
    self_running: bool,
    /// Generation of the most recently started run, while it is in flight.
    current: Option<u64>,
    /// Tokens of every in-flight run that has not been cancelled.
    in_flight: BTreeMap<u64, CancellationToken>,
    last_generation: u64,
}

/// Async action state machine for one control.
#[derive(Debug)]
pub struct AsyncAction {
    id: ActionId,
    policy: ExecutionPolicy,
    scope: ActionScope,
    run: Arc<Mutex<RunState>>,
}

impl AsyncAction {
    /// Create an idle action. Prefer [`ActionScope::action`].
    pub fn new(id: ActionId, policy: ExecutionPolicy, scope: ActionScope) -> Self {
        Self {
            id,
            policy,
            scope,
            run: Arc::new(Mutex::new(RunState::default())),
        }
    }

    pub fn id(&self) -> &ActionId {
        &self.id
    }

    pub fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    pub fn scope(&self) -> &ActionScope {
        &self.scope
    }

    pub fn status(&self) -> ActionStatus {
        let run = lock(&self.run);
        ActionStatus {
            own_id: self.id.clone(),
            policy: self.policy,
            self_running: run.self_running,
            running_id: self.scope.slot().get(),
            ambient_loading: self.scope.loading().get(),
        }
    }

    pub fn is_running(&self) -> bool {
        lock(&self.run).self_running
    }

    pub fn is_visibly_loading(&self) -> bool {
        self.status().is_visibly_loading()
    }

    pub fn is_disabled(&self) -> bool {
        self.status().is_disabled()
    }

    /// Generation of the most recent run, if it is in flight.
    pub fn current_generation(&self) -> Option<u64> {
        lock(&self.run).current
    }

    /// Number of uncancelled runs still in flight.
    pub fn in_flight(&self) -> usize {
        lock(&self.run).in_flight.len()
    }

    /// Request a new run of `operation`.
    ///
    /// The operation receives the run's cancellation token. Must be called
    /// from within a tokio runtime.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let save = scope.action("save", ExecutionPolicy::new().cancel_running());
    /// save.activate(|cancel| async move {
    ///     tokio::select! {
    ///         _ = cancel.cancelled() => {}
    ///         _ = upload() => {}
    ///     }
    /// })?;
    /// ```
    pub fn activate<F, Fut>(&self, operation: F) -> Result<Activation, ActionError>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let runtime =
            Handle::try_current().map_err(|_| ActionError::NoRuntime(self.id.clone()))?;

        // Rejected operations are never invoked
        let status = self.status();
        if !status.is_admission_allowed() {
            log::debug!(
                "action '{}': activation rejected (self running: {}, slot: {:?})",
                self.id,
                status.self_running,
                status.running_id
            );
            return Ok(Activation::Rejected);
        }

        // Build the future before touching any state, so a panic in the
        // synchronous part of the operation leaves nothing occupied
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let future = panic::catch_unwind(AssertUnwindSafe(move || operation(token))).map_err(
            |payload| {
                let message = extract_panic_message(&payload);
                log::error!("action '{}': operation panicked: {}", self.id, message);
                ActionError::OperationPanicked {
                    id: self.id.clone(),
                    message,
                }
            },
        )?;

        let (generation, cancelled_previous) = {
            let mut run = lock(&self.run);

            // Re-checked under the lock; the slot check and write are atomic
            let allows_concurrent = self.policy.allows_concurrent_executions;
            if (run.self_running && !allows_concurrent)
                || !self.scope.slot().try_occupy(&self.id, allows_concurrent)
            {
                log::debug!("action '{}': activation lost the slot", self.id);
                return Ok(Activation::Rejected);
            }

            let mut cancelled_previous = false;
            if self.policy.cancels_running_execution
                && let Some(previous) = run.current.take()
                && let Some(token) = run.in_flight.remove(&previous)
            {
                log::debug!("action '{}': cancelling run {}", self.id, previous);
                token.cancel();
                cancelled_previous = true;
            }

            run.last_generation += 1;
            let generation = run.last_generation;
            run.current = Some(generation);
            run.in_flight.insert(generation, cancel.clone());
            run.self_running = true;

            (generation, cancelled_previous)
        };

        log::debug!("action '{}': starting run {}", self.id, generation);
        self.notify();

        let completion = Completion {
            id: self.id.clone(),
            generation,
            cancel,
            scope: self.scope.clone(),
            run: Arc::clone(&self.run),
        };

        let handle = runtime.spawn(async move {
            if let Err(panic) = AssertUnwindSafe(future).catch_unwind().await {
                log::error!(
                    "action '{}': run {} panicked: {}",
                    completion.id,
                    completion.generation,
                    extract_panic_message(&panic)
                );
            }
            completion.apply();
        });

        Ok(Activation::Started {
            generation,
            cancelled_previous,
            handle,
        })
    }

    /// Cancel every in-flight run from the host side.
    ///
    /// With no superseding run to take over, this also returns the action to
    /// idle and frees the slot if this action holds it. Returns false when
    /// nothing was in flight.
    pub fn cancel(&self) -> bool {
        {
            let mut run = lock(&self.run);
            if run.in_flight.is_empty() {
                return false;
            }

            for (generation, token) in std::mem::take(&mut run.in_flight) {
                log::debug!("action '{}': host cancelled run {}", self.id, generation);
                token.cancel();
            }
            run.current = None;
            run.self_running = false;
            self.scope.slot().release_if(&self.id);
        }

        self.notify();
        true
    }

    fn notify(&self) {
        if let Some(wakeup) = self.scope.wakeup() {
            wakeup.send();
        }
    }
}

/// Completion bookkeeping moved into a spawned run.
struct Completion {
    id: ActionId,
    generation: u64,
    cancel: CancellationToken,
    scope: ActionScope,
    run: Arc<Mutex<RunState>>,
}

impl Completion {
    fn apply(self) {
        {
            let mut run = lock(&self.run);

            // Checked under the same lock `activate` cancels under, so a
            // cancellation that happened first is always observed here
            if self.cancel.is_cancelled() {
                log::debug!(
                    "action '{}': run {} finished after cancellation",
                    self.id,
                    self.generation
                );
                return;
            }

            run.in_flight.remove(&self.generation);
            self.scope.slot().release();
            run.self_running = false;
            if run.current == Some(self.generation) {
                run.current = None;
            }
        }

        log::debug!("action '{}': run {} completed", self.id, self.generation);
        if let Some(wakeup) = self.scope.wakeup() {
            wakeup.send();
        }
    }
}
