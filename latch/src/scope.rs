//! Shared context threaded through sibling actions.
//!
//! A parent view owns one [`ActionScope`]. Every action created from it
//! shares the scope's [`RunningSlot`] and [`LoadingSignal`], which replaces
//! ambient environment lookups with explicit constructor arguments.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::action::AsyncAction;
use crate::wakeup::WakeupSender;
use crate::{ActionId, ExecutionPolicy};

/// Lock a mutex, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The identifier currently occupying the in-flight slot, if any.
///
/// Cheap to clone; all clones observe the same slot.
#[derive(Debug, Clone, Default)]
pub struct RunningSlot {
    inner: Arc<Mutex<Option<ActionId>>>,
}

impl RunningSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the occupying identifier
    pub fn get(&self) -> Option<ActionId> {
        lock(&self.inner).clone()
    }

    pub fn is_occupied(&self) -> bool {
        lock(&self.inner).is_some()
    }

    /// Occupy the slot with `id`. Returns false when it already held `id`
    /// and nothing was written.
    pub fn occupy(&self, id: &ActionId) -> bool {
        let mut guard = lock(&self.inner);
        if guard.as_ref() == Some(id) {
            return false;
        }
        *guard = Some(id.clone());
        true
    }

    /// Occupy the slot with `id` if it is free, or unconditionally when
    /// `allow_concurrent` is set. The check and the write happen under one
    /// lock, so two siblings can never both claim a free slot.
    pub fn try_occupy(&self, id: &ActionId, allow_concurrent: bool) -> bool {
        let mut guard = lock(&self.inner);
        if guard.is_some() && !allow_concurrent {
            return false;
        }
        if guard.as_ref() != Some(id) {
            *guard = Some(id.clone());
        }
        true
    }

    /// Release the slot, whoever holds it.
    pub fn release(&self) {
        *lock(&self.inner) = None;
    }

    /// Release the slot only if `id` holds it.
    pub fn release_if(&self, id: &ActionId) -> bool {
        let mut guard = lock(&self.inner);
        if guard.as_ref() == Some(id) {
            *guard = None;
            true
        } else {
            false
        }
    }
}

/// Host-supplied boolean that forces every action in a scope to look busy.
#[derive(Debug, Clone, Default)]
pub struct LoadingSignal {
    inner: Arc<AtomicBool>,
}

impl LoadingSignal {
    pub fn new(value: bool) -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(value)),
        }
    }

    pub fn get(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    pub fn set(&self, value: bool) {
        self.inner.store(value, Ordering::SeqCst);
    }
}

/// Parent scope owning one running slot for a group of sibling actions.
///
/// # Example
///
/// ```ignore
/// let (wakeup, mut rx) = latch::wakeup::channel();
/// let scope = ActionScope::new().with_wakeup(wakeup);
///
/// let save = scope.action("save", ExecutionPolicy::new());
/// let publish = scope.action("publish", ExecutionPolicy::new());
///
/// save.activate(|_cancel| async move { store().await })?;
/// assert!(publish.is_disabled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionScope {
    slot: RunningSlot,
    loading: LoadingSignal,
    wakeup: Option<WakeupSender>,
}

impl ActionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a wakeup through `sender` whenever an action in this scope
    /// changes state.
    pub fn with_wakeup(mut self, sender: WakeupSender) -> Self {
        self.wakeup = Some(sender);
        self
    }

    /// Share an existing ambient loading signal instead of a fresh one.
    pub fn with_loading(mut self, loading: LoadingSignal) -> Self {
        self.loading = loading;
        self
    }

    pub fn slot(&self) -> &RunningSlot {
        &self.slot
    }

    pub fn loading(&self) -> &LoadingSignal {
        &self.loading
    }

    pub fn wakeup(&self) -> Option<&WakeupSender> {
        self.wakeup.as_ref()
    }

    /// Create an action bound to this scope's slot.
    pub fn action(&self, id: impl Into<ActionId>, policy: ExecutionPolicy) -> AsyncAction {
        AsyncAction::new(id.into(), policy, self.clone())
    }
}
