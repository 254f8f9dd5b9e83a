//! Render notifications from actions to the host.
//!
//! An [`ActionScope`](crate::ActionScope) built with a [`WakeupSender`] pings
//! the host whenever one of its actions is admitted, completes, or is
//! cancelled by the host. The ping carries no payload: the host re-reads
//! `is_disabled` / `is_visibly_loading` on its next pass. Rejected
//! activations and cancelled runs finishing late change nothing and stay
//! silent.

use tokio::sync::mpsc;

/// Handle actions use to request a render pass.
///
/// Shared by every action in a scope and moved into spawned runs.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Request a render pass without waiting.
    ///
    /// Pings coalesce: when the buffer is full a render is already pending,
    /// and a closed receiver means the host is gone.
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Host side of the channel, owned by the render scheduler.
#[derive(Debug)]
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Park the render loop until some action changes state.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Take every pending ping, returning how many there were.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

/// Create the sender for an [`ActionScope`](crate::ActionScope) and the
/// receiver for the host's render loop.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
