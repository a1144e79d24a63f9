//! Cancellation for a running sync.

use tokio::sync::watch;

/// Creates a connected handle/token pair.
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    (CancelHandle { cancel_tx }, CancelToken { cancel_rx })
}

/// Handle for cancelling a running sync.
#[derive(Debug)]
pub struct CancelHandle {
    /// Sender to signal cancellation.
    cancel_tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals every token created from this handle.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Returns a new token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            cancel_rx: self.cancel_tx.subscribe(),
        }
    }
}

/// Observes a [`CancelHandle`].
///
/// Dropping the handle without calling [`CancelHandle::cancel`] never
/// cancels the token.
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancel_rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Returns a token that is never cancelled.
    pub fn never() -> Self {
        let (_handle, token) = cancellation();
        token
    }

    /// Returns true once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }

    /// Completes when cancellation is requested; pends forever otherwise.
    pub async fn cancelled(&self) {
        let mut rx = self.cancel_rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::never()
    }
}
