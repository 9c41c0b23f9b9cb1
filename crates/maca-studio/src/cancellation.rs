use std::sync::Arc;

use tokio::sync::watch;

/// Cooperative cancellation for long-running generation jobs.
///
/// Clones share state; once cancelled a token stays cancelled.
#[derive(Clone)]
pub struct CancellationToken {
    cancel_tx: Arc<watch::Sender<bool>>,
    cancel_rx: watch::Receiver<bool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        Self {
            cancel_tx: Arc::new(cancel_tx),
            cancel_rx,
        }
    }

    pub fn cancel(&self) {
        log::info!("Cancellation requested");
        self.cancel_tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        let mut cancel_rx = self.cancel_rx.clone();
        if cancel_rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
