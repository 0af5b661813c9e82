//! Cancellable request slot shared by the search and detail controllers
//!
//! A [`RequestSlot`] holds at most one live request. Issuing a new one
//! cancels the previous token, which clears a pending debounce timer and
//! drops the in-flight network future. Every update the request task sends
//! back carries its token; updates whose token was cancelled by the time
//! they are received are discarded, so a late response can never land on
//! top of a newer one regardless of completion order.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::FetchError;

/// Progress reported by a request task
#[derive(Debug)]
pub enum Update<T> {
    /// The debounce delay elapsed and the network call started
    Started,
    /// The network call finished
    Finished(Result<T, FetchError>),
}

struct Envelope<T> {
    token: CancellationToken,
    update: Update<T>,
}

/// Holder for the single current request of a controller
pub struct RequestSlot<T> {
    current: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<Envelope<T>>,
    rx: mpsc::UnboundedReceiver<Envelope<T>>,
}

impl<T: Send + 'static> RequestSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            current: None,
            tx,
            rx,
        }
    }

    /// Whether a request is pending or in flight
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Cancel the current request, if any
    ///
    /// Returns `true` when there was something to cancel.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Start a request after `delay`, superseding any previous one
    ///
    /// `fetch` is not polled until the delay has elapsed; a zero delay
    /// starts it right away. Must be called from within a tokio runtime.
    pub fn issue<F>(&mut self, delay: Duration, fetch: F)
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.current = Some(token.clone());
        let tx = self.tx.clone();

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::select! {
                    biased;
                    () = token.cancelled() => return,
                    () = tokio::time::sleep(delay) => {}
                }
            }

            let started = Envelope {
                token: token.clone(),
                update: Update::Started,
            };
            if tx.send(started).is_err() {
                return;
            }

            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!("Request aborted before completion");
                }
                outcome = fetch => {
                    let _ = tx.send(Envelope {
                        token,
                        update: Update::Finished(outcome),
                    });
                }
            }
        });
    }

    /// Filter an update by its token
    fn accept(&mut self, envelope: Envelope<T>) -> Option<Update<T>> {
        if envelope.token.is_cancelled() {
            tracing::debug!("Discarding update from a superseded request");
            return None;
        }
        if matches!(envelope.update, Update::Finished(_)) {
            self.current = None;
        }
        Some(envelope.update)
    }

    /// Next update that is already queued, without waiting
    pub fn try_next(&mut self) -> Option<Update<T>> {
        while let Ok(envelope) = self.rx.try_recv() {
            if let Some(update) = self.accept(envelope) {
                return Some(update);
            }
        }
        None
    }

    /// Wait for the next update from the current request
    ///
    /// Cancel-safe: dropping the future loses no update.
    pub async fn next(&mut self) -> Update<T> {
        loop {
            // The slot keeps its own sender, so the channel never closes.
            let Some(envelope) = self.rx.recv().await else {
                return std::future::pending().await;
            };
            if let Some(update) = self.accept(envelope) {
                return update;
            }
        }
    }
}

impl<T: Send + 'static> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RequestSlot<T> {
    fn drop(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test(start_paused = true)]
    async fn test_delay_then_started_then_finished() {
        let mut slot = RequestSlot::new();
        slot.issue(Duration::from_millis(500), async { Ok(7_u32) });

        assert!(slot.try_next().is_none());
        assert!(matches!(slot.next().await, Update::Started));
        assert!(matches!(slot.next().await, Update::Finished(Ok(7))));
        assert!(!slot.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay_never_runs() {
        let (ran_tx, mut ran_rx) = oneshot::channel::<()>();
        let mut slot = RequestSlot::<u32>::new();
        slot.issue(Duration::from_millis(500), async move {
            let _ = ran_tx.send(());
            Ok(1)
        });

        assert!(slot.cancel());
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(slot.try_next().is_none());
        assert!(ran_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_result_is_discarded() {
        let (old_tx, old_rx) = oneshot::channel::<u32>();
        let (new_tx, new_rx) = oneshot::channel::<u32>();
        let mut slot = RequestSlot::new();

        slot.issue(Duration::ZERO, async move { Ok(old_rx.await.unwrap_or(0)) });
        assert!(matches!(slot.next().await, Update::Started));

        slot.issue(Duration::ZERO, async move { Ok(new_rx.await.unwrap_or(0)) });
        assert!(matches!(slot.next().await, Update::Started));

        // Old request resolves after being superseded; the new one follows.
        let _ = old_tx.send(1);
        let _ = new_tx.send(2);

        assert!(matches!(slot.next().await, Update::Finished(Ok(2))));
    }

    #[tokio::test]
    async fn test_drop_cancels_current() {
        let (release_tx, release_rx) = oneshot::channel::<()>();
        let mut slot = RequestSlot::<u32>::new();
        slot.issue(Duration::ZERO, async move {
            let _ = release_rx.await;
            Ok(1)
        });
        drop(slot);
        // The task observed cancellation and dropped the receiver.
        tokio::task::yield_now().await;
        assert!(release_tx.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_stale_update_is_skipped() {
        let mut slot = RequestSlot::new();
        slot.issue(Duration::ZERO, async { Ok(1_u32) });

        // Let the first request finish while nobody drains the channel.
        tokio::time::sleep(Duration::from_millis(1)).await;

        slot.issue(Duration::ZERO, async { Ok(2_u32) });
        assert!(matches!(slot.next().await, Update::Started));
        assert!(matches!(slot.next().await, Update::Finished(Ok(2))));
    }
}
