//! Listener registry for translation synthesis events.

use fluent_translation_domain::{SessionEvent, TranslationError, TranslationSynthesisEventArgs};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Type alias for boxed future returned by event handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type alias for event handler function
pub type SynthesisHandler = Arc<
    dyn Fn(Arc<TranslationSynthesisEventArgs>) -> BoxFuture<'static, Result<(), TranslationError>>
        + Send
        + Sync
        + 'static,
>;

/// Handle returned by [`SynthesisEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw registration sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Delivers synthesis events to registered listeners.
///
/// Handlers run in registration order. Each receives the same shared
/// event; a failing handler is logged and skipped. Handlers may
/// subscribe or unsubscribe on the bus they are called from; changes
/// apply from the next publish.
pub struct SynthesisEventBus {
    subscribers: RwLock<Vec<(ListenerId, SynthesisHandler)>>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl SynthesisEventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
        }
    }

    /// Publish an event to all subscribers, returning how many accepted it.
    ///
    /// Fails with [`TranslationError::Dispatch`] once the bus is closed.
    pub async fn publish(&self, args: TranslationSynthesisEventArgs) -> Result<usize, TranslationError> {
        if self.is_closed() {
            return Err(TranslationError::Dispatch(format!(
                "event bus closed, dropping event for session {}",
                args.session_id()
            )));
        }

        let event = Arc::new(args);
        let handlers: Vec<(ListenerId, SynthesisHandler)> = self
            .subscribers
            .read()
            .await
            .iter()
            .map(|(id, handler)| (*id, Arc::clone(handler)))
            .collect();
        let mut delivered = 0;

        for (id, handler) in &handlers {
            match handler(Arc::clone(&event)).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::error!(
                        listener = id.get(),
                        session_id = %event.session_id(),
                        "Synthesis listener failed: {}",
                        e
                    );
                }
            }
        }

        tracing::trace!(
            session_id = %event.session_id(),
            reason = ?event.result().reason(),
            delivered,
            listeners = handlers.len(),
            "Published synthesis event"
        );
        Ok(delivered)
    }

    /// Subscribe to synthesis events with a handler function
    pub async fn subscribe<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(Arc<TranslationSynthesisEventArgs>) -> BoxFuture<'static, Result<(), TranslationError>>
            + Send
            + Sync
            + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handler: SynthesisHandler = Arc::new(handler);

        let mut subscribers = self.subscribers.write().await;
        subscribers.push((id, handler));
        tracing::debug!(listener = id.get(), "Synthesis listener registered");
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut subscribers = self.subscribers.write().await;
        let before = subscribers.len();
        subscribers.retain(|(listener, _)| *listener != id);
        before != subscribers.len()
    }

    /// Stop accepting events and drop all handlers.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        let mut subscribers = self.subscribers.write().await;
        let dropped = subscribers.len();
        subscribers.clear();
        tracing::debug!(dropped, "Synthesis event bus closed");
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Check if there are any subscribers
    pub async fn has_subscribers(&self) -> bool {
        !self.subscribers.read().await.is_empty()
    }

    /// Get the number of subscribers
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

impl Default for SynthesisEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SynthesisEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisEventBus")
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
