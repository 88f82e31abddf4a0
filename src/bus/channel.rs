use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::types::SubscriberId;

/// One multicast notification channel.
///
/// An explicit subscriber registry: every subscriber owns an unbounded queue
/// fed by `emit`, so a slow consumer never blocks the producer and each
/// subscriber sees emissions in emit order. There is no replay; a subscriber
/// only receives events emitted after it subscribed.
pub struct Channel<E> {
    subscribers: Arc<DashMap<SubscriberId, mpsc::UnboundedSender<E>>>,
    next_id: AtomicU64
}

impl<E: Clone> Channel<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(DashMap::new()),
            next_id: AtomicU64::new(0)
        }
    }

    /// Registers a new subscriber and returns its receiving handle.
    pub fn subscribe(&self) -> Subscription<E> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.subscribers.insert(id, sender);

        Subscription {
            id,
            subscribers: self.subscribers.clone(),
            receiver
        }
    }

    /// Fans the event out to every live subscriber, fire-and-forget.
    ///
    /// Subscribers whose receiving end has gone away are pruned here.
    pub fn emit(&self, event: E) {
        self.subscribers.retain(|_, sender| sender.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for Channel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription to one channel.
///
/// Yields events in emission order for as long as the subscription is held;
/// dropping it unsubscribes.
pub struct Subscription<E> {
    id: SubscriberId,
    subscribers: Arc<DashMap<SubscriberId, mpsc::UnboundedSender<E>>>,
    receiver: mpsc::UnboundedReceiver<E>
}

impl<E> Subscription<E> {
    /// Waits for the next event. Returns `None` only once the channel itself
    /// is gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Takes the next already-delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        self.subscribers.remove(&self.id);
    }
}
