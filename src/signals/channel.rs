//! Signal notification channel.
//!
//! A minimal process-wide publish/subscribe relay. Subscribers are invoked
//! synchronously, in registration order, with the same immutable
//! [`TradingSignal`] value; there is no queuing, backpressure, or delivery
//! guarantee beyond "called once per currently-registered subscriber during
//! the publish call".

use crate::models::TradingSignal;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

type Callback = Arc<dyn Fn(&TradingSignal) + Send + Sync + 'static>;

/// Handle returned by [`SignalChannel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// Broadcast relay for newly computed signals.
///
/// The subscriber list is the only shared mutable state in the engine. It is
/// guarded by a mutex, and `publish` works from a snapshot taken under the
/// lock, so subscriber callbacks may freely re-enter `subscribe` or
/// `unsubscribe` without deadlocking.
pub struct SignalChannel {
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_id: AtomicU64,
}

impl SignalChannel {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a callback for every subsequently published signal.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&TradingSignal) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.push((id, Arc::new(callback)));
        Subscription(id)
    }

    /// Remove a previously registered callback. Returns `false` when the
    /// subscription was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != subscription.0);
        subscribers.len() != before
    }

    /// Deliver `signal` to every currently registered subscriber,
    /// synchronously and in registration order.
    ///
    /// A panicking subscriber is isolated: the panic is caught and logged,
    /// and delivery continues with the remaining subscribers.
    pub fn publish(&self, signal: &TradingSignal) {
        let snapshot: Vec<(u64, Callback)> = {
            let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
            subscribers.clone()
        };

        for (id, callback) in snapshot {
            if panic::catch_unwind(AssertUnwindSafe(|| callback(signal))).is_err() {
                warn!(subscriber = id, "signal subscriber panicked during publish");
            }
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Default for SignalChannel {
    fn default() -> Self {
        Self::new()
    }
}
