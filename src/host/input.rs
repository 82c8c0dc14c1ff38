//! Explicit input subscriptions.
//!
//! A game subscribes to the input channels it listens on when it is
//! initialized and releases the subscriptions in `cleanup`. The hub only
//! routes input on channels that have a live subscription, so a torn-down
//! game never sees another key press.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Source of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputChannel {
    /// Clicks/taps on board cells.
    Pointer,
    /// Key presses.
    Keyboard,
}

/// A live subscription to one channel. Not `Clone`; the owner releases it.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    channel: InputChannel,
}

impl Subscription {
    /// The subscribed channel.
    #[must_use]
    pub fn channel(&self) -> InputChannel {
        self.channel
    }
}

/// Registry of input subscriptions.
#[derive(Debug, Default)]
pub struct InputRouter {
    next_id: u64,
    subscriptions: FxHashMap<u64, InputChannel>,
}

impl InputRouter {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a channel.
    pub fn subscribe(&mut self, channel: InputChannel) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.subscriptions.insert(id, channel);
        Subscription { id, channel }
    }

    /// Release a subscription. Returns `false` if it was already released.
    pub fn unsubscribe(&mut self, subscription: &Subscription) -> bool {
        self.subscriptions.remove(&subscription.id).is_some()
    }

    /// Release the subscription held in `slot`, if any, and clear the slot.
    pub fn release(&mut self, slot: &mut Option<Subscription>) {
        if let Some(subscription) = slot.take() {
            self.unsubscribe(&subscription);
        }
    }

    /// Whether anything listens on `channel`.
    #[must_use]
    pub fn is_subscribed(&self, channel: InputChannel) -> bool {
        self.subscriptions.values().any(|&c| c == channel)
    }

    /// Total live subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}
