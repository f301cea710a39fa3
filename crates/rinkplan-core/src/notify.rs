#![forbid(unsafe_code)]

//! Commit-signal hub with RAII subscriptions.
//!
//! # Design
//!
//! [`ChangeNotifier<T>`] fans committed values out to subscribers. It does
//! not own the value: components keep their own state and call
//! [`ChangeNotifier::emit`] after each committed mutation. Cloning a
//! notifier produces another handle to the **same** hub; both handles
//! share subscribers.
//!
//! # Contract
//!
//! Emission is not gated on value equality. A commit that leaves the value
//! unchanged (for example an increment that is already clamped at the
//! maximum) still notifies every subscriber. Subscribers that only care
//! about distinct values must compare on their side.
//!
//! # Failure Modes
//!
//! - **Subscriber leak**: [`Subscription`] guards stored indefinitely keep
//!   their callbacks alive. Dead weak references are pruned lazily during
//!   `emit()`.
//! - **Re-entrant emit**: callbacks are collected before they run, so a
//!   callback may emit on the same hub without panicking.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;
use web_time::Instant;

/// A subscriber callback stored as a strong `Rc` inside the guard, handed
/// to the hub as `Weak`.
type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

/// Shared interior for [`ChangeNotifier<T>`].
struct NotifierInner<T> {
    /// Subscribers stored as weak references. Dead entries are pruned on emit.
    subscribers: Vec<CallbackWeak<T>>,
    /// Total commits observed, including value-preserving ones.
    emits: u64,
}

/// A shared commit-signal hub.
///
/// # Invariants
///
/// 1. `emit_count` increments by exactly 1 on every `emit`, whether or not
///    any subscriber is registered.
/// 2. Subscribers are invoked in registration order.
/// 3. Dropping a [`Subscription`] guard stops its callback from being
///    invoked on later emits.
pub struct ChangeNotifier<T> {
    inner: Rc<RefCell<NotifierInner<T>>>,
}

// Manual Clone: shares the same hub.
impl<T> Clone for ChangeNotifier<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ChangeNotifier")
            .field("emits", &inner.emits)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: 'static> ChangeNotifier<T> {
    /// Create a hub with no subscribers and an emit count of 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(NotifierInner {
                subscribers: Vec::new(),
                emits: 0,
            })),
        }
    }

    /// Subscribe to commits. The callback receives a reference to each
    /// committed value.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard unsubscribes
    /// the callback (it will not run after drop, though its slot may stay
    /// in the subscriber list until the next `emit()` prunes it).
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        // `Rc<dyn Fn(&T)>` cannot coerce to `Rc<dyn Any>` directly, so the
        // guard type-erases through a Box.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Notify live subscribers of a committed value and prune dead ones.
    ///
    /// Fires synchronously, in registration order, before returning to the
    /// caller. Safe to call from within a subscriber callback.
    pub fn emit(&self, value: &T) {
        // Collect live callbacks first so no borrow is held while they run.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.emits += 1;
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let started = Instant::now();
        for cb in &callbacks {
            cb(value);
        }
        debug!(
            subscribers = callbacks.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "commit signal propagated"
        );
    }

    /// Total commits observed (monotonic, includes value-preserving ones).
    #[must_use]
    pub fn emit_count(&self) -> u64 {
        self.inner.borrow().emits
    }

    /// Number of registered subscribers (including dead ones not yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` drops the strong `Rc` that keeps the
/// callback alive, so the `Weak` in the hub's subscriber list fails to
/// upgrade on the next emit.
pub struct Subscription {
    /// Type-erased strong reference keeping the callback `Rc` alive.
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
