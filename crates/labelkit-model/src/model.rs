#![forbid(unsafe_code)]

//! Shared label state with change notification.
//!
//! # Design
//!
//! [`LabelModel`] keeps its single `value` attribute in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). Cloning a model produces a
//! second handle to the **same** state, which is how views hold a non-owning
//! reference to the model they display. Mutations that actually change the
//! value bump a version counter and notify all live subscribers in
//! registration order, synchronously, before the mutating call returns.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: no borrow is held while subscriber callbacks
//!   run, so a callback may call `set_value()` again. The nested mutation
//!   notifies before the outer notification finishes; a callback that does
//!   this must converge on a fixed value or the recursion is unbounded.
//!   `update()` is different: its closure runs under the mutable borrow, so
//!   touching the model from inside it panics.
//! - **Subscriber leak**: a [`Subscription`] guard held forever keeps its
//!   callback registered. Dead entries are pruned lazily during notify.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Value a freshly constructed model reports before anything is set.
pub const DEFAULT_VALUE: &str = "Hello World";

/// A subscriber callback stored as a strong `Rc` inside the [`Subscription`]
/// guard, handed to the model as `Weak`.
type CallbackRc = Rc<dyn Fn(&str)>;
type CallbackWeak = Weak<dyn Fn(&str)>;

/// Shared interior for [`LabelModel`].
struct ModelInner {
    value: String,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak>,
}

/// Shared, observable label state.
///
/// # Invariants
///
/// 1. A fresh model reports [`DEFAULT_VALUE`].
/// 2. `version` increments by exactly 1 on each value-changing mutation.
/// 3. Setting the current value again is a no-op (no notify, no bump).
/// 4. Subscribers are notified in registration order, before the mutating
///    call returns.
pub struct LabelModel {
    inner: Rc<RefCell<ModelInner>>,
}

// Manual Clone: shares the same Rc.
impl Clone for LabelModel {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for LabelModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LabelModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LabelModel")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl LabelModel {
    /// Create a model holding [`DEFAULT_VALUE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_value(DEFAULT_VALUE)
    }

    /// Create a model holding an explicit initial value, e.g. when the host
    /// recreates a model from previously captured state.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ModelInner {
                value: value.into(),
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.inner.borrow().value.as_str())
    }

    /// Set a new value. Any string is accepted. If the new value differs
    /// from the current one the version is incremented and all live
    /// subscribers are notified before this call returns; otherwise nothing
    /// happens.
    ///
    /// Calling this from inside a subscriber callback re-enters the
    /// notification cycle; see the module docs on re-entrant mutation.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Modify the value in place via a closure. If the value changes
    /// (compared against a snapshot), the version is incremented and
    /// subscribers are notified.
    ///
    /// # Panics
    ///
    /// Panics if `f` reads or mutates the model itself: the value is
    /// mutably borrowed while `f` runs.
    pub fn update(&self, f: impl FnOnce(&mut String)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.value.clone();
            f(&mut inner.value);
            if inner.value != old {
                inner.version += 1;
                true
            } else {
                false
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Subscribe to value changes. The callback receives the new value each
    /// time it changes.
    ///
    /// Returns a [`Subscription`] guard — the disposer for this entry.
    /// Dropping the guard unsubscribes the callback (it will not be called
    /// after drop, though the dead entry may linger in the subscriber list
    /// until the next notify prunes it).
    pub fn subscribe(&self, callback: impl Fn(&str) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Current version number. Increments by 1 on each value-changing
    /// mutation. Useful for dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of currently registered subscribers (including dead ones not
    /// yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first so no borrow is held during the calls.
        let callbacks: Vec<CallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        let value = self.inner.borrow().value.clone();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            subscribers = callbacks.len(),
            value = %value,
            "model_notify"
        );

        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII disposer for a subscriber callback.
///
/// Dropping the `Subscription` drops the strong reference to the callback,
/// so the `Weak` entry in the model's subscriber list fails to upgrade on
/// the next notification cycle.
pub struct Subscription {
    _guard: CallbackRc,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
