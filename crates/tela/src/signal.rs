//! Minimal signal/slot notification.
//!
//! A [`Signal`] owns a set of boxed callbacks. Emission is synchronous and
//! happens on the caller's thread; connections can be dropped individually
//! via the [`ConnectionId`] returned from [`Signal::connect`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies a single slot connected to a [`Signal`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A typed notification source.
///
/// Slots receive the emitted value by reference, so `Args` does not have to
/// be `Clone`. Emission while the signal is blocked is silently dropped.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args: Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connects a callback, returning its id for later disconnection.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Removes one connection. Returns `false` when the id is stale.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Blocks or unblocks emission. Returns the previous state.
    pub fn set_blocked(&self, blocked: bool) -> bool {
        self.blocked.swap(blocked, Ordering::AcqRel)
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    /// Invokes every connected slot with `args`.
    ///
    /// Slots are cloned out of the lock before invocation so a slot may
    /// connect or disconnect without deadlocking.
    pub fn emit(&self, args: &Args) {
        if self.is_blocked() {
            return;
        }
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: "tela::signal", slots = slots.len(), "emit");
        for slot in slots {
            slot(args);
        }
    }
}

impl<Args: Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Send + 'static> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_reaches_all_slots() {
        let signal = Signal::<i32>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            signal.connect(move |value| {
                assert_eq!(*value, 7);
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.emit(&7);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disconnect_removes_slot() {
        let signal = Signal::<()>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits2 = hits.clone();
        let id = signal.connect(move |_| {
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));

        signal.emit(&());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blocked_signal_drops_emission() {
        let signal = Signal::<String>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits2 = hits.clone();
        signal.connect(move |_| {
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!signal.set_blocked(true));
        signal.emit(&"ignored".to_owned());
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert!(signal.set_blocked(false));
        signal.emit(&"seen".to_owned());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_count() {
        let signal = Signal::<()>::new();
        assert_eq!(signal.connection_count(), 0);
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }
}
