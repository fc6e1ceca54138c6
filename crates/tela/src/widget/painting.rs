//! Repaint scheduling.
//!
//! Widgets do not paint eagerly; they mark themselves dirty through a
//! [`RepaintHandle`] and the host redraws them on its next frame. The handle
//! is cheaply clonable so a child widget can flag its owner dirty without
//! holding a back-reference to it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared dirty flag for a widget.
///
/// Repeated requests before the next [`take`](Self::take) coalesce into a
/// single repaint, but every request is counted so callers can observe how
/// many were issued.
#[derive(Clone, Debug, Default)]
pub struct RepaintHandle {
    inner: Arc<RepaintState>,
}

#[derive(Debug, Default)]
struct RepaintState {
    dirty: AtomicBool,
    requests: AtomicU64,
}

impl RepaintHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the widget dirty.
    pub fn request(&self) {
        self.inner.requests.fetch_add(1, Ordering::AcqRel);
        if !self.inner.dirty.swap(true, Ordering::AcqRel) {
            tracing::trace!(target: "tela::paint", "repaint requested");
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.load(Ordering::Acquire)
    }

    /// Clears the dirty flag, returning whether a repaint was pending.
    pub fn take(&self) -> bool {
        self.inner.dirty.swap(false, Ordering::AcqRel)
    }

    /// Total number of repaint requests ever issued through this handle.
    pub fn request_count(&self) -> u64 {
        self.inner.requests.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce_until_taken() {
        let handle = RepaintHandle::new();
        assert!(!handle.is_dirty());

        handle.request();
        handle.request();
        assert!(handle.is_dirty());
        assert_eq!(handle.request_count(), 2);

        assert!(handle.take());
        assert!(!handle.is_dirty());
        assert!(!handle.take());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = RepaintHandle::new();
        let clone = handle.clone();

        clone.request();
        assert!(handle.is_dirty());
        assert_eq!(handle.request_count(), 1);

        handle.take();
        assert!(!clone.is_dirty());
    }
}
