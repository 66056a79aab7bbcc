//! Per-paper in-flight tracking.
//!
//! DESIGN
//! ======
//! Rapid clicks on one button each issue a request, and whichever response
//! lands last wins. `PendingToggles` lets the handler drop a click while the
//! same paper already has a request outstanding. The set is keyed by
//! `PaperId`; an RAII guard removes the key when the request finishes, even
//! if the future is dropped mid-flight.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::PaperId;

#[derive(Clone, Default)]
pub struct PendingToggles {
    inner: Arc<Mutex<HashSet<PaperId>>>,
}

impl PendingToggles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `paper_id`. Returns `None` if a request for it is already in flight.
    #[must_use]
    pub fn try_begin(&self, paper_id: &PaperId) -> Option<PendingGuard> {
        let mut pending = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if !pending.insert(paper_id.clone()) {
            return None;
        }
        Some(PendingGuard { inner: Arc::clone(&self.inner), paper_id: paper_id.clone() })
    }

    #[must_use]
    pub fn is_pending(&self, paper_id: &PaperId) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(paper_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its paper id on drop.
pub struct PendingGuard {
    inner: Arc<Mutex<HashSet<PaperId>>>,
    paper_id: PaperId,
}

impl PendingGuard {
    #[must_use]
    pub fn paper_id(&self) -> &PaperId {
        &self.paper_id
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.paper_id);
    }
}

#[cfg(test)]
#[path = "pending_test.rs"]
mod tests;
