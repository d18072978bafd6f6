//! Filter store: the single owner of committed filter state
//!
//! Components never keep their own copy of committed values. They read the
//! current snapshot, submit an update, and use whatever snapshot the store
//! hands back.

use crate::filters::{AlbumListFilter, FilterUpdate};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Read/update entry points of a filter store
pub trait FilterStore {
    /// Current snapshot
    fn filter(&self) -> AlbumListFilter;

    /// Merge `update` into the stored filter and return the authoritative result
    fn set_filters(&self, update: FilterUpdate) -> AlbumListFilter;

    /// Drop every constraint (sort is kept) and return the result
    fn reset(&self) -> AlbumListFilter;
}

/// Process-wide filter store for hosts without a reactive runtime.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct SharedFilterStore {
    inner: Arc<RwLock<AlbumListFilter>>,
}

impl SharedFilterStore {
    pub fn new(initial: AlbumListFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }
}

impl FilterStore for SharedFilterStore {
    fn filter(&self) -> AlbumListFilter {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_filters(&self, update: FilterUpdate) -> AlbumListFilter {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let merged = guard.merged(update);
        debug!("Filter store updated: {:?}", merged);
        *guard = merged.clone();
        merged
    }

    fn reset(&self) -> AlbumListFilter {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = guard.cleared();
        debug!("Filter store reset");
        guard.clone()
    }
}

impl<T: FilterStore + ?Sized> FilterStore for Arc<T> {
    fn filter(&self) -> AlbumListFilter {
        (**self).filter()
    }

    fn set_filters(&self, update: FilterUpdate) -> AlbumListFilter {
        (**self).set_filters(update)
    }

    fn reset(&self) -> AlbumListFilter {
        (**self).reset()
    }
}
