//! Album list state store

use dioxus::prelude::*;
use shelf_core::{AlbumListFilter, FilterStore, FilterUpdate};
use tracing::debug;

/// State for the album list view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AlbumListState {
    /// Committed filter for the album list
    pub filter: AlbumListFilter,
}

/// `FilterStore` over the reactive album list store.
///
/// Reads subscribe the current scope, so components that show filter values
/// re-render when a commit lands.
#[derive(Clone, Copy)]
pub struct AlbumListStore {
    state: Store<AlbumListState>,
}

impl AlbumListStore {
    pub fn new(state: Store<AlbumListState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Store<AlbumListState> {
        self.state
    }
}

impl FilterStore for AlbumListStore {
    fn filter(&self) -> AlbumListFilter {
        self.state.filter().read().clone()
    }

    fn set_filters(&self, update: FilterUpdate) -> AlbumListFilter {
        let mut filter = self.state.filter();
        let next = filter.peek().merged(update);
        if *filter.peek() != next {
            filter.set(next.clone());
        }
        debug!("Album list filter: {:?}", next);
        next
    }

    fn reset(&self) -> AlbumListFilter {
        let mut filter = self.state.filter();
        let next = filter.peek().cleared();
        filter.set(next.clone());
        next
    }
}
