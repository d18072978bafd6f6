//! Album filter panel model
//!
//! Everything the filter panel does apart from drawing: which switches are on,
//! when an edit is allowed to commit, how a commit reaches the store, and when
//! the artist search box is allowed to issue a query.
//!
//! ## Commit flow
//! 1. A control produces a `FilterEdit`.
//! 2. `prepare()` arms the control's debounce gate (genre, year) or marks the
//!    edit as immediate (switches, artist selection).
//! 3. The host awaits `PendingEdit::settle()` with its own timer. Superseded
//!    edits resolve to `None`.
//! 4. `commit()` overlays the edit onto the store's current snapshot, submits
//!    it, and passes the snapshot the store returns to `on_filters_changed`.

use crate::config::FilterPanelConfig;
use crate::debounce::{DebounceGate, DebounceTicket};
use crate::edit::{FilterControl, FilterEdit};
use crate::filters::{AlbumListFilter, FilterToggle};
use crate::sources::{AlbumArtistListQuery, OptionList, SelectOption};
use crate::store::FilterStore;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// One switch row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRow {
    pub toggle: FilterToggle,
    pub label: &'static str,
    pub checked: bool,
}

/// Render state of the artist selector
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistSelector {
    pub disabled: bool,
    pub loading: bool,
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
}

/// An edit waiting for its debounce window
#[derive(Debug)]
pub struct PendingEdit {
    edit: FilterEdit,
    window: Option<(Duration, DebounceTicket)>,
}

impl PendingEdit {
    pub fn edit(&self) -> &FilterEdit {
        &self.edit
    }

    pub fn control(&self) -> FilterControl {
        self.edit.control()
    }

    pub fn delay(&self) -> Option<Duration> {
        self.window.as_ref().map(|(delay, _)| *delay)
    }

    pub fn is_immediate(&self) -> bool {
        self.window.is_none()
    }

    /// Commit without waiting. Only meaningful for immediate edits.
    pub fn into_edit(self) -> FilterEdit {
        self.edit
    }

    /// Wait out the window. Returns the edit if nothing newer arrived for the
    /// same control in the meantime.
    pub async fn settle<F, Fut>(self, sleep: F) -> Option<FilterEdit>
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let PendingEdit { edit, window } = self;
        match window {
            None => Some(edit),
            Some((delay, ticket)) => ticket.settle(delay, sleep).await.then_some(edit),
        }
    }
}

/// What a settled artist search should do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A newer search term arrived; do nothing
    Superseded,
    /// The debounced term is empty; show no options and do not fetch
    Suppressed,
    /// Fetch with this query
    Issue(AlbumArtistListQuery),
}

/// A search term waiting for its debounce window
#[derive(Debug)]
pub struct PendingSearch {
    query: Option<AlbumArtistListQuery>,
    delay: Duration,
    ticket: DebounceTicket,
}

impl PendingSearch {
    pub fn query(&self) -> Option<&AlbumArtistListQuery> {
        self.query.as_ref()
    }

    pub async fn settle<F, Fut>(self, sleep: F) -> SearchOutcome
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.ticket.settle(self.delay, sleep).await {
            return SearchOutcome::Superseded;
        }
        match self.query {
            Some(query) => SearchOutcome::Issue(query),
            None => SearchOutcome::Suppressed,
        }
    }
}

/// Filter panel state machine, generic over the store and the change callback
pub struct FilterPanelModel<S, F> {
    store: S,
    config: FilterPanelConfig,
    on_filters_changed: F,
    genre_gate: DebounceGate,
    year_gate: DebounceGate,
    artist_search_gate: DebounceGate,
}

impl<S, F> FilterPanelModel<S, F>
where
    S: FilterStore,
    F: Fn(&AlbumListFilter),
{
    pub fn new(store: S, config: FilterPanelConfig, on_filters_changed: F) -> Self {
        Self {
            store,
            config,
            on_filters_changed,
            genre_gate: DebounceGate::new(),
            year_gate: DebounceGate::new(),
            artist_search_gate: DebounceGate::new(),
        }
    }

    pub fn config(&self) -> &FilterPanelConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current committed filter, straight from the store
    pub fn filter(&self) -> AlbumListFilter {
        self.store.filter()
    }

    pub fn toggle_rows(&self) -> Vec<ToggleRow> {
        let params = self.store.filter().nd_params;
        FilterToggle::ALL
            .iter()
            .map(|toggle| ToggleRow {
                toggle: *toggle,
                label: toggle.label(),
                checked: params.is_checked(*toggle),
            })
            .collect()
    }

    /// Artist selector state. A disabled selector shows no options and never
    /// reports loading, whatever the filter holds.
    pub fn artist_selector(&self, disabled: bool, list: &OptionList) -> ArtistSelector {
        let selected = self.store.filter().artist_id;
        if disabled {
            return ArtistSelector {
                disabled: true,
                loading: false,
                options: Vec::new(),
                selected,
            };
        }
        ArtistSelector {
            disabled: false,
            loading: list.loading,
            options: list
                .options
                .iter()
                .take(self.config.artist_search_limit)
                .cloned()
                .collect(),
            selected,
        }
    }

    fn gate_for(&self, control: FilterControl) -> Option<&DebounceGate> {
        match control {
            FilterControl::Genre => Some(&self.genre_gate),
            FilterControl::Year => Some(&self.year_gate),
            FilterControl::Toggle(_) | FilterControl::Artist => None,
        }
    }

    pub fn prepare(&self, edit: FilterEdit) -> PendingEdit {
        let window = match (edit.debounce(&self.config), self.gate_for(edit.control())) {
            (Some(delay), Some(gate)) => Some((delay, gate.arm())),
            _ => None,
        };
        PendingEdit { edit, window }
    }

    /// Apply an edit now and notify the caller with the store's snapshot
    pub fn commit(&self, edit: &FilterEdit) -> AlbumListFilter {
        let current = self.store.filter();
        let snapshot = self.store.set_filters(edit.overlay(&current));
        debug!("Committed {:?}, {} active filters", edit, snapshot.active_count());
        (self.on_filters_changed)(&snapshot);
        snapshot
    }

    /// Start the debounce window for a new artist search term
    pub fn prepare_artist_search(&self, term: &str) -> PendingSearch {
        PendingSearch {
            query: AlbumArtistListQuery::search(term, self.config.artist_search_limit),
            delay: self.config.artist_search_debounce(),
            ticket: self.artist_search_gate.arm(),
        }
    }

    /// Drop the control's waiting edit, if any, without committing anything
    pub fn cancel(&self, control: FilterControl) {
        if let Some(gate) = self.gate_for(control) {
            gate.cancel();
            debug!("Cancelled pending {:?} edit", control);
        }
    }

    /// Clear every constraint, dropping edits that are still waiting
    pub fn reset(&self) -> AlbumListFilter {
        self.genre_gate.cancel();
        self.year_gate.cancel();
        let snapshot = self.store.reset();
        debug!("Filters reset");
        (self.on_filters_changed)(&snapshot);
        snapshot
    }
}
