//! User edits and how they overlay onto the current filter
//!
//! Each control produces a `FilterEdit`. An edit never replaces the filter
//! wholesale: it copies the current predicate set, changes one key, and hands
//! the result to the store as a `FilterUpdate`.

use crate::config::FilterPanelConfig;
use crate::filters::{
    non_empty, AlbumListFilter, FilterToggle, FilterUpdate, NavidromeAlbumParams, Year,
};
use std::time::Duration;

/// A single control change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEdit {
    /// Switch row turned on or off
    Toggle(FilterToggle, bool),
    /// Year input; `None` when the input was cleared
    Year(Option<Year>),
    /// Genre selection; `None` when cleared
    Genre(Option<String>),
    /// Artist selection; `None` when cleared
    Artist(Option<String>),
}

/// Identifies the control an edit came from. Each control owns its own
/// debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterControl {
    Toggle(FilterToggle),
    Year,
    Genre,
    Artist,
}

impl FilterEdit {
    pub fn control(&self) -> FilterControl {
        match self {
            FilterEdit::Toggle(toggle, _) => FilterControl::Toggle(*toggle),
            FilterEdit::Year(_) => FilterControl::Year,
            FilterEdit::Genre(_) => FilterControl::Genre,
            FilterEdit::Artist(_) => FilterControl::Artist,
        }
    }

    /// Build the store update for this edit on top of `current`
    pub fn overlay(&self, current: &AlbumListFilter) -> FilterUpdate {
        let params = current.nd_params.clone();
        match self {
            FilterEdit::Toggle(toggle, checked) => {
                FilterUpdate::nd_params(params.with_toggle(*toggle, *checked))
            }
            FilterEdit::Year(year) => FilterUpdate::nd_params(NavidromeAlbumParams {
                year: *year,
                ..params
            }),
            FilterEdit::Genre(genre_id) => FilterUpdate::nd_params(NavidromeAlbumParams {
                genre_id: non_empty(genre_id.clone()),
                ..params
            }),
            FilterEdit::Artist(artist_id) => FilterUpdate::artist(non_empty(artist_id.clone())),
        }
    }

    /// Quiet period before the edit commits. `None` commits immediately.
    pub fn debounce(&self, config: &FilterPanelConfig) -> Option<Duration> {
        match self {
            FilterEdit::Genre(_) => Some(config.genre_debounce()),
            FilterEdit::Year(_) => Some(config.year_debounce()),
            FilterEdit::Toggle(..) | FilterEdit::Artist(_) => None,
        }
    }
}
