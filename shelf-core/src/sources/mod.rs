//! Option sources for the genre and artist selectors
//!
//! Both selectors are fed by the same capability: something that answers a
//! query with `(label, value)` pairs. A failed fetch is not an error for the
//! panel; it just shows no options.

mod memory;

pub use memory::{ArtistDirectory, StaticGenres};

use crate::filters::SortOrder;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from option sources
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to encode query: {0}")]
    Query(String),
}

/// Selectable entry: display label plus identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

impl From<&Genre> for SelectOption {
    fn from(genre: &Genre) -> Self {
        SelectOption::new(genre.name.clone(), genre.id.clone())
    }
}

impl From<&AlbumArtist> for SelectOption {
    fn from(artist: &AlbumArtist) -> Self {
        SelectOption::new(artist.name.clone(), artist.id.clone())
    }
}

/// Anything that can answer a query of type `Q` with selectable options
#[async_trait]
pub trait OptionSource<Q: Sync>: Send + Sync {
    async fn fetch(&self, query: &Q) -> Result<Vec<SelectOption>, SourceError>;
}

/// Fetch options, degrading failures to an empty list
pub async fn load_options<Q>(source: &dyn OptionSource<Q>, query: &Q) -> Vec<SelectOption>
where
    Q: Sync + Debug,
{
    match source.fetch(query).await {
        Ok(options) => {
            debug!("Loaded {} options for {:?}", options.len(), query);
            options
        }
        Err(e) => {
            warn!("Failed to load options for {:?}: {}", query, e);
            Vec::new()
        }
    }
}

/// Options plus whether a fetch is still in flight
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionList {
    pub options: Vec<SelectOption>,
    pub loading: bool,
}

impl OptionList {
    pub fn ready(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            loading: false,
        }
    }

    /// Mark a fetch as started, keeping the previous options visible
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }
}

/// Request for the full genre list
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenreListQuery {
    pub sort_order: SortOrder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlbumArtistListSort {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "album_count")]
    AlbumCount,
}

/// Search request for album artists
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AlbumArtistListQuery {
    pub limit: usize,
    pub search_term: String,
    pub sort_by: AlbumArtistListSort,
    pub sort_order: SortOrder,
    pub start_index: usize,
}

#[derive(Serialize)]
struct AlbumArtistListRequest<'a> {
    #[serde(rename = "_start")]
    start: usize,
    #[serde(rename = "_end")]
    end: usize,
    #[serde(rename = "_sort")]
    sort: AlbumArtistListSort,
    #[serde(rename = "_order")]
    order: SortOrder,
    name: &'a str,
}

impl AlbumArtistListQuery {
    /// Query for the first `limit` artists matching `term`, by name ascending.
    /// An empty term means no query at all.
    pub fn search(term: &str, limit: usize) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        Some(Self {
            limit,
            search_term: term.to_string(),
            sort_by: AlbumArtistListSort::Name,
            sort_order: SortOrder::Asc,
            start_index: 0,
        })
    }

    pub fn to_query_string(&self) -> Result<String, SourceError> {
        let request = AlbumArtistListRequest {
            start: self.start_index,
            end: self.start_index.saturating_add(self.limit),
            sort: self.sort_by,
            order: self.sort_order,
            name: &self.search_term,
        };
        serde_urlencoded::to_string(&request).map_err(|e| SourceError::Query(e.to_string()))
    }
}
