#![allow(dead_code)]

use async_trait::async_trait;
use shelf_core::{
    load_options, AlbumArtist, AlbumArtistListQuery, AlbumListFilter, ArtistDirectory,
    FilterPanelConfig, FilterPanelModel, OptionSource, PendingEdit, PendingSearch, SearchOutcome,
    SelectOption, SharedFilterStore, SourceError,
};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

pub type Changes = Arc<Mutex<Vec<AlbumListFilter>>>;
pub type Callback = Box<dyn Fn(&AlbumListFilter) + Send + Sync>;
pub type Model = FilterPanelModel<SharedFilterStore, Callback>;

pub fn setup() -> (Arc<Model>, Changes) {
    setup_with(SharedFilterStore::default())
}

pub fn setup_with(store: SharedFilterStore) -> (Arc<Model>, Changes) {
    let changes: Changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let callback: Callback = Box::new(move |filter| sink.lock().unwrap().push(filter.clone()));
    let model = FilterPanelModel::new(store, FilterPanelConfig::default(), callback);
    (Arc::new(model), changes)
}

/// Settle a pending edit on the tokio clock and commit it if it survived
pub fn spawn_settle(model: Arc<Model>, pending: PendingEdit) -> JoinHandle<Option<AlbumListFilter>> {
    tokio::spawn(async move {
        let edit = pending.settle(tokio::time::sleep).await?;
        Some(model.commit(&edit))
    })
}

/// Settle a pending artist search and fetch from `source` if a query is due
pub fn spawn_search(
    pending: PendingSearch,
    source: Arc<RecordingArtists>,
) -> JoinHandle<Option<Vec<SelectOption>>> {
    tokio::spawn(async move {
        match pending.settle(tokio::time::sleep).await {
            SearchOutcome::Issue(query) => Some(load_options(source.as_ref(), &query).await),
            SearchOutcome::Suppressed | SearchOutcome::Superseded => None,
        }
    })
}

/// Artist source that records every query it receives
pub struct RecordingArtists {
    directory: ArtistDirectory,
    pub queries: Mutex<Vec<AlbumArtistListQuery>>,
}

impl RecordingArtists {
    pub fn new(names: &[&str]) -> Arc<Self> {
        let artists = names
            .iter()
            .enumerate()
            .map(|(i, name)| AlbumArtist {
                id: format!("ar-{i}"),
                name: name.to_string(),
            })
            .collect();
        Arc::new(Self {
            directory: ArtistDirectory::new(artists),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<AlbumArtistListQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl OptionSource<AlbumArtistListQuery> for RecordingArtists {
    async fn fetch(&self, query: &AlbumArtistListQuery) -> Result<Vec<SelectOption>, SourceError> {
        self.queries.lock().unwrap().push(query.clone());
        self.directory.fetch(query).await
    }
}
