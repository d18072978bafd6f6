//! Hooks that bind the filter panel model to the Dioxus runtime
//!
//! The model decides when an edit may commit; these hooks supply the timer,
//! own the spawned tasks, and cancel them when they are superseded or the
//! panel unmounts.

use crate::stores::{AlbumListState, AlbumListStore};
use dioxus::core::Task;
use dioxus::prelude::*;
use shelf_core::{
    load_options, AlbumArtistListQuery, AlbumListFilter, FilterControl, FilterEdit,
    FilterPanelConfig, FilterPanelModel, GenreListQuery, OptionList, OptionSource, SearchOutcome,
};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub type PanelModel = FilterPanelModel<AlbumListStore, Box<dyn Fn(&AlbumListFilter)>>;

/// Option sources for the panel's selectors, provided as context by the host
#[derive(Clone)]
pub struct FilterSources {
    pub genres: Arc<dyn OptionSource<GenreListQuery>>,
    pub artists: Arc<dyn OptionSource<AlbumArtistListQuery>>,
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(delay: Duration) {
    gloo_timers::future::TimeoutFuture::new(delay.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Submits edits through the panel model, one pending task per control
#[derive(Clone)]
pub struct FilterCommit {
    model: Rc<PanelModel>,
    tasks: Signal<HashMap<FilterControl, Task>>,
    /// Edits waiting out their quiet period, shown ahead of the store
    waiting: Signal<HashMap<FilterControl, FilterEdit>>,
}

impl FilterCommit {
    pub fn model(&self) -> &PanelModel {
        &self.model
    }

    /// Commit now (switches, artist) or after the control's quiet period
    /// (genre, year). A newer edit for the same control replaces the pending one.
    pub fn submit(&self, edit: FilterEdit) {
        let pending = self.model.prepare(edit);
        let control = pending.control();
        let mut tasks = self.tasks;
        let mut waiting = self.waiting;

        if let Some(task) = tasks.write().remove(&control) {
            task.cancel();
        }

        if pending.is_immediate() {
            waiting.write().remove(&control);
            self.model.commit(&pending.into_edit());
            return;
        }

        waiting.write().insert(control, pending.edit().clone());
        let model = self.model.clone();
        let task = spawn(async move {
            if let Some(edit) = pending.settle(sleep).await {
                model.commit(&edit);
                waiting.write().remove(&control);
            }
        });
        tasks.write().insert(control, task);
    }

    /// Drop the control's waiting edit without committing it
    pub fn cancel(&self, control: FilterControl) {
        let mut tasks = self.tasks;
        let mut waiting = self.waiting;
        if let Some(task) = tasks.write().remove(&control) {
            task.cancel();
        }
        waiting.write().remove(&control);
        self.model.cancel(control);
    }

    /// The committed filter with waiting edits laid over it
    pub fn shown(&self, committed: &AlbumListFilter) -> AlbumListFilter {
        with_waiting(committed, self.waiting.read().values())
    }

    /// Drop pending edits and clear the filter
    pub fn reset(&self) {
        let mut tasks = self.tasks;
        let mut waiting = self.waiting;
        for (_, task) in tasks.write().drain() {
            task.cancel();
        }
        waiting.write().clear();
        self.model.reset();
    }
}

fn with_waiting<'a>(
    committed: &AlbumListFilter,
    edits: impl IntoIterator<Item = &'a FilterEdit>,
) -> AlbumListFilter {
    edits
        .into_iter()
        .fold(committed.clone(), |filter, edit| filter.merged(edit.overlay(&filter)))
}

/// Build the panel model over the `Store<AlbumListState>` in context
pub fn use_filter_commit(
    config: FilterPanelConfig,
    on_filters_changed: EventHandler<AlbumListFilter>,
) -> FilterCommit {
    let state = use_context::<Store<AlbumListState>>();
    let model = use_hook(move || {
        let notify: Box<dyn Fn(&AlbumListFilter)> =
            Box::new(move |filter: &AlbumListFilter| on_filters_changed.call(filter.clone()));
        Rc::new(FilterPanelModel::new(
            AlbumListStore::new(state),
            config,
            notify,
        ))
    });
    let tasks = use_signal(HashMap::<FilterControl, Task>::new);
    let waiting = use_signal(HashMap::<FilterControl, FilterEdit>::new);

    use_drop(move || {
        for task in tasks.peek().values() {
            task.cancel();
        }
    });

    FilterCommit {
        model,
        tasks,
        waiting,
    }
}

/// Load the genre list once
pub fn use_genre_options(source: Arc<dyn OptionSource<GenreListQuery>>) -> OptionList {
    let genres = use_resource(move || {
        let source = source.clone();
        async move { load_options(source.as_ref(), &GenreListQuery::default()).await }
    });

    let list = match &*genres.read() {
        Some(options) => OptionList::ready(options.clone()),
        None => OptionList {
            options: Vec::new(),
            loading: true,
        },
    };
    list
}

/// Debounced artist search box state
#[derive(Clone)]
pub struct ArtistSearch {
    model: Rc<PanelModel>,
    source: Arc<dyn OptionSource<AlbumArtistListQuery>>,
    term: Signal<String>,
    results: Signal<OptionList>,
    task: Signal<Option<Task>>,
}

impl ArtistSearch {
    pub fn term(&self) -> String {
        self.term.read().clone()
    }

    pub fn results(&self) -> OptionList {
        self.results.read().clone()
    }

    /// Record the typed term and schedule a query once typing pauses
    pub fn set_term(&self, term: String) {
        let mut term_signal = self.term;
        let mut task_signal = self.task;
        let mut results = self.results;

        if let Some(task) = task_signal.take() {
            task.cancel();
        }

        let pending = self.model.prepare_artist_search(&term);
        term_signal.set(term);

        let source = self.source.clone();
        let task = spawn(async move {
            match pending.settle(sleep).await {
                SearchOutcome::Issue(query) => {
                    debug!("Searching artists for {:?}", query.search_term);
                    results.write().begin_loading();
                    let options = load_options(source.as_ref(), &query).await;
                    results.set(OptionList::ready(options));
                }
                SearchOutcome::Suppressed => results.set(OptionList::default()),
                SearchOutcome::Superseded => {}
            }
        });
        task_signal.set(Some(task));
    }
}

pub fn use_artist_search(
    commit: &FilterCommit,
    source: Arc<dyn OptionSource<AlbumArtistListQuery>>,
) -> ArtistSearch {
    let term = use_signal(String::new);
    let results = use_signal(OptionList::default);
    let task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = task.peek().as_ref() {
            task.cancel();
        }
    });

    ArtistSearch {
        model: commit.model.clone(),
        source,
        term,
        results,
        task,
    }
}
