//! Navidrome album filter panel
//!
//! Four switches, a year box, a genre select and an artist search. Committed
//! values always come from the album list store; the panel never keeps its
//! own copy. A genre pick shows straight away while its commit is waiting.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::hooks::{
    use_artist_search, use_filter_commit, use_genre_options, FilterSources,
};
use crate::components::number_input::NumberInput;
use crate::components::select::SearchableSelect;
use crate::components::switch::Switch;
use dioxus::prelude::*;
use shelf_core::{AlbumListFilter, FilterControl, FilterEdit, FilterPanelConfig};

/// Requires `Store<AlbumListState>` and `FilterSources` in context. A
/// `FilterPanelConfig` in context overrides the default timings.
#[component]
pub fn NavidromeAlbumFilters(
    /// Called with the store's snapshot after every commit
    on_filters_changed: EventHandler<AlbumListFilter>,
    #[props(default)] disable_artist_filter: bool,
) -> Element {
    let config = try_use_context::<FilterPanelConfig>().unwrap_or_default();
    let sources = use_context::<FilterSources>();
    let commit = use_filter_commit(config.clone(), on_filters_changed);
    let genres = use_genre_options(sources.genres.clone());
    let artists = use_artist_search(&commit, sources.artists.clone());

    let model = commit.model();
    let filter = model.filter();
    let shown = commit.shown(&filter);
    let rows = model.toggle_rows();
    let selector = model.artist_selector(disable_artist_filter, &artists.results());

    let on_year = {
        let commit = commit.clone();
        move |year| commit.submit(FilterEdit::Year(year))
    };
    let on_year_rejected = {
        let commit = commit.clone();
        EventHandler::new(move |_: ()| commit.cancel(FilterControl::Year))
    };
    let on_genre = {
        let commit = commit.clone();
        move |genre_id| commit.submit(FilterEdit::Genre(genre_id))
    };
    let on_artist = {
        let commit = commit.clone();
        move |artist_id| commit.submit(FilterEdit::Artist(artist_id))
    };
    let on_reset = {
        let commit = commit.clone();
        move |_| commit.reset()
    };
    let active_count = filter.active_count();
    let on_artist_search = {
        let artists = artists.clone();
        EventHandler::new(move |term: String| artists.set_term(term))
    };

    rsx! {
        div { class: "flex flex-col gap-3 p-3",
            for row in rows {
                Switch {
                    key: "{row.toggle.key()}",
                    label: row.label,
                    checked: row.checked,
                    on_change: {
                        let commit = commit.clone();
                        move |checked| commit.submit(FilterEdit::Toggle(row.toggle, checked))
                    },
                }
            }
            hr { class: "my-2 border-gray-700" }
            div { class: "grid grid-cols-2 gap-3",
                NumberInput {
                    label: "Year",
                    value: filter.nd_params.year,
                    on_change: on_year,
                    on_reject: on_year_rejected,
                }
                SearchableSelect {
                    label: "Genre",
                    options: genres.options,
                    loading: genres.loading,
                    value: shown.nd_params.genre_id,
                    clearable: true,
                    on_change: on_genre,
                }
            }
            SearchableSelect {
                label: "Artist",
                placeholder: "Type to search for an artist",
                options: selector.options,
                value: selector.selected,
                clearable: true,
                disabled: selector.disabled,
                loading: selector.loading,
                limit: config.artist_search_limit,
                search_value: artists.term(),
                on_search_change: on_artist_search,
                on_change: on_artist,
            }
            div { class: "flex items-center justify-between pt-2",
                span { class: "text-xs text-gray-500",
                    if active_count == 1 {
                        "1 active filter"
                    } else {
                        "{active_count} active filters"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    disabled: active_count == 0,
                    onclick: on_reset,
                    "Reset filters"
                }
            }
        }
    }
}
