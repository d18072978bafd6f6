//! Library page component
//!
//! Filter panel on the left, matching albums on the right. The album list is
//! re-queried from the catalog whenever the panel reports a commit.

use crate::catalog::Album;
use crate::ui::app_context::use_catalog;
use dioxus::prelude::*;
use shelf_core::{
    AlbumListFilter, AlbumListSort, FilterStore, FilterUpdate, SelectOption, SortOrder,
};
use shelf_ui::stores::{AlbumListState, AlbumListStore};
use shelf_ui::{
    Button, ButtonSize, ButtonVariant, FunnelIcon, NavidromeAlbumFilters, SearchableSelect,
};
use tracing::{info, warn};

/// Rows per page when talking to the server
const PAGE_SIZE: usize = 100;

const SORT_KEYS: [(AlbumListSort, &str); 6] = [
    (AlbumListSort::Name, "Name"),
    (AlbumListSort::AlbumArtist, "Album artist"),
    (AlbumListSort::Year, "Year"),
    (AlbumListSort::RecentlyAdded, "Recently added"),
    (AlbumListSort::PlayCount, "Play count"),
    (AlbumListSort::Rating, "Rating"),
];

fn sort_options() -> Vec<SelectOption> {
    SORT_KEYS
        .iter()
        .map(|(sort, label)| SelectOption::new(*label, sort_value(*sort)))
        .collect()
}

fn sort_value(sort: AlbumListSort) -> String {
    format!("{sort:?}")
}

fn parse_sort(value: &str) -> Option<AlbumListSort> {
    SORT_KEYS
        .iter()
        .map(|(sort, _)| *sort)
        .find(|sort| sort_value(*sort) == value)
}

#[component]
pub fn LibraryPage(disable_artist_filter: bool) -> Element {
    let catalog = use_catalog();
    let store = AlbumListStore::new(use_context::<Store<AlbumListState>>());

    let albums = use_signal({
        let catalog = catalog.clone();
        move || catalog.albums(&AlbumListFilter::default())
    });

    let requery = {
        let catalog = catalog.clone();
        move |filter: AlbumListFilter| {
            info!("Filters changed, {} active", filter.active_count());
            let mut albums = albums;
            albums.set(catalog.albums(&filter));
        }
    };

    let filter = store.filter();
    let query = filter.to_query_string(0, PAGE_SIZE).unwrap_or_else(|e| {
        warn!("Failed to encode album query: {}", e);
        String::new()
    });

    let on_sort = {
        let requery = requery.clone();
        move |value: Option<String>| {
            let Some(sort_by) = value.as_deref().and_then(parse_sort) else {
                return;
            };
            let current = store.filter();
            let snapshot = store.set_filters(FilterUpdate::sort(sort_by, current.sort_order));
            requery(snapshot);
        }
    };
    let on_flip_order = {
        let requery = requery.clone();
        move |_| {
            let current = store.filter();
            let order = match current.sort_order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
            let snapshot = store.set_filters(FilterUpdate::sort(current.sort_by, order));
            requery(snapshot);
        }
    };

    let order_label = match filter.sort_order {
        SortOrder::Asc => "Ascending",
        SortOrder::Desc => "Descending",
    };
    let results = albums();
    let album_count = results.len();

    rsx! {
        aside { class: "w-80 flex-shrink-0 border-r border-white/5 overflow-y-auto bg-surface-raised",
            div { class: "flex items-center gap-2 px-3 pt-3 text-sm font-semibold text-gray-300",
                FunnelIcon { class: "w-4 h-4" }
                "Filters"
            }
            NavidromeAlbumFilters { disable_artist_filter, on_filters_changed: requery }
        }
        main { class: "flex-1 flex flex-col min-w-0",
            div { class: "flex items-end gap-3 p-3 border-b border-white/5",
                div { class: "w-48",
                    SearchableSelect {
                        label: "Sort by",
                        options: sort_options(),
                        value: Some(sort_value(filter.sort_by)),
                        on_change: on_sort,
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: on_flip_order,
                    "{order_label}"
                }
                span { class: "ml-auto text-xs text-gray-500", "{album_count} albums" }
            }
            code { class: "px-3 py-2 text-xs text-gray-500 font-mono truncate", title: "{query}",
                "{query}"
            }
            if results.is_empty() {
                div { class: "flex-1 flex items-center justify-center text-gray-400",
                    "No albums match these filters"
                }
            } else {
                ul { class: "flex-1 overflow-y-auto divide-y divide-white/5",
                    for album in results {
                        AlbumRow { key: "{album.id}", album: album.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn AlbumRow(album: Album) -> Element {
    let rating = "★".repeat(usize::from(album.rating));
    rsx! {
        li { class: "flex items-center gap-4 px-3 py-2 text-sm",
            div { class: "flex-1 min-w-0",
                p { class: "truncate text-gray-200", "{album.name}" }
                p { class: "truncate text-xs text-gray-500", "{album.album_artist}" }
            }
            span { class: "w-12 text-right text-gray-400 tabular-nums", "{album.year}" }
            span { class: "w-20 text-indigo-400", "{rating}" }
            if album.starred {
                span { class: "text-xs text-amber-400", "Favorite" }
            }
        }
    }
}
