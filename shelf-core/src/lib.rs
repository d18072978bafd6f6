//! shelf-core - headless model for the album filter panel
//!
//! Filter types, the edit protocol, the filter store, debounce gates, option
//! sources and the panel model. Nothing here depends on a UI toolkit or an
//! async runtime; timers are injected by the host.

pub mod config;
pub mod debounce;
pub mod edit;
pub mod filters;
pub mod panel;
pub mod sources;
pub mod store;

pub use config::{ConfigError, FilterPanelConfig};
pub use debounce::{DebounceGate, DebounceTicket};
pub use edit::{FilterControl, FilterEdit};
pub use filters::{
    AlbumListFilter, AlbumListSort, FilterError, FilterToggle, FilterUpdate, NavidromeAlbumParams,
    SortOrder, Year,
};
pub use panel::{
    ArtistSelector, FilterPanelModel, PendingEdit, PendingSearch, SearchOutcome, ToggleRow,
};
pub use sources::{
    load_options, AlbumArtist, AlbumArtistListQuery, AlbumArtistListSort, ArtistDirectory, Genre,
    GenreListQuery, OptionList, OptionSource, SelectOption, SourceError, StaticGenres,
};
pub use store::{FilterStore, SharedFilterStore};
