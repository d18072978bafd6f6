//! Filter panel components

pub mod album_filters;
pub mod button;
pub mod helpers;
pub mod hooks;
pub mod icons;
pub mod number_input;
pub mod select;
pub mod switch;

pub use album_filters::NavidromeAlbumFilters;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::InlineSpinner;
pub use hooks::{FilterCommit, FilterSources};
pub use icons::{CheckIcon, ChevronDownIcon, ChevronUpIcon, FunnelIcon, LoaderIcon, XIcon};
pub use number_input::NumberInput;
pub use select::{filter_options, SearchableSelect};
pub use switch::Switch;
