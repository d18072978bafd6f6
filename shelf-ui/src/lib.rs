//! shelf-ui - Dioxus components for the album list filter panel
//!
//! Holds the reactive album list store and the view components. Filter
//! semantics live in `shelf-core`; this crate only draws them and wires
//! timers and fetches to the Dioxus runtime.

pub mod components;
pub mod stores;

pub use components::*;
