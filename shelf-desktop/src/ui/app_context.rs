use crate::catalog::DemoCatalog;
use dioxus::prelude::*;
use shelf_core::FilterPanelConfig;
use std::sync::Arc;

/// Services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<DemoCatalog>,
    pub config: FilterPanelConfig,
    pub disable_artist_filter: bool,
}

/// Hook to access the demo catalog from components
pub fn use_catalog() -> Arc<DemoCatalog> {
    use_context::<AppContext>().catalog
}
