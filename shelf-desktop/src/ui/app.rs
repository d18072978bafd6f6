use crate::ui::components::LibraryPage;
use crate::ui::AppContext;
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use shelf_ui::stores::AlbumListState;
use shelf_ui::FilterSources;
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("shelf")
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100, 760))
        .with_background_color((0x0f, 0x11, 0x16, 0xff))
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x0f, 0x11, 0x16, 0xff))
}

pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let context = use_context::<AppContext>();

    // The album list store and the panel's sources and timings
    let state = use_store(AlbumListState::default);
    use_context_provider(|| state);
    use_context_provider(|| context.config.clone());
    use_context_provider(|| FilterSources {
        genres: context.catalog.clone(),
        artists: context.catalog.clone(),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "h-screen overflow-hidden flex bg-surface-base text-gray-200",
            LibraryPage { disable_artist_filter: context.disable_artist_filter }
        }
    }
}
