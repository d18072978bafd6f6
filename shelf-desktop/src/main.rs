use clap::Parser;
use shelf_core::FilterPanelConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod catalog;
mod ui;

pub use ui::AppContext;

/// Album library browser with a Navidrome-style filter panel
#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
struct Args {
    /// YAML file with filter panel timings
    #[arg(long, env = "SHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Show the artist selector but keep it disabled
    #[arg(long)]
    disable_artist_filter: bool,

    /// Simulated latency of artist searches, in milliseconds
    #[arg(long, default_value_t = 300)]
    artist_latency_ms: u64,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> FilterPanelConfig {
    let Some(path) = path else {
        return FilterPanelConfig::default();
    };
    match FilterPanelConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            FilterPanelConfig::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    configure_logging();

    let config = load_config(args.config.as_ref());
    info!("Filter panel config: {:?}", config);

    let catalog = catalog::DemoCatalog::fixture(Duration::from_millis(args.artist_latency_ms));
    info!("Demo catalog loaded with {} albums", catalog.len());

    let context = AppContext {
        catalog: Arc::new(catalog),
        config,
        disable_artist_filter: args.disable_artist_filter,
    };

    info!("Starting UI");
    ui::launch_app(context);
    info!("UI quit");
}
