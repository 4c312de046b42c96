use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

const DEVELOPMENT_FILTER: &str = "info,tower_http=debug,sea_orm=debug,domain_items=debug";
const PRODUCTION_FILTER: &str = "warn,tower_http=info,domain_items=info";

/// Install color-eyre for startup reports. Later calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Install the global subscriber with span capture for error reports.
///
/// Production logs flattened JSON without targets; development logs pretty
/// text including SQL from `sea_orm`. `RUST_LOG` replaces the default filter.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let output = if environment.is_production() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .pretty()
            .boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(?environment, "Tracing initialized");
    }
    installed
}
