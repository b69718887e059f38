//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Used when `UI_LOG` isn't set at build time or doesn't parse.
const DEFAULT_DIRECTIVES: &str = "error,ui=debug";

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Route `tracing` output to the browser console. Call once, before mounting
/// the app; later calls are ignored.
pub fn init_logging() {
    let console = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        // No clock in the browser, and the console adds its own level badge.
        .without_time()
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(env_filter(option_env!("UI_LOG")))
        .with(console)
        .try_init();

    if installed.is_ok() {
        tracing::info!("Initialized logs");
    }
}
