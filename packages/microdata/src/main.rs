//! CLI entry point for microdata extraction.

use regelrecht_microdata::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr at WARN by default so stdout stays clean for output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
