use std::process;

use errgen::{config::GeneratorConfig, pipeline};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    init_tracing();

    let config = GeneratorConfig::from_env();
    if let Err(err) = pipeline::run(&config) {
        tracing::error!("{err}");
        process::exit(1);
    }
}

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
