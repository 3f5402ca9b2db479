//! EtumLabs - Minecraft community events site
//!
//! Runs the site as a text shell: pages are printed to stdout and driven by
//! commands read from stdin.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod backend;
mod render;
mod routes;
mod shell;
mod site;
mod state;
mod viewmodel;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting EtumLabs");

    // Optional config path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize application state
    let app_state = match state::AppState::new(config_path) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    let mut site = site::Site::new(app_state, today);

    if let Err(e) = runtime.block_on(shell::run(&mut site)) {
        tracing::error!("Shell stopped: {}", e);
        std::process::exit(1);
    }
}
