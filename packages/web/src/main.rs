//! Clinic - Dioxus web application
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

use clinic_web::config::{init_config, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Config::from_env() {
        Ok(config) => {
            info!(api_base_url = %config.api_base_url, "Loaded configuration");
            init_config(config);
        }
        Err(e) => error!(error = %e, "Invalid configuration, using defaults"),
    }

    dioxus::launch(clinic_web::app::App);
}
