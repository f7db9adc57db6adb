//! hello-tray - Entry Point
//!
//! Initializes logging, loads configuration and hands the main thread to
//! the tray event loop.

use anyhow::Result;
use hello_tray::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Config is read before logging exists, so its errors surface via the return value
    let config = Config::load()?;

    // Logs go to stderr; stdout carries only the menu action output
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting hello-tray");

    hello_tray::run(&config.tray)?;

    info!("hello-tray stopped");
    Ok(())
}
