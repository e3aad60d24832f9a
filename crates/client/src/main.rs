//! Chrono Tactics text client.
//!
//! Environment (a `.env` file is honored):
//! - `CHRONO_DATA_DIR`, `CHRONO_TICK_MS`, `CHRONO_DISABLE_CLOCK`
//! - `CHRONO_SESSION_ID`, `CHRONO_LOG_DIR`
//! - `RUST_LOG` for the log filter

use anyhow::{Context, Result};

use tactics_client::{ClientConfig, ShellApp, logging, render};
use tactics_content::ContentFactory;
use tactics_core::Notification;
use tactics_runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting Chrono Tactics");
    tracing::info!("Content directory: {}", config.data_dir.display());

    let content = ContentFactory::new(&config.data_dir)
        .load()
        .with_context(|| format!("failed to load content from {}", config.data_dir.display()))?;

    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .content(content)
        .build()
        .await
        .context("failed to start runtime")?;

    println!(
        "{}",
        render::notification(&Notification::loop_initiated(runtime.game_config()))
    );

    let app = ShellApp::new(runtime.handle(), runtime.game_config().clone());
    let result = app.run().await;
    drop(app);

    runtime.shutdown().await?;
    tracing::info!("Session ended");

    result
}
