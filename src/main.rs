use anyhow::{Context, Result};
use novaytek_site::config::Config;
use novaytek_site::contact::SubmissionMetrics;
use novaytek_site::i18n::BundleValidator;
use novaytek_site::server::{self, AppState};
use novaytek_site::sink;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("novaytek_site=info".parse()?),
        )
        .init();

    info!("Starting NOVAYTEK site");

    // Step 1: Check the translation bundles
    let report = BundleValidator::validate_all();
    for msg in &report.errors {
        error!("Translation bundle: {}", msg);
    }
    for msg in &report.warnings {
        warn!("Translation bundle: {}", msg);
    }
    if report.is_clean() {
        info!("✓ Translation bundles complete");
    }

    // Step 2: Load configuration from environment
    let config = Config::from_env()?;

    // Step 3: Connect the lead sink
    let sink = sink::connect(&config).await?;

    // Step 4: Serve
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .context(format!("Failed to bind port {}", config.port))?;

    server::serve(listener, AppState::new(&config, sink), shutdown_signal()).await?;

    let metrics = SubmissionMetrics::global().report();
    info!(
        "Shutting down. Contact submissions: {}",
        serde_json::to_string(&metrics)?
    );

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
