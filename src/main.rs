// img-alt-api - image to alt-text relay service
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use img_alt_api::cli::Args;
use img_alt_api::config::AppConfig;
use img_alt_api::deepseek::VisionClient;
use img_alt_api::server::create_router;
use img_alt_api::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env file before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting img-alt-api v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the upstream vision client
    info!("Using vision model {}", config.deepseek.model);
    let vision_client = VisionClient::new(&config.deepseek)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), vision_client);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
