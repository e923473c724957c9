//! # Roster Server
//!
//! Main entry point for the Roster user service.
//!
//! Loads configuration, installs logging, then serves `user.UserService`
//! over plaintext gRPC until Ctrl+C or SIGTERM.

use roster_config::{AppConfig, ConfigLoader};
use roster_core::{RosterError, RosterResult};
use roster_server::app::Application;
use roster_server::logging::init_logging;
use roster_server::startup::print_startup_info;
use tokio::signal;
use tracing::{error, info, warn};

fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting Roster user service...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config) {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: AppConfig) -> RosterResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads)
        .enable_all()
        .build()
        .map_err(|e| RosterError::Internal(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async {
        let app = Application::build(config).await?;
        print_startup_info(app.config());
        app.run_until(shutdown_signal()).await
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
