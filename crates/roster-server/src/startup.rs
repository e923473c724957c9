//! Server startup utilities.

use roster_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("{} v{} ({})", config.app.name, config.app.version, config.app.environment);
    info!("gRPC API:  {}", config.server.grpc_addr());
    info!("Services:  user.UserService, grpc.health.v1.Health");
    info!("Database:  {}", config.database.url);
    info!("Workers:   {}", config.server.worker_threads);
    info!("{}", separator);
}
