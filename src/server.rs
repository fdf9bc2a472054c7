//! Server initialization and startup logic for AutoApply.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autoapply_api::{ApiServer, ApiServerConfig};
use autoapply_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::adapters::build_state;
use crate::cmd_config::ensure_valid;

/// Initialize tracing with console output and, when `log_dir` is set, a daily rolling file.
pub(crate) fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match config.log_dir {
        Some(ref dir) => {
            let log_dir = ConfigLoader::expand_path(&dir.to_string_lossy());
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("autoapply")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes pending lines on drop, so it lives for the whole process.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (json_layer, text_layer) = if config.json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer().with_target(true).with_ansi(true)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Run the server in foreground until Ctrl-C.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting AutoApply v{}", env!("CARGO_PKG_VERSION"));

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    ensure_valid(&validation)?;

    let state = Arc::new(build_state(&config).await?);
    info!("Collaborators ready: {:?}", state);

    let server = ApiServer::new(
        ApiServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    info!("AutoApply ready:");
    info!("  API Server:    http://{}", server.addr());
    info!("");
    info!("API Endpoints:");
    info!("  GET  /api/auth/session     - Current session");
    info!("  POST /api/automation/run   - Run automation");
    info!("  POST /api/automation/test  - Start automation test");
    info!("  GET  /api/test-db          - Database probe");
    info!("  GET  /api/test-query       - Query probe");

    server.run_with_shutdown(shutdown_signal()).await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl-C");
}
