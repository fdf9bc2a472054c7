//! Collaborator construction for AutoApply.
//!
//! Maps configuration sections onto the concrete adapters injected into the
//! façade's [`AppState`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use autoapply_api::AppState;
use autoapply_automation_remote::{
    AutomationClient, RemoteAutomationRunner, RemoteTestRunner, UnconfiguredRunner,
};
use autoapply_config::{AutomationConfig, Config, ConfigLoader, DatabaseConfig, SessionConfig};
use autoapply_protocols::automation::{AutomationRunner, TestAutomationRunner};
use autoapply_protocols::error::{AutomationError, StoreError};
use autoapply_protocols::session::SessionUser;
use autoapply_session_mock::MockSessionProvider;
use autoapply_store_sqlite::SqliteJobStore;

/// Get the .autoapply directory path.
pub(crate) fn autoapply_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".autoapply"))
        .unwrap_or_else(|| PathBuf::from(".autoapply"))
}

/// Pick the config file: the given path if it exists, else `~/.autoapply/config.toml` if that exists.
pub(crate) fn resolve_config_path(requested: &Path) -> PathBuf {
    if requested.exists() {
        return requested.to_path_buf();
    }
    let fallback = autoapply_dir().join("config.toml");
    if fallback.exists() {
        fallback
    } else {
        requested.to_path_buf()
    }
}

/// Build the façade state from configuration.
pub(crate) async fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let store = open_store(&config.database).await?;
    let sessions = mock_sessions(&config.session);
    let (automation, test_automation) = automation_runners(&config.automation)?;

    Ok(AppState::new(Arc::new(sessions), automation, test_automation, Arc::new(store))
        .with_probe_limit(config.database.probe_limit))
}

async fn open_store(config: &DatabaseConfig) -> Result<SqliteJobStore, StoreError> {
    match config.path {
        Some(ref path) => {
            let path = PathBuf::from(ConfigLoader::expand_path(&path.to_string_lossy()));
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Connection(format!("{}: {}", parent.display(), e)))?;
            }
            info!("Job store: {}", path.display());
            SqliteJobStore::open(path).await
        }
        None => {
            warn!("No database path configured, using an in-memory job store");
            SqliteJobStore::in_memory().await
        }
    }
}

fn mock_sessions(config: &SessionConfig) -> MockSessionProvider {
    let mut user = SessionUser::new(&config.user_id);
    if let Some(ref name) = config.name {
        user = user.with_name(name);
    }
    if let Some(ref email) = config.email {
        user = user.with_email(email);
    }
    if let Some(ref image) = config.image {
        user = user.with_image(image);
    }
    MockSessionProvider::new(user).with_ttl_seconds(config.token_ttl_seconds)
}

type Runners = (Arc<dyn AutomationRunner>, Arc<dyn TestAutomationRunner>);

fn automation_runners(config: &AutomationConfig) -> Result<Runners, AutomationError> {
    let Some(ref endpoint) = config.endpoint else {
        warn!("No automation endpoint configured, automation runs will fail");
        return Ok((Arc::new(UnconfiguredRunner), Arc::new(UnconfiguredRunner)));
    };

    let client = AutomationClient::new(endpoint, Duration::from_secs(config.timeout_seconds))?
        .with_api_key(config.api_key.clone());
    info!("Automation endpoint: {}", client.base_url());

    Ok((
        Arc::new(RemoteAutomationRunner::new(client.clone())),
        Arc::new(RemoteTestRunner::new(client)),
    ))
}
