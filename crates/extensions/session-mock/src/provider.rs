//! Mock session provider implementation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use autoapply_protocols::error::SessionError;
use autoapply_protocols::session::{Session, SessionProvider, SessionUser};

const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Session provider that always returns the same user.
///
/// Tokens are minted once per provider; the expiry rolls forward on every lookup.
#[derive(Debug, Clone)]
pub struct MockSessionProvider {
    user: SessionUser,
    access_token: String,
    refresh_token: String,
    ttl: Duration,
}

impl MockSessionProvider {
    pub fn new(user: SessionUser) -> Self {
        Self {
            user,
            access_token: format!("mock-access-{}", Uuid::new_v4()),
            refresh_token: format!("mock-refresh-{}", Uuid::new_v4()),
            ttl: Duration::seconds(DEFAULT_TTL_SECONDS),
        }
    }

    pub fn with_ttl_seconds(mut self, seconds: u64) -> Self {
        self.ttl = i64::try_from(seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_TTL_SECONDS));
        self
    }

    pub fn with_tokens(
        mut self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        self.access_token = access_token.into();
        self.refresh_token = refresh_token.into();
        self
    }
}

impl Default for MockSessionProvider {
    fn default() -> Self {
        Self::new(
            SessionUser::new("mock-user-id")
                .with_name("Test User")
                .with_email("test@example.com"),
        )
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    fn id(&self) -> &str {
        "mock"
    }

    async fn session(&self) -> Result<Session, SessionError> {
        debug!("Issuing mock session for user {}", self.user.id);
        let expires = Utc::now().checked_add_signed(self.ttl).ok_or_else(|| {
            SessionError::Unavailable(format!(
                "token lifetime of {} seconds is out of range",
                self.ttl.num_seconds()
            ))
        })?;
        Ok(Session::new(self.user.clone(), self.access_token.clone(), expires)
            .with_refresh_token(self.refresh_token.clone()))
    }
}
