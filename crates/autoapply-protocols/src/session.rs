//! Session provider protocol definitions.
//!
//! A session pairs the signed-in user's profile with the tokens issued for it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Resolves the session of the current caller.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Look up the current session.
    async fn session(&self) -> Result<Session, SessionError>;
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SessionUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            image: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A user session with its tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: SessionUser,

    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// When the access token stops being valid.
    pub expires: DateTime<Utc>,
}

impl Session {
    pub fn new(user: SessionUser, access_token: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            user,
            access_token: access_token.into(),
            refresh_token: None,
            expires,
        }
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
