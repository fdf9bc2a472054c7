//! Session lookup handler.

use std::sync::Arc;

use axum::extract::State;

use autoapply_protocols::session::Session;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::delegate::delegate;
use crate::state::AppState;

/// GET /api/auth/session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Session>, ApiError> {
    let session = delegate("auth.session", state.sessions.session()).await?;
    Ok(Envelope::success(session))
}
