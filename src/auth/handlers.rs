//! Auth HTTP handlers: signup, login.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;
use crate::models::{Credentials, PublicAccount, TokenResponse};

const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// Bodies are decoded whatever the `Content-Type`; decode failures get a fixed message.
fn parse_credentials(body: &Bytes) -> AppResult<Credentials> {
    Credentials::from_json(body).map_err(|e| {
        debug!(error = %e, "rejected request: undecodable credentials body");
        AppError::Validation(INVALID_BODY_MESSAGE.to_string())
    })
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<PublicAccount>), AppError> {
    let creds = parse_credentials(&body)?;
    let account = state.auth_service().signup(creds).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, AppError> {
    let creds = parse_credentials(&body)?;
    let token = state.auth_service().login(creds).await?;
    Ok(Json(TokenResponse { token }))
}
