//! Session middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::{Workspace, BEARER_TOKEN_PREFIX};

use crate::state::AppState;

/// Login user and workspace of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub workspace: Workspace,
}

/// Middleware that validates the session token and injects `CurrentUser`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;

    let claims = state.tokens.verify(token)?;
    if claims.sub.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    let current_user = CurrentUser {
        workspace: claims.workspace(),
        username: claims.sub,
    };
    tracing::debug!(
        "Session for {} in workspace {}",
        current_user.username,
        current_user.workspace
    );

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)
}
