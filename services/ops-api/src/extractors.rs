//! Axum extractors for authentication

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::header;

use wardline_auth_core::AuthenticatedUser;
use wardline_types::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token.
///
/// Every protected handler takes this extractor; validation happens
/// before any table read or write runs. The identity and role come from
/// the token itself — no database round trip per request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    /// Admit only the given roles; empty means any authenticated user
    pub fn require_any(&self, required: &[Role]) -> Result<(), ApiError> {
        Ok(self.0.require_any(required)?)
    }

    /// The subject's user id
    pub fn user_id(&self) -> wardline_types::UserId {
        self.0.user_id
    }

    /// The subject's role at issuance time
    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_bearer_token(parts)?;

        let identity = app_state.auth.authenticate(token).map_err(|e| {
            tracing::debug!(error = ?e, "Token validation failed");
            e
        })?;

        Ok(AuthUser(identity))
    }
}

/// Extract the token from the Authorization header
fn extract_bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::Auth(wardline_auth_core::AuthError::InvalidToken))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::BadRequest("invalid Authorization header encoding".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Auth(wardline_auth_core::AuthError::InvalidToken))
}
