//! Authentication handlers (register, login, me)

use axum::extract::{ConnectInfo, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use uuid::Uuid;

use wardline_auth_core::{Registration, UserProfile};
use wardline_db::{CreateShift, PresenceRepository, ShiftRepository};

use crate::audit;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token plus the public user projection. The password hash never
/// appears here; `UserProfile` does not carry it.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /register
///
/// Create a user, seed their presence record, and issue the first token.
pub async fn register(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state
        .auth
        .register(Registration {
            username: req.username,
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            role: req.role,
        })
        .await?;

    // Every staff member appears on the presence board from day one
    state
        .repos
        .presence
        .create_for_user(session.user.id.0)
        .await?;

    audit::record(
        &state.repos,
        session.user.id,
        "register",
        format!("User {} registered", session.user.username),
        Some(addr.ip().to_string()),
    );

    Ok(Json(AuthResponse {
        token: session.token,
        user: session.user,
    }))
}

/// POST /login
///
/// Verify credentials, clock the user in, and issue a fresh token.
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state.auth.login(&req.username, &req.password).await?;

    let now = Utc::now();

    // Login doubles as clock-in: open a shift and flip presence on duty
    state
        .repos
        .shifts
        .create(CreateShift {
            id: Uuid::new_v4(),
            user_id: session.user.id.0,
            clock_in: now,
            date: now.format("%Y-%m-%d").to_string(),
        })
        .await?;

    state
        .repos
        .presence
        .clock_in(session.user.id.0, now)
        .await?;

    audit::record(
        &state.repos,
        session.user.id,
        "login",
        format!("User {} logged in", session.user.username),
        Some(addr.ip().to_string()),
    );

    Ok(Json(AuthResponse {
        token: session.token,
        user: session.user,
    }))
}

/// GET /me
///
/// Current user's projection, resolved from the token subject.
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<MeResponse>> {
    let user = state.auth.profile(auth_user.user_id()).await?;

    Ok(Json(MeResponse { user }))
}
