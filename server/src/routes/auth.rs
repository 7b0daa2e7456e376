//! Auth routes — registration, login, session cookie management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use records::{RegisterRequest, UserRecord, validate};
use serde::Deserialize;
use time::Duration;

use crate::services::accounts::{self, AccountError};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(30))
        .build()
}

fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message }))
}

fn account_error_response(e: &AccountError) -> Response {
    let status = match e {
        AccountError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::EmailTaken => StatusCode::CONFLICT,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %e, "account operation failed");
        return (status, error_body("internal error")).into_response();
    }
    (status, error_body(&e.to_string())).into_response()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserRecord,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user_id = app_state.sessions.resolve(token).ok_or(StatusCode::UNAUTHORIZED)?;
        let stored = app_state
            .store
            .find_by_id(user_id)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user: stored.record, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register` — create an account, open a session, set cookie.
pub async fn register(State(state): State<AppState>, jar: CookieJar, Json(req): Json<RegisterRequest>) -> Response {
    match accounts::register(state.store.as_ref(), req).await {
        Ok(record) => {
            let token = state.sessions.create(record.id);
            let jar = jar.add(session_cookie(token));
            (jar, (StatusCode::CREATED, Json(record))).into_response()
        }
        Err(e) => account_error_response(&e),
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login` — verify credentials, open a session, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(req): Json<LoginRequest>) -> Response {
    match accounts::login(state.store.as_ref(), &req.email, &req.password).await {
        Ok(record) => {
            let token = state.sessions.create(record.id);
            let jar = jar.add(session_cookie(token));
            (jar, Json(record)).into_response()
        }
        Err(e) => account_error_response(&e),
    }
}

/// `POST /api/auth/logout` — revoke the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, auth: AuthUser) -> Response {
    state.sessions.revoke(&auth.token);
    let jar = jar.remove(Cookie::build((COOKIE_NAME, "")).path("/").build());
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `GET /api/auth/me` — return the current session's account.
pub async fn me(auth: AuthUser) -> Json<UserRecord> {
    Json(auth.user)
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    email: String,
}

/// `POST /api/auth/forgot-password` — accept a reset request.
///
/// No mail transport is wired up; the request is logged so an operator can
/// follow up. The response is the same for known and unknown addresses.
pub async fn forgot_password(Json(req): Json<ForgotPasswordRequest>) -> Response {
    match validate::normalize_email(&req.email) {
        Some(email) => {
            tracing::info!(%email, "password reset requested");
            (StatusCode::ACCEPTED, Json(serde_json::json!({ "status": "accepted" }))).into_response()
        }
        None => (StatusCode::UNPROCESSABLE_ENTITY, error_body("enter a valid email address")).into_response(),
    }
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

/// `POST /api/auth/change-password` — rotate the authenticated user's password.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Response {
    match accounts::change_password(state.store.as_ref(), auth.user.id, &req.current_password, &req.new_password)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => account_error_response(&e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
