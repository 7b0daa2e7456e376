//! Flat user-store routes.
//!
//! The contract is intentionally primitive: one array of flat user objects,
//! no pagination, bulk save. Password material never appears on this surface.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::UserRecord;
use serde::Serialize;

use super::auth::AuthUser;
use crate::services::accounts;
use crate::state::AppState;

/// `GET /api/users` — the full account list as flat records.
pub async fn list_users(State(state): State<AppState>, _auth: AuthUser) -> Response {
    match state.store.list().await {
        Ok(users) => {
            let records: Vec<UserRecord> = users.into_iter().map(|u| u.record).collect();
            Json(records).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "listing users failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Serialize)]
pub struct SaveUsersResponse {
    pub saved: usize,
}

/// `POST /api/users` — bulk profile save. Records are matched to existing
/// accounts by email; unknown emails are skipped.
pub async fn save_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(incoming): Json<Vec<UserRecord>>,
) -> Response {
    match accounts::save_profiles(state.store.as_ref(), incoming).await {
        Ok(saved) => Json(SaveUsersResponse { saved }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "bulk profile save failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
