//! JSON calls against the companion server.
//!
//! Errors are plain displayable strings: every caller funnels them into a
//! page-level info message rather than handling cases.

use gloo_net::http::{Request, RequestBuilder, Response};
use records::{RegisterRequest, UserRecord};
use web_sys::RequestCredentials;

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn read_error(resp: Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {}", resp.status()),
    }
}

/// `GET /api/auth/me` — the identity collaborator's current-user report.
/// A missing or expired session is a clean `None`, not an error.
pub async fn fetch_me() -> Result<Option<UserRecord>, String> {
    let resp = with_credentials(Request::get("/api/auth/me"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    match resp.status() {
        200 => resp.json::<UserRecord>().await.map(Some).map_err(|e| e.to_string()),
        401 => Ok(None),
        _ => Err(read_error(resp).await),
    }
}

/// `POST /api/auth/login` — `None` means the credentials were rejected.
pub async fn login(email: &str, password: &str) -> Result<Option<UserRecord>, String> {
    let resp = with_credentials(Request::post("/api/auth/login"))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    match resp.status() {
        200 => resp.json::<UserRecord>().await.map(Some).map_err(|e| e.to_string()),
        401 => Ok(None),
        _ => Err(read_error(resp).await),
    }
}

/// `POST /api/auth/register` — `None` means the email is already in use,
/// mirroring the collaborator's `UserRecord | null` contract.
pub async fn register(req: RegisterRequest) -> Result<Option<UserRecord>, String> {
    let resp = with_credentials(Request::post("/api/auth/register"))
        .json(&req)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    match resp.status() {
        201 => resp.json::<UserRecord>().await.map(Some).map_err(|e| e.to_string()),
        409 => Ok(None),
        _ => Err(read_error(resp).await),
    }
}

/// `POST /api/auth/logout` — best-effort; the cookie is cleared server-side.
pub async fn logout() -> Result<(), String> {
    with_credentials(Request::post("/api/auth/logout"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// `POST /api/auth/forgot-password` — always the same response shape, so the
/// page cannot leak which addresses exist.
pub async fn forgot_password(email: &str) -> Result<(), String> {
    let resp = with_credentials(Request::post("/api/auth/forgot-password"))
        .json(&serde_json::json!({ "email": email }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 202 {
        Ok(())
    } else {
        Err(read_error(resp).await)
    }
}

/// `POST /api/auth/change-password` — `false` means the current password was
/// rejected.
pub async fn change_password(current: &str, new_password: &str) -> Result<bool, String> {
    let resp = with_credentials(Request::post("/api/auth/change-password"))
        .json(&serde_json::json!({
            "current_password": current,
            "new_password": new_password,
        }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    match resp.status() {
        204 => Ok(true),
        401 => Ok(false),
        _ => Err(read_error(resp).await),
    }
}
