//! Session-token management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived random tokens held in an in-memory registry with
//! TTL expiry. The companion persists accounts, not sessions: restarting the
//! process signs everyone out, which is acceptable for this deployment.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::Rng;
use uuid::Uuid;

const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 30;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

struct SessionEntry {
    user_id: Uuid,
    expires_at: Instant,
}

/// In-memory token registry. Clone is cheap; all clones share one map.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionRegistry {
    /// Registry with the TTL from `SESSION_TTL_SECS` (default 30 days).
    #[must_use]
    pub fn new() -> Self {
        let ttl_secs = env_parse("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS);
        Self::with_ttl(Duration::from_secs(ttl_secs))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), ttl }
    }

    /// Create a session for the given user, returning the token.
    pub fn create(&self, user_id: Uuid) -> String {
        self.create_at(user_id, Instant::now())
    }

    fn create_at(&self, user_id: Uuid, now: Instant) -> String {
        let token = generate_token();
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.insert(token.clone(), SessionEntry { user_id, expires_at: now + self.ttl });
        token
    }

    /// Resolve a token to its user, dropping it if expired.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        self.resolve_at(token, Instant::now())
    }

    fn resolve_at(&self, token: &str, now: Instant) -> Option<Uuid> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match inner.get(token) {
            Some(entry) if entry.expires_at > now => Some(entry.user_id),
            Some(_) => {
                inner.remove(token);
                None
            }
            None => None,
        }
    }

    /// Delete a session by token. Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.remove(token);
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
