//! Password hashing and legacy-plaintext migration.
//!
//! TRADE-OFFS
//! ==========
//! Early data files stored passwords as plaintext. Hashed values carry a
//! scheme prefix so both forms can coexist in one store; a plaintext match is
//! reported separately so callers can rehash on the spot.

use sha2::{Digest, Sha256};

const PASSWORD_SALT: &str = "coachfit-account-salt-v1";
const HASH_PREFIX: &str = "sha256$";

/// Outcome of checking a candidate password against a stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordCheck {
    /// Candidate matches a hashed stored value.
    Match,
    /// Candidate matches a legacy plaintext stored value; caller must rehash.
    MatchLegacy,
    Mismatch,
}

/// Hash a password with the static salt, prefixed with the scheme tag.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(PASSWORD_SALT.as_bytes());
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    let hex = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
    format!("{HASH_PREFIX}{hex}")
}

/// True when a stored value carries the hash scheme prefix.
#[must_use]
pub fn is_hashed(stored: &str) -> bool {
    stored.starts_with(HASH_PREFIX)
}

/// Check a candidate password against a stored value, hashed or legacy.
#[must_use]
pub fn verify_password(stored: &str, candidate: &str) -> PasswordCheck {
    if is_hashed(stored) {
        if hash_password(candidate) == stored {
            PasswordCheck::Match
        } else {
            PasswordCheck::Mismatch
        }
    } else if stored == candidate && !stored.is_empty() {
        PasswordCheck::MatchLegacy
    } else {
        PasswordCheck::Mismatch
    }
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
