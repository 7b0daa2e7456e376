//! Account registration, login, and profile persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard's final gate validates on the client, but the companion is the
//! authority: every rule is re-checked here before anything is persisted.

use records::validate::{self, ValidationFailed};
use records::{Gender, RegisterRequest, UserRecord, catalog};
use uuid::Uuid;

use crate::services::password::{self, PasswordCheck};
use crate::services::store::{ProfileStore, StoreError, StoredUser};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    Validation(#[from] ValidationFailed),
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AccountError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => Self::EmailTaken,
            other => Self::Store(other),
        }
    }
}

fn validate_request(req: &RegisterRequest) -> Result<String, AccountError> {
    validate::validate_name("first name", &req.first_name)?;
    validate::validate_name("last name", &req.last_name)?;
    let email = validate::validate_email(&req.email)?;
    validate::validate_password(&req.password, &req.password)?;
    validate::validate_gender(req.gender)?;
    if req.goals.is_empty() {
        return Err(ValidationFailed::MissingField { field: "goals" }.into());
    }
    if catalog::sport_by_id(&req.favorite_sport).is_none() {
        return Err(ValidationFailed::MissingField { field: "favorite sport" }.into());
    }
    if req.age == 0 || req.height_cm == 0 || req.weight_kg <= 0.0 {
        return Err(ValidationFailed::NotANumber { field: "profile" }.into());
    }
    Ok(email)
}

/// Create a new account. The returned record carries the freshly assigned id.
pub async fn register(store: &dyn ProfileStore, req: RegisterRequest) -> Result<UserRecord, AccountError> {
    let email = validate_request(&req)?;

    let record = UserRecord {
        id: Uuid::new_v4(),
        role: req.role,
        first_name: req.first_name.trim().to_owned(),
        last_name: req.last_name.trim().to_owned(),
        email,
        age: req.age,
        height_cm: req.height_cm,
        weight_kg: req.weight_kg,
        goals: req.goals,
        gender: req.gender,
        activity_level: req.activity_level,
        favorite_sport: req.favorite_sport,
    };

    let stored = StoredUser {
        record: record.clone(),
        password_hash: password::hash_password(&req.password),
    };
    store.insert(stored).await?;

    tracing::info!(email = %record.email, "account created");
    Ok(record)
}

/// Verify credentials and return the account. Legacy plaintext passwords are
/// rehashed in place on first successful login.
pub async fn login(store: &dyn ProfileStore, email: &str, candidate: &str) -> Result<UserRecord, AccountError> {
    let Some(email) = validate::normalize_email(email) else {
        return Err(AccountError::InvalidCredentials);
    };
    let Some(mut stored) = store.find_by_email(&email).await? else {
        return Err(AccountError::InvalidCredentials);
    };

    match password::verify_password(&stored.password_hash, candidate) {
        PasswordCheck::Match => Ok(stored.record),
        PasswordCheck::MatchLegacy => {
            stored.password_hash = password::hash_password(candidate);
            store.update(stored.clone()).await?;
            tracing::info!(email = %stored.record.email, "migrated legacy password hash");
            Ok(stored.record)
        }
        PasswordCheck::Mismatch => Err(AccountError::InvalidCredentials),
    }
}

/// Change an authenticated user's password after verifying the current one.
pub async fn change_password(
    store: &dyn ProfileStore,
    user_id: Uuid,
    current: &str,
    new_password: &str,
) -> Result<(), AccountError> {
    validate::validate_password(new_password, new_password)?;
    let Some(mut stored) = store.find_by_id(user_id).await? else {
        return Err(AccountError::InvalidCredentials);
    };
    if password::verify_password(&stored.password_hash, current) == PasswordCheck::Mismatch {
        return Err(AccountError::InvalidCredentials);
    }
    stored.password_hash = password::hash_password(new_password);
    store.update(stored).await?;
    Ok(())
}

/// Bulk profile save (`POST /api/users`): incoming records are matched to
/// existing accounts by email; id and password hash always come from the
/// store so the flat client-facing records can never rewrite either. Unknown
/// emails are skipped. Returns the number of accounts updated.
pub async fn save_profiles(store: &dyn ProfileStore, incoming: Vec<UserRecord>) -> Result<usize, AccountError> {
    let mut users = store.list().await?;
    let mut updated = 0;

    for record in incoming {
        let Some(email) = validate::normalize_email(&record.email) else {
            tracing::warn!(email = %record.email, "skipping profile save with invalid email");
            continue;
        };
        let Some(slot) = users.iter_mut().find(|u| u.record.email == email) else {
            tracing::warn!(email = %email, "skipping profile save for unknown account");
            continue;
        };
        if record.gender == Gender::Unset {
            tracing::warn!(email = %email, "skipping profile save with unset gender");
            continue;
        }
        let id = slot.record.id;
        slot.record = UserRecord { id, email, ..record };
        updated += 1;
    }

    store.replace_all(users).await?;
    Ok(updated)
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
