//! Registration input validation shared by client and server.
//!
//! DESIGN
//! ======
//! The wizard gates each step on the fields that step owns and re-runs the
//! whole set at the final gate; the server re-validates the same rules before
//! persisting. Keeping one implementation here prevents the two sides from
//! drifting apart.

use crate::Gender;

/// Minimum length for first and last names, in characters.
pub const NAME_MIN_LEN: usize = 2;
/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Placeholder token the original seed data leaked into real sign-ups.
/// Names containing it, or equal to one of its leading fragments, are
/// rejected as placeholder text.
const BLACKLISTED_NAME_TOKEN: &str = "champion";

/// Throwaway-mailbox domain rejected at the credentials gate.
const BLACKLISTED_EMAIL_DOMAIN: &str = "yopmail.com";

/// A field-level problem detected before submission. Recoverable: the user
/// corrects the field and retries, no data is lost.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailed {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be at least {NAME_MIN_LEN} characters")]
    NameTooShort { field: &'static str },
    #[error("{field} looks like placeholder text")]
    NameBlacklisted { field: &'static str },
    #[error("enter a valid email address")]
    EmailInvalid,
    #[error("this email domain is not accepted")]
    EmailBlacklisted,
    #[error("password must be at least {PASSWORD_MIN_LEN} characters")]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("{field} must be a positive number")]
    NotANumber { field: &'static str },
    #[error("select a gender")]
    GenderUnset,
}

impl ValidationFailed {
    /// True when the failing field belongs to the names step, so the final
    /// gate can route the user back there instead of failing silently.
    #[must_use]
    pub fn concerns_names(&self) -> bool {
        matches!(
            self,
            Self::NameTooShort { field } | Self::NameBlacklisted { field } | Self::MissingField { field }
                if *field == "first name" || *field == "last name"
        )
    }
}

/// True when a trimmed, lowercased name matches the placeholder token or one
/// of its leading fragments ("ch", "cham", "champion123", ...).
#[must_use]
pub fn is_blacklisted_name(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    if normalized.len() < 2 {
        return false;
    }
    normalized.contains(BLACKLISTED_NAME_TOKEN) || BLACKLISTED_NAME_TOKEN.starts_with(&normalized)
}

/// Validate a first or last name: present, at least [`NAME_MIN_LEN`]
/// characters, not placeholder text.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationFailed> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailed::MissingField { field });
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Err(ValidationFailed::NameTooShort { field });
    }
    if is_blacklisted_name(trimmed) {
        return Err(ValidationFailed::NameBlacklisted { field });
    }
    Ok(())
}

/// Trim and lowercase an email, returning `None` unless it has exactly one
/// `@` with non-empty local and domain parts.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validate and normalize an email address, rejecting the blacklisted
/// throwaway domain.
pub fn validate_email(email: &str) -> Result<String, ValidationFailed> {
    let normalized = normalize_email(email).ok_or(ValidationFailed::EmailInvalid)?;
    let domain = normalized.split('@').next_back().unwrap_or_default();
    if domain == BLACKLISTED_EMAIL_DOMAIN {
        return Err(ValidationFailed::EmailBlacklisted);
    }
    Ok(normalized)
}

/// Validate a password against its confirmation.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), ValidationFailed> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationFailed::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationFailed::PasswordMismatch);
    }
    Ok(())
}

/// Require a gender selection.
pub fn validate_gender(gender: Gender) -> Result<(), ValidationFailed> {
    if gender == Gender::Unset {
        return Err(ValidationFailed::GenderUnset);
    }
    Ok(())
}

/// Parse numeric text entered in the wizard as a positive integer.
pub fn parse_positive_u32(field: &'static str, text: &str) -> Result<u32, ValidationFailed> {
    match text.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationFailed::NotANumber { field }),
    }
}

/// Parse numeric text entered in the wizard as a positive decimal.
pub fn parse_positive_f32(field: &'static str, text: &str) -> Result<f32, ValidationFailed> {
    match text.trim().parse::<f32>() {
        Ok(n) if n > 0.0 && n.is_finite() => Ok(n),
        _ => Err(ValidationFailed::NotANumber { field }),
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
