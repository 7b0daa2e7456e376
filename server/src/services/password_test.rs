use super::*;

#[test]
fn hash_password_is_stable() {
    assert_eq!(hash_password("Secret123"), hash_password("Secret123"));
}

#[test]
fn hash_password_differs_per_input() {
    assert_ne!(hash_password("Secret123"), hash_password("Secret124"));
}

#[test]
fn hash_password_carries_scheme_prefix() {
    let hashed = hash_password("Secret123");
    assert!(is_hashed(&hashed));
    assert_eq!(hashed.len(), HASH_PREFIX.len() + 64);
}

#[test]
fn plaintext_is_not_recognized_as_hashed() {
    assert!(!is_hashed("Secret123"));
    assert!(!is_hashed(""));
}

#[test]
fn verify_matches_hashed_value() {
    let stored = hash_password("Secret123");
    assert_eq!(verify_password(&stored, "Secret123"), PasswordCheck::Match);
}

#[test]
fn verify_rejects_wrong_candidate_against_hash() {
    let stored = hash_password("Secret123");
    assert_eq!(verify_password(&stored, "Secret124"), PasswordCheck::Mismatch);
}

#[test]
fn verify_reports_legacy_plaintext_match() {
    assert_eq!(verify_password("Secret123", "Secret123"), PasswordCheck::MatchLegacy);
}

#[test]
fn verify_rejects_wrong_candidate_against_plaintext() {
    assert_eq!(verify_password("Secret123", "Secret124"), PasswordCheck::Mismatch);
}

#[test]
fn empty_stored_value_never_matches() {
    assert_eq!(verify_password("", ""), PasswordCheck::Mismatch);
    assert_eq!(verify_password("", "anything"), PasswordCheck::Mismatch);
}
