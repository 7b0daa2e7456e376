use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionRegistry
// =============================================================================

#[test]
fn create_then_resolve_returns_user() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(60));
    let user = Uuid::new_v4();
    let token = registry.create(user);
    assert_eq!(registry.resolve(&token), Some(user));
}

#[test]
fn unknown_token_resolves_to_none() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(60));
    assert_eq!(registry.resolve("not-a-token"), None);
}

#[test]
fn revoke_drops_the_session() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(60));
    let token = registry.create(Uuid::new_v4());
    registry.revoke(&token);
    assert_eq!(registry.resolve(&token), None);
}

#[test]
fn expired_token_resolves_to_none_and_is_pruned() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(10));
    let user = Uuid::new_v4();
    let start = Instant::now();
    let token = registry.create_at(user, start);

    // Still valid just inside the window.
    assert_eq!(registry.resolve_at(&token, start + Duration::from_secs(9)), Some(user));
    // Expired past the window, and stays gone even at the original time.
    assert_eq!(registry.resolve_at(&token, start + Duration::from_secs(11)), None);
    assert_eq!(registry.resolve_at(&token, start), None);
}

#[test]
fn clones_share_one_registry() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(60));
    let clone = registry.clone();
    let user = Uuid::new_v4();
    let token = registry.create(user);
    assert_eq!(clone.resolve(&token), Some(user));
}

#[test]
fn sessions_are_independent_per_token() {
    let registry = SessionRegistry::with_ttl(Duration::from_secs(60));
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let token_a = registry.create(a);
    let token_b = registry.create(b);
    registry.revoke(&token_a);
    assert_eq!(registry.resolve(&token_b), Some(b));
}
