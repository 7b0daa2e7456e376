use super::*;
use records::{ActivityLevel, Gender, Goal, Role};
use uuid::Uuid;

fn user() -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        role: Role::Client,
        first_name: "Ana".to_owned(),
        last_name: "Lee".to_owned(),
        email: "a@b.com".to_owned(),
        age: 29,
        height_cm: 172,
        weight_kg: 63.5,
        goals: vec![Goal::LoseWeight],
        gender: Gender::Female,
        activity_level: ActivityLevel::ModeratelyActive,
        favorite_sport: "running".to_owned(),
    }
}

#[test]
fn default_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_has_no_user_and_is_loading() {
    let state = AuthState::resolving();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn signed_out_matches_default() {
    assert_eq!(AuthState::signed_out(), AuthState::default());
}

#[test]
fn signed_in_carries_user_and_clears_loading() {
    let u = user();
    let state = AuthState::signed_in(u.clone());
    assert_eq!(state.user, Some(u));
    assert!(!state.loading);
}
