use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;
use uuid::Uuid;

fn filled_draft() -> RegistrationDraft {
    RegistrationDraft {
        first_name: "Ana".to_owned(),
        last_name: "Lee".to_owned(),
        goals: vec![Goal::LoseWeight, Goal::SleepBetter],
        gender: Gender::Female,
        age: "29".to_owned(),
        height: "172".to_owned(),
        weight: "63.5".to_owned(),
        activity_level: Some(ActivityLevel::ModeratelyActive),
        favorite_sport: "running".to_owned(),
        email: "a@b.com".to_owned(),
        password: "Secret123".to_owned(),
    }
}

fn created_user(req: &RegisterRequest) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        role: req.role,
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        email: req.email.clone(),
        age: req.age,
        height_cm: req.height_cm,
        weight_kg: req.weight_kg,
        goals: req.goals.clone(),
        gender: req.gender,
        activity_level: req.activity_level,
        favorite_sport: req.favorite_sport.clone(),
    }
}

// =============================================================================
// apply / reset / toggle_goal
// =============================================================================

#[test]
fn apply_merges_only_present_fields() {
    let mut draft = RegistrationDraft::default();
    draft.apply(DraftPatch { first_name: Some("Ana".to_owned()), ..DraftPatch::default() });
    draft.apply(DraftPatch { last_name: Some("Lee".to_owned()), ..DraftPatch::default() });

    assert_eq!(draft.first_name, "Ana");
    assert_eq!(draft.last_name, "Lee");
    // Everything else stays at defaults.
    assert!(draft.goals.is_empty());
    assert_eq!(draft.gender, Gender::Unset);
    assert_eq!(draft.age, "");
    assert!(draft.activity_level.is_none());
    assert_eq!(draft.email, "");
}

#[test]
fn apply_overwrites_previous_value_of_same_field() {
    let mut draft = RegistrationDraft::default();
    draft.apply(DraftPatch { first_name: Some("An".to_owned()), ..DraftPatch::default() });
    draft.apply(DraftPatch { first_name: Some("Ana".to_owned()), ..DraftPatch::default() });
    assert_eq!(draft.first_name, "Ana");
}

#[test]
fn reset_restores_the_exact_initial_value() {
    let mut draft = filled_draft();
    draft.reset();
    assert_eq!(draft, RegistrationDraft::default());
}

#[test]
fn toggle_goal_preserves_insertion_order() {
    let mut draft = RegistrationDraft::default();
    draft.toggle_goal(Goal::SleepBetter);
    draft.toggle_goal(Goal::LoseWeight);
    draft.toggle_goal(Goal::EatHealthier);
    assert_eq!(draft.goals, vec![Goal::SleepBetter, Goal::LoseWeight, Goal::EatHealthier]);

    // Removing from the middle keeps the order of the rest.
    draft.toggle_goal(Goal::LoseWeight);
    assert_eq!(draft.goals, vec![Goal::SleepBetter, Goal::EatHealthier]);

    // Toggling back on appends at the end.
    draft.toggle_goal(Goal::LoseWeight);
    assert_eq!(draft.goals, vec![Goal::SleepBetter, Goal::EatHealthier, Goal::LoseWeight]);
}

// =============================================================================
// finalize
// =============================================================================

#[test]
fn finalize_builds_request_with_client_role_and_parsed_numbers() {
    let req = filled_draft().finalize("Secret123").unwrap();
    assert_eq!(req.role, Role::Client);
    assert_eq!(req.first_name, "Ana");
    assert_eq!(req.last_name, "Lee");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.age, 29);
    assert_eq!(req.height_cm, 172);
    assert_eq!(req.weight_kg, 63.5);
    assert_eq!(req.goals, vec![Goal::LoseWeight, Goal::SleepBetter]);
    assert_eq!(req.gender, Gender::Female);
    assert_eq!(req.activity_level, ActivityLevel::ModeratelyActive);
    assert_eq!(req.favorite_sport, "running");
}

#[test]
fn finalize_rejects_malformed_email() {
    let mut draft = filled_draft();
    draft.email = "bad-email".to_owned();
    assert_eq!(draft.finalize("Secret123"), Err(ValidationFailed::EmailInvalid));
}

#[test]
fn finalize_rejects_password_mismatch() {
    let draft = filled_draft();
    assert_eq!(draft.finalize("Secret124"), Err(ValidationFailed::PasswordMismatch));
}

#[test]
fn finalize_rejects_blacklisted_first_name() {
    let mut draft = filled_draft();
    draft.first_name = "ch".to_owned();
    let err = draft.finalize("Secret123").unwrap_err();
    assert_eq!(err, ValidationFailed::NameBlacklisted { field: "first name" });
    assert!(err.concerns_names());
}

#[test]
fn finalize_rejects_unparseable_age() {
    let mut draft = filled_draft();
    draft.age = "twenty".to_owned();
    assert_eq!(draft.finalize("Secret123"), Err(ValidationFailed::NotANumber { field: "age" }));
}

#[test]
fn finalize_rejects_missing_selections() {
    let mut no_goals = filled_draft();
    no_goals.goals.clear();
    assert_eq!(
        no_goals.finalize("Secret123"),
        Err(ValidationFailed::MissingField { field: "goals" })
    );

    let mut no_activity = filled_draft();
    no_activity.activity_level = None;
    assert_eq!(
        no_activity.finalize("Secret123"),
        Err(ValidationFailed::MissingField { field: "activity level" })
    );

    let mut bad_sport = filled_draft();
    bad_sport.favorite_sport = "underwater-chess".to_owned();
    assert_eq!(
        bad_sport.finalize("Secret123"),
        Err(ValidationFailed::MissingField { field: "favorite sport" })
    );
}

// =============================================================================
// submit
// =============================================================================

#[test]
fn submit_never_calls_collaborator_on_validation_failure() {
    let mut draft = filled_draft();
    draft.email = "bad-email".to_owned();

    let called = Rc::new(Cell::new(false));
    let called_in = Rc::clone(&called);
    let result = block_on(submit(&draft, "Secret123", move |_req| {
        called_in.set(true);
        async { Ok(None) }
    }));

    assert_eq!(result, Err(ValidationFailed::EmailInvalid));
    assert!(!called.get(), "register must not be invoked on a rejected draft");
}

#[test]
fn submit_calls_collaborator_exactly_once_with_full_request() {
    let draft = filled_draft();

    let calls = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(None::<RegisterRequest>));
    let calls_in = Rc::clone(&calls);
    let seen_in = Rc::clone(&seen);

    let outcome = block_on(submit(&draft, "Secret123", move |req| {
        calls_in.set(calls_in.get() + 1);
        let user = created_user(&req);
        *seen_in.borrow_mut() = Some(req);
        async move { Ok(Some(user)) }
    }))
    .unwrap();

    assert_eq!(calls.get(), 1);
    let req = seen.borrow().clone().unwrap();
    assert_eq!(req.role, Role::Client);
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.goals, vec![Goal::LoseWeight, Goal::SleepBetter]);
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
}

#[test]
fn submit_maps_null_return_to_duplicate_email() {
    let draft = filled_draft();
    let outcome = block_on(submit(&draft, "Secret123", |_req| async { Ok(None) })).unwrap();
    assert_eq!(outcome, SubmitOutcome::DuplicateEmail);
}

#[test]
fn submit_maps_transport_error_to_failed() {
    let draft = filled_draft();
    let outcome =
        block_on(submit(&draft, "Secret123", |_req| async { Err("offline".to_owned()) })).unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed("offline".to_owned()));
}

// =============================================================================
// settle_submission
// =============================================================================

#[test]
fn settle_success_resets_draft_and_signs_in() {
    let mut draft = filled_draft();
    let mut auth = AuthState::signed_out();
    let user = created_user(&draft.finalize("Secret123").unwrap());

    let target = settle_submission(SubmitOutcome::Created(user.clone()), &mut draft, &mut auth).unwrap();

    assert_eq!(target, HOME_ROUTE);
    assert_eq!(draft, RegistrationDraft::default());
    assert_eq!(auth, AuthState::signed_in(user));
}

#[test]
fn settle_duplicate_email_leaves_draft_intact() {
    let mut draft = filled_draft();
    let before = draft.clone();
    let mut auth = AuthState::signed_out();

    let err = settle_submission(SubmitOutcome::DuplicateEmail, &mut draft, &mut auth).unwrap_err();

    assert!(err.contains("already in use"));
    assert_eq!(draft, before);
    assert!(auth.user.is_none());
}

#[test]
fn settle_failure_leaves_draft_intact_with_reason() {
    let mut draft = filled_draft();
    let before = draft.clone();
    let mut auth = AuthState::signed_out();

    let err = settle_submission(SubmitOutcome::Failed("offline".to_owned()), &mut draft, &mut auth).unwrap_err();

    assert!(err.contains("offline"));
    assert_eq!(draft, before);
}
