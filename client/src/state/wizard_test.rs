use super::*;
use records::{ActivityLevel, Gender, Goal};

fn filled_draft() -> RegistrationDraft {
    RegistrationDraft {
        first_name: "Ana".to_owned(),
        last_name: "Lee".to_owned(),
        goals: vec![Goal::LoseWeight],
        gender: Gender::Female,
        age: "29".to_owned(),
        height: "172".to_owned(),
        weight: "63.5".to_owned(),
        activity_level: Some(ActivityLevel::Sedentary),
        favorite_sport: "running".to_owned(),
        email: "a@b.com".to_owned(),
        password: "Secret123".to_owned(),
    }
}

// =============================================================================
// Step ordering
// =============================================================================

#[test]
fn steps_advance_in_wizard_order() {
    assert_eq!(WizardStep::Names.next(), Some(WizardStep::Goals));
    assert_eq!(WizardStep::Goals.next(), Some(WizardStep::Profile));
    assert_eq!(WizardStep::Profile.next(), Some(WizardStep::Sport));
    assert_eq!(WizardStep::Sport.next(), Some(WizardStep::Activity));
    assert_eq!(WizardStep::Activity.next(), Some(WizardStep::Credentials));
    assert_eq!(WizardStep::Credentials.next(), None);
}

#[test]
fn prev_is_the_inverse_of_next() {
    for step in WizardStep::ALL {
        if let Some(next) = step.next() {
            assert_eq!(next.prev(), Some(step));
        }
    }
    assert_eq!(WizardStep::Names.prev(), None);
}

#[test]
fn index_follows_catalog_order() {
    assert_eq!(WizardStep::Names.index(), 0);
    assert_eq!(WizardStep::Credentials.index(), 5);
}

// =============================================================================
// Routes
// =============================================================================

#[test]
fn routes_are_distinct_wizard_routes() {
    for (i, a) in WizardStep::ALL.iter().enumerate() {
        assert!(is_wizard_route(a.route()));
        for b in &WizardStep::ALL[i + 1..] {
            assert_ne!(a.route(), b.route());
        }
    }
}

#[test]
fn from_route_inverts_route() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_route(step.route()), Some(step));
    }
    assert_eq!(WizardStep::from_route("/client/home"), None);
}

#[test]
fn non_wizard_routes_are_recognized() {
    assert!(!is_wizard_route("/auth/login"));
    assert!(!is_wizard_route("/client/home"));
    assert!(is_wizard_route("/auth/register/names"));
    assert!(is_wizard_route("auth/register/credentials"));
}

// =============================================================================
// Gates
// =============================================================================

#[test]
fn every_gate_blocks_the_empty_draft_except_credentials() {
    let empty = RegistrationDraft::default();
    for step in WizardStep::ALL {
        let result = gate(step, &empty);
        if step == WizardStep::Credentials {
            assert_eq!(result, Ok(()), "credentials defers to the final gate");
        } else {
            assert!(result.is_err(), "{step:?} must not pass on an empty draft");
        }
    }
}

#[test]
fn every_gate_passes_on_a_filled_draft() {
    let draft = filled_draft();
    for step in WizardStep::ALL {
        assert_eq!(gate(step, &draft), Ok(()), "{step:?} should pass");
    }
}

#[test]
fn names_gate_owns_only_name_fields() {
    // A draft with nothing but valid names passes Names and nothing else
    // before its own step: later-step fields are not required yet.
    let mut draft = RegistrationDraft::default();
    draft.first_name = "Ana".to_owned();
    draft.last_name = "Lee".to_owned();
    assert_eq!(gate(WizardStep::Names, &draft), Ok(()));
    assert!(gate(WizardStep::Goals, &draft).is_err());
}

#[test]
fn profile_gate_requires_gender_and_numeric_text() {
    let mut draft = filled_draft();
    draft.gender = Gender::Unset;
    assert!(gate(WizardStep::Profile, &draft).is_err());

    let mut draft = filled_draft();
    draft.height = "tall".to_owned();
    assert!(gate(WizardStep::Profile, &draft).is_err());
}

#[test]
fn sport_gate_requires_catalog_entry() {
    let mut draft = filled_draft();
    draft.favorite_sport = "underwater-chess".to_owned();
    assert!(gate(WizardStep::Sport, &draft).is_err());
}
