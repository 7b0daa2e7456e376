//! Explicit wizard step machine for the registration flow.
//!
//! DESIGN
//! ======
//! The original flow enforced step order implicitly through screen
//! navigation. Here the order is an explicit enum with per-step gates, so
//! "no field is required before its owning step" is testable on its own:
//! each step's route is only pushed from its predecessor's gated "next"
//! action, and backward navigation never clears fields.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use records::catalog;
use records::validate::{self, ValidationFailed};

use crate::state::registration::RegistrationDraft;

/// Wizard steps in order. `Credentials` is the final, submitting step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Names,
    Goals,
    Profile,
    Sport,
    Activity,
    Credentials,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 6] = [
        Self::Names,
        Self::Goals,
        Self::Profile,
        Self::Sport,
        Self::Activity,
        Self::Credentials,
    ];

    /// The following step, or `None` from `Credentials`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Names => Some(Self::Goals),
            Self::Goals => Some(Self::Profile),
            Self::Profile => Some(Self::Sport),
            Self::Sport => Some(Self::Activity),
            Self::Activity => Some(Self::Credentials),
            Self::Credentials => None,
        }
    }

    /// The preceding step, or `None` from `Names`. Always permitted.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Names => None,
            Self::Goals => Some(Self::Names),
            Self::Profile => Some(Self::Goals),
            Self::Sport => Some(Self::Profile),
            Self::Activity => Some(Self::Sport),
            Self::Credentials => Some(Self::Activity),
        }
    }

    /// Route path for this step's page.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Names => "/auth/register/names",
            Self::Goals => "/auth/register/goals",
            Self::Profile => "/auth/register/profile",
            Self::Sport => "/auth/register/sport",
            Self::Activity => "/auth/register/activity",
            Self::Credentials => "/auth/register/credentials",
        }
    }

    /// Parse a route path back into its step.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.route() == route.trim_end_matches('/'))
    }

    /// Zero-based position, for "Step N of 6" headers.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// True for any route inside the registration wizard.
#[must_use]
pub fn is_wizard_route(route: &str) -> bool {
    route.trim_start_matches('/').starts_with("auth/register")
}

/// Gate a step's "next" action on the fields that step owns.
///
/// `Credentials` always passes here; its checks belong to the final gate
/// (`RegistrationDraft::finalize`), which also needs the confirmation field.
pub fn gate(step: WizardStep, draft: &RegistrationDraft) -> Result<(), ValidationFailed> {
    match step {
        WizardStep::Names => {
            validate::validate_name("first name", &draft.first_name)?;
            validate::validate_name("last name", &draft.last_name)
        }
        WizardStep::Goals => {
            if draft.goals.is_empty() {
                return Err(ValidationFailed::MissingField { field: "goals" });
            }
            Ok(())
        }
        WizardStep::Profile => {
            validate::validate_gender(draft.gender)?;
            validate::parse_positive_u32("age", &draft.age)?;
            validate::parse_positive_u32("height", &draft.height)?;
            validate::parse_positive_f32("weight", &draft.weight)?;
            Ok(())
        }
        WizardStep::Sport => {
            if catalog::sport_by_id(&draft.favorite_sport).is_none() {
                return Err(ValidationFailed::MissingField { field: "favorite sport" });
            }
            Ok(())
        }
        WizardStep::Activity => {
            if draft.activity_level.is_none() {
                return Err(ValidationFailed::MissingField { field: "activity level" });
            }
            Ok(())
        }
        WizardStep::Credentials => Ok(()),
    }
}
