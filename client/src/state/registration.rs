//! Registration draft state for the sign-up wizard.
//!
//! DESIGN
//! ======
//! One shared draft record is provided through context and mutated only by
//! whole-field merges (`apply`) plus an explicit `reset`. Steps gate their
//! own fields on "next"; nothing is validated here until the final gate
//! (`finalize`) re-checks the whole draft and builds the register request.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use records::validate::{self, ValidationFailed};
use records::{ActivityLevel, Gender, Goal, RegisterRequest, Role, UserRecord, catalog};

use crate::state::auth::AuthState;
use crate::util::guard::HOME_ROUTE;

/// In-progress sign-up data accumulated across wizard steps.
///
/// Numeric fields stay as entered text until the final gate parses them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    /// Ordered set: insertion order is preserved for display, no duplicates.
    pub goals: Vec<Goal>,
    pub gender: Gender,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub activity_level: Option<ActivityLevel>,
    pub favorite_sport: String,
    pub email: String,
    pub password: String,
}

/// A partial update: only `Some` fields are merged into the draft.
#[derive(Clone, Debug, Default)]
pub struct DraftPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub goals: Option<Vec<Goal>>,
    pub gender: Option<Gender>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub favorite_sport: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegistrationDraft {
    /// Shallow-merge the patch: absent fields are left unchanged.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.goals {
            self.goals = v;
        }
        if let Some(v) = patch.gender {
            self.gender = v;
        }
        if let Some(v) = patch.age {
            self.age = v;
        }
        if let Some(v) = patch.height {
            self.height = v;
        }
        if let Some(v) = patch.weight {
            self.weight = v;
        }
        if let Some(v) = patch.activity_level {
            self.activity_level = Some(v);
        }
        if let Some(v) = patch.favorite_sport {
            self.favorite_sport = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.password {
            self.password = v;
        }
    }

    /// Replace the draft with the all-empty initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Toggle a goal, preserving the insertion order of the rest.
    pub fn toggle_goal(&mut self, goal: Goal) {
        if let Some(pos) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(pos);
        } else {
            self.goals.push(goal);
        }
    }

    /// The final gate: re-validate every field (including the names, as a
    /// defense against a corrupted draft) and build the register request with
    /// the fixed `client` role. Nothing is sent from here; the caller owns
    /// the collaborator call.
    pub fn finalize(&self, confirm_password: &str) -> Result<RegisterRequest, ValidationFailed> {
        validate::validate_name("first name", &self.first_name)?;
        validate::validate_name("last name", &self.last_name)?;
        let email = validate::validate_email(&self.email)?;
        validate::validate_password(&self.password, confirm_password)?;
        validate::validate_gender(self.gender)?;
        if self.goals.is_empty() {
            return Err(ValidationFailed::MissingField { field: "goals" });
        }
        let Some(activity_level) = self.activity_level else {
            return Err(ValidationFailed::MissingField { field: "activity level" });
        };
        if catalog::sport_by_id(&self.favorite_sport).is_none() {
            return Err(ValidationFailed::MissingField { field: "favorite sport" });
        }
        let age = validate::parse_positive_u32("age", &self.age)?;
        let height_cm = validate::parse_positive_u32("height", &self.height)?;
        let weight_kg = validate::parse_positive_f32("weight", &self.weight)?;

        Ok(RegisterRequest {
            role: Role::Client,
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email,
            password: self.password.clone(),
            age,
            height_cm,
            weight_kg,
            goals: self.goals.clone(),
            gender: self.gender,
            activity_level,
            favorite_sport: self.favorite_sport.clone(),
        })
    }
}

/// Result of a registration call to the companion.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Account created; the collaborator returned the persisted record.
    Created(UserRecord),
    /// The collaborator refused the email (its `UserRecord | null` contract).
    DuplicateEmail,
    /// Transport or server failure, with a displayable reason.
    Failed(String),
}

/// Drive one full submission: final gate, then the collaborator call.
///
/// Validation failures short-circuit before `register` is invoked, so a
/// rejected draft never reaches the network.
///
/// # Errors
///
/// Returns the gate's [`ValidationFailed`] untouched so the credentials page
/// can route name problems back to the names step.
pub async fn submit<F, Fut>(
    draft: &RegistrationDraft,
    confirm_password: &str,
    register: F,
) -> Result<SubmitOutcome, ValidationFailed>
where
    F: FnOnce(RegisterRequest) -> Fut,
    Fut: Future<Output = Result<Option<UserRecord>, String>>,
{
    let request = draft.finalize(confirm_password)?;
    Ok(match register(request).await {
        Ok(Some(user)) => SubmitOutcome::Created(user),
        Ok(None) => SubmitOutcome::DuplicateEmail,
        Err(reason) => SubmitOutcome::Failed(reason),
    })
}

/// Apply a submission outcome: success resets the draft and establishes the
/// session, returning the route to land on; any failure leaves the draft
/// intact and returns the message to surface.
pub fn settle_submission(
    outcome: SubmitOutcome,
    draft: &mut RegistrationDraft,
    auth: &mut AuthState,
) -> Result<&'static str, String> {
    match outcome {
        SubmitOutcome::Created(user) => {
            draft.reset();
            *auth = AuthState::signed_in(user);
            Ok(HOME_ROUTE)
        }
        SubmitOutcome::DuplicateEmail => Err("This email address is already in use.".to_owned()),
        SubmitOutcome::Failed(reason) => Err(format!("Registration failed: {reason}")),
    }
}
