//! Auth-session state for the current app user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate redirects and
//! identity-dependent rendering. The companion server owns the true session;
//! this is the client's observed copy.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::UserRecord;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only until the identity collaborator's first report; an
/// error while resolving collapses to [`AuthState::signed_out`], never a
/// stuck loading state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first identity report arrives.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Terminal signed-out state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Terminal signed-in state.
    #[must_use]
    pub fn signed_in(user: UserRecord) -> Self {
        Self { user: Some(user), loading: false }
    }
}
