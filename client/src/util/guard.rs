//! Session routing: decision core and redirect de-duplication.
//!
//! ARCHITECTURE
//! ============
//! `decide` is a pure function of `(user, loading, route)` so the whole
//! decision table is unit-testable without a navigation stack. The reactive
//! wiring (`install_route_guard`) only feeds it signals and executes the
//! admitted redirects.
//!
//! TRADE-OFFS
//! ==========
//! After the cool-down expires, an identical redirect may be issued again.
//! That re-permits a redirect that was already executed, but it also frees
//! the guard from a stale suppression if the first command never settled.
//! Documented behavior, not a bug.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use records::UserRecord;

use crate::state::auth::AuthState;

/// Where unauthenticated sessions are sent.
pub const LOGIN_ROUTE: &str = "/auth/login";
/// Where authenticated sessions land.
pub const HOME_ROUTE: &str = "/client/home";

/// How long a repeated identical redirect is suppressed, in milliseconds.
/// Tunable; 2 s absorbs the burst of identity updates around a login.
pub const DEFAULT_REDIRECT_COOLDOWN_MS: f64 = 2000.0;

/// Routes reachable without a session. `auth/register` covers every wizard
/// step route beneath it.
const AUTH_ROUTE_PREFIXES: &[&str] = &[
    "auth/login",
    "auth/register",
    "auth/forgot-password",
    "auth/change-password",
];

/// True when the route equals or extends one of the auth-route prefixes,
/// matching on whole segments.
#[must_use]
pub fn is_auth_route(route: &str) -> bool {
    let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    AUTH_ROUTE_PREFIXES.iter().any(|prefix| {
        let prefix_segments: Vec<&str> = prefix.split('/').collect();
        segments.len() >= prefix_segments.len() && segments[..prefix_segments.len()] == prefix_segments[..]
    })
}

/// Outcome of one routing decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    StayOnAuthRoute,
    RedirectToLogin,
    RedirectToHome,
    StayOnProtectedRoute,
}

impl NavigationDecision {
    /// The redirect target, if this decision navigates.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::RedirectToHome => Some(HOME_ROUTE),
            Self::StayOnAuthRoute | Self::StayOnProtectedRoute => None,
        }
    }
}

/// The routing decision table. `None` while the first identity report is
/// still pending: no redirect may be issued from an unresolved session.
#[must_use]
pub fn decide(user: Option<&UserRecord>, loading: bool, route: &str) -> Option<NavigationDecision> {
    if loading {
        return None;
    }
    let on_auth_route = is_auth_route(route);
    Some(match (user.is_some(), on_auth_route) {
        (false, true) => NavigationDecision::StayOnAuthRoute,
        (false, false) => NavigationDecision::RedirectToLogin,
        (true, true) => NavigationDecision::RedirectToHome,
        (true, false) => NavigationDecision::StayOnProtectedRoute,
    })
}

/// De-duplication memory for issued redirects.
///
/// A repeat of the last issued target inside the cool-down window is
/// suppressed; a different target is admitted immediately. The memory clears
/// when the cool-down expires or when the route settles on the last target,
/// so the guard can never suppress forever.
#[derive(Clone, Debug)]
pub struct RedirectGuard {
    cooldown_ms: f64,
    last_target: Option<String>,
    issued_at_ms: Option<f64>,
}

impl RedirectGuard {
    #[must_use]
    pub fn new(cooldown_ms: f64) -> Self {
        Self { cooldown_ms, last_target: None, issued_at_ms: None }
    }

    /// Admit or suppress a redirect to `target` at `now_ms`. Admitting
    /// records the target and timestamp as the in-flight redirect.
    pub fn admit(&mut self, target: &str, now_ms: f64) -> bool {
        if let (Some(last), Some(issued_at)) = (self.last_target.as_deref(), self.issued_at_ms) {
            if last == target && now_ms - issued_at < self.cooldown_ms {
                return false;
            }
        }
        self.last_target = Some(target.to_owned());
        self.issued_at_ms = Some(now_ms);
        true
    }

    /// Clear the memory once the current route has caught up with the last
    /// issued redirect.
    pub fn settle(&mut self, current_route: &str) {
        if self.last_target.as_deref() == Some(current_route) {
            self.last_target = None;
            self.issued_at_ms = None;
        }
    }
}

impl Default for RedirectGuard {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_COOLDOWN_MS)
    }
}

/// Wall clock in milliseconds. Zero outside the browser, which only disables
/// de-duplication aging, never correctness.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Wire the decision core into a reactive effect: on every auth or location
/// change, compute the decision and navigate unless de-duplicated.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = StoredValue::new(RedirectGuard::default());
    Effect::new(move || {
        let state = auth.get();
        let route = pathname.get();
        let Some(decision) = decide(state.user.as_ref(), state.loading, &route) else {
            return;
        };
        guard.update_value(|g| {
            g.settle(&route);
            if let Some(target) = decision.target() {
                if g.admit(target, now_ms()) {
                    navigate(target, NavigateOptions::default());
                } else {
                    #[cfg(feature = "hydrate")]
                    log::debug!("redirect to {target} suppressed inside cool-down");
                }
            }
        });
    });
}
