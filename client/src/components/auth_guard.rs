//! Session-routing guard around the navigable app tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. While the first identity report is pending it blocks
//! the tree behind a loading overlay and issues no redirect; afterwards the
//! decision core in `util::guard` drives all session redirects. Leaving the
//! registration wizard also clears the draft here, so an abandoned sign-up
//! never leaks stale data into a later attempt.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::registration::RegistrationDraft;
use crate::state::wizard;
use crate::util::guard::install_route_guard;

#[component]
pub fn AuthGuard(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let location = use_location();
    let navigate = use_navigate();

    install_route_guard(auth, location.pathname, navigate);

    // Wizard abandonment: moving from a wizard route to any non-wizard route
    // resets the draft.
    let prev_route = StoredValue::new(String::new());
    Effect::new(move || {
        let route = location.pathname.get();
        let was_wizard = wizard::is_wizard_route(&prev_route.get_value());
        if was_wizard && !wizard::is_wizard_route(&route) {
            draft.update(RegistrationDraft::reset);
        }
        prev_route.set_value(route);
    });

    view! {
        <Show when=move || auth.get().loading>
            <div class="auth-loading">
                <p>"Resolving your session..."</p>
            </div>
        </Show>
        <div class="app-shell" class=("app-shell--resolving", move || auth.get().loading)>
            {children()}
        </div>
    }
}
