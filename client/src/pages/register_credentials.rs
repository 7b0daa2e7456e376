//! Wizard step 6: credentials and final submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only step that talks to the companion. The final gate lives
//! in `RegistrationDraft::finalize`; here we merge the last fields, run the
//! submission, and settle the outcome: success establishes the session and
//! resets the draft, any rejection leaves the draft intact for correction.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::registration::{DraftPatch, RegistrationDraft};
use crate::state::wizard::WizardStep;

#[component]
pub fn RegisterCredentialsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();
    let back = use_navigate();

    let initial = draft.get_untracked();
    let email = RwSignal::new(initial.email);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        draft.update(|d| {
            d.apply(DraftPatch {
                email: Some(email.get()),
                password: Some(password.get()),
                ..DraftPatch::default()
            });
        });
        let confirm_value = confirm.get();
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (confirm_value, auth, navigate.clone());
            busy.set(false);
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::registration::{settle_submission, submit};

                let snapshot = draft.get_untracked();
                match submit(&snapshot, &confirm_value, crate::net::api::register).await {
                    Ok(outcome) => {
                        let mut draft_value = draft.get_untracked();
                        let mut auth_value = auth.get_untracked();
                        match settle_submission(outcome, &mut draft_value, &mut auth_value) {
                            Ok(target) => {
                                draft.set(draft_value);
                                auth.set(auth_value);
                                navigate(target, NavigateOptions::default());
                            }
                            Err(message) => {
                                info.set(message);
                                busy.set(false);
                            }
                        }
                    }
                    // A corrupted name slipped past the earlier gate: send the
                    // user back to fix it instead of failing silently.
                    Err(e) if e.concerns_names() => {
                        info.set(e.to_string());
                        busy.set(false);
                        navigate(WizardStep::Names.route(), NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 6 of 6"</p>
            <h1>"Create your account"</h1>
            <form class="wizard-form" on:submit=on_submit>
                <input
                    class="wizard-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="wizard-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="wizard-input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <div class="wizard-nav">
                    <button
                        type="button"
                        class="wizard-button wizard-button--back"
                        on:click=move |_| back(WizardStep::Activity.route(), NavigateOptions::default())
                    >
                        "Back"
                    </button>
                    <button class="wizard-button" type="submit" disabled=move || busy.get()>
                        "Finish"
                    </button>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="wizard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
