//! Wizard step 1: first and last name.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::registration::{DraftPatch, RegistrationDraft};
use crate::state::wizard::{self, WizardStep};

#[component]
pub fn RegisterNamesPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();

    // Seed inputs from the draft so backward navigation shows prior entries.
    let initial = draft.get_untracked();
    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let info = RwSignal::new(String::new());

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.update(|d| {
            d.apply(DraftPatch {
                first_name: Some(first_name.get()),
                last_name: Some(last_name.get()),
                ..DraftPatch::default()
            });
        });
        match wizard::gate(WizardStep::Names, &draft.get_untracked()) {
            Ok(()) => navigate(WizardStep::Goals.route(), NavigateOptions::default()),
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 1 of 6"</p>
            <h1>"What should we call you?"</h1>
            <form class="wizard-form" on:submit=on_next>
                <input
                    class="wizard-input"
                    type="text"
                    placeholder="First name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="wizard-input"
                    type="text"
                    placeholder="Last name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                <button class="wizard-button" type="submit">"Next"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="wizard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
