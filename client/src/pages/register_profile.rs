//! Wizard step 3: gender, age, height, weight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::Gender;

use crate::state::registration::{DraftPatch, RegistrationDraft};
use crate::state::wizard::{self, WizardStep};

#[component]
pub fn RegisterProfilePage() -> impl IntoView {
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();
    let back = use_navigate();

    let initial = draft.get_untracked();
    let age = RwSignal::new(initial.age);
    let height = RwSignal::new(initial.height);
    let weight = RwSignal::new(initial.weight);
    let info = RwSignal::new(String::new());

    let select_gender = move |gender: Gender| {
        draft.update(|d| d.apply(DraftPatch { gender: Some(gender), ..DraftPatch::default() }));
    };

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.update(|d| {
            d.apply(DraftPatch {
                age: Some(age.get()),
                height: Some(height.get()),
                weight: Some(weight.get()),
                ..DraftPatch::default()
            });
        });
        match wizard::gate(WizardStep::Profile, &draft.get_untracked()) {
            Ok(()) => navigate(WizardStep::Sport.route(), NavigateOptions::default()),
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 3 of 6"</p>
            <h1>"Tell us about yourself"</h1>
            <div class="gender-row">
                <button
                    type="button"
                    class="gender-chip"
                    class=("gender-chip--selected", move || draft.get().gender == Gender::Male)
                    on:click=move |_| select_gender(Gender::Male)
                >
                    "Male"
                </button>
                <button
                    type="button"
                    class="gender-chip"
                    class=("gender-chip--selected", move || draft.get().gender == Gender::Female)
                    on:click=move |_| select_gender(Gender::Female)
                >
                    "Female"
                </button>
            </div>
            <form class="wizard-form" on:submit=on_next>
                <input
                    class="wizard-input"
                    type="text"
                    inputmode="numeric"
                    placeholder="Age"
                    prop:value=move || age.get()
                    on:input=move |ev| age.set(event_target_value(&ev))
                />
                <input
                    class="wizard-input"
                    type="text"
                    inputmode="numeric"
                    placeholder="Height (cm)"
                    prop:value=move || height.get()
                    on:input=move |ev| height.set(event_target_value(&ev))
                />
                <input
                    class="wizard-input"
                    type="text"
                    inputmode="decimal"
                    placeholder="Weight (kg)"
                    prop:value=move || weight.get()
                    on:input=move |ev| weight.set(event_target_value(&ev))
                />
                <div class="wizard-nav">
                    <button
                        type="button"
                        class="wizard-button wizard-button--back"
                        on:click=move |_| back(WizardStep::Goals.route(), NavigateOptions::default())
                    >
                        "Back"
                    </button>
                    <button class="wizard-button" type="submit">"Next"</button>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="wizard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
