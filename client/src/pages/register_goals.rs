//! Wizard step 2: coaching goals.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::Goal;

use crate::state::registration::RegistrationDraft;
use crate::state::wizard::{self, WizardStep};

#[component]
pub fn RegisterGoalsPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();
    let back = use_navigate();
    let info = RwSignal::new(String::new());

    let on_next = move |_| {
        match wizard::gate(WizardStep::Goals, &draft.get_untracked()) {
            Ok(()) => navigate(WizardStep::Profile.route(), NavigateOptions::default()),
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 2 of 6"</p>
            <h1>"What are you here for?"</h1>
            <p class="wizard-hint">"Pick one or more goals."</p>
            <div class="goal-grid">
                {Goal::ALL
                    .iter()
                    .map(|&goal| {
                        view! {
                            <button
                                type="button"
                                class="goal-chip"
                                class=("goal-chip--selected", move || draft.get().goals.contains(&goal))
                                on:click=move |_| draft.update(|d| d.toggle_goal(goal))
                            >
                                {goal.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="wizard-nav">
                <button
                    type="button"
                    class="wizard-button wizard-button--back"
                    on:click=move |_| back(WizardStep::Names.route(), NavigateOptions::default())
                >
                    "Back"
                </button>
                <button type="button" class="wizard-button" on:click=on_next>"Next"</button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="wizard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
