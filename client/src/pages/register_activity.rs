//! Wizard step 5: weekly activity level.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::ActivityLevel;

use crate::state::registration::{DraftPatch, RegistrationDraft};
use crate::state::wizard::{self, WizardStep};

#[component]
pub fn RegisterActivityPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();
    let back = use_navigate();
    let info = RwSignal::new(String::new());

    let on_next = move |_| {
        match wizard::gate(WizardStep::Activity, &draft.get_untracked()) {
            Ok(()) => navigate(WizardStep::Credentials.route(), NavigateOptions::default()),
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 5 of 6"</p>
            <h1>"How active are you?"</h1>
            <div class="activity-list">
                {ActivityLevel::ALL
                    .iter()
                    .map(|&level| {
                        view! {
                            <button
                                type="button"
                                class="activity-row"
                                class=(
                                    "activity-row--selected",
                                    move || draft.get().activity_level == Some(level),
                                )
                                on:click=move |_| {
                                    draft.update(|d| {
                                        d.apply(DraftPatch {
                                            activity_level: Some(level),
                                            ..DraftPatch::default()
                                        });
                                    });
                                }
                            >
                                {level.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="wizard-nav">
                <button
                    type="button"
                    class="wizard-button wizard-button--back"
                    on:click=move |_| back(WizardStep::Sport.route(), NavigateOptions::default())
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
