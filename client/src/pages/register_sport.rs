//! Wizard step 4: favorite sport, picked from the static catalog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::catalog;

use crate::state::registration::{DraftPatch, RegistrationDraft};
use crate::state::wizard::{self, WizardStep};

#[component]
pub fn RegisterSportPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<RegistrationDraft>>();
    let navigate = use_navigate();
    let back = use_navigate();
    let info = RwSignal::new(String::new());

    let on_next = move |_| {
        match wizard::gate(WizardStep::Sport, &draft.get_untracked()) {
            Ok(()) => navigate(WizardStep::Activity.route(), NavigateOptions::default()),
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="wizard-page">
            <p class="wizard-progress">"Step 4 of 6"</p>
            <h1>"Your favorite sport"</h1>
            {catalog::sports_by_category()
                .into_iter()
                .map(|(category, sports)| {
                    view! {
                        <section class="sport-section">
                            <h2>{category.label()}</h2>
                            <div class="sport-grid">
                                {sports
                                    .into_iter()
                                    .map(|sport| {
                                        view! {
                                            <button
                                                type="button"
                                                class="sport-chip"
                                                class=(
                                                    "sport-chip--selected",
                                                    move || draft.get().favorite_sport == sport.id,
                                                )
                                                on:click=move |_| {
                                                    draft.update(|d| {
                                                        d.apply(DraftPatch {
                                                            favorite_sport: Some(sport.id.to_owned()),
                                                            ..DraftPatch::default()
                                                        });
                                                    });
                                                }
                                            >
                                                <span class="sport-chip__emoji">{sport.emoji}</span>
                                                {sport.name}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
            <div class="wizard-nav">
                <button
                    type="button"
                    class="wizard-button wizard-button--back"
                    on:click=move |_| back(WizardStep::Profile.route(), NavigateOptions::default())
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
