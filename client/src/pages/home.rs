//! Authenticated home: profile summary and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;
use records::catalog;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Best-effort server-side revoke; the guard reacts to the state
            // change either way and routes back to login.
            let _ = crate::net::api::logout().await;
            auth.set(AuthState::signed_out());
            busy.set(false);
        });
    };

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.full_name()))
    };

    let sport_line = move || {
        auth.get().user.map_or_else(String::new, |u| {
            catalog::sport_by_id(&u.favorite_sport)
                .map_or_else(|| u.favorite_sport.clone(), |s| format!("{} {}", s.emoji, s.name))
        })
    };

    let goal_lines = move || {
        auth.get().user.map_or_else(Vec::new, |u| {
            u.goals.iter().map(|g| g.label().to_owned()).collect::<Vec<_>>()
        })
    };

    let activity_line = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| u.activity_level.label().to_owned())
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <section class="home-card">
                <h2>"Your goals"</h2>
                <ul class="home-goal-list">
                    {move || {
                        goal_lines()
                            .into_iter()
                            .map(|label| view! { <li>{label}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>
            <section class="home-card">
                <h2>"Favorite sport"</h2>
                <p>{sport_line}</p>
            </section>
            <section class="home-card">
                <h2>"Activity level"</h2>
                <p>{activity_line}</p>
            </section>
            <div class="home-actions">
                <A attr:class="home-link" href="/auth/change-password">
                    "Change password"
                </A>
                <button class="home-button" on:click=on_logout disabled=move || busy.get()>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
