//! Password-reset request page.

use leptos::prelude::*;
use leptos_router::components::A;
use records::validate;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(email_value) = validate::normalize_email(&email.get()) else {
            info.set("Enter a valid email address.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&email_value).await {
                Ok(()) => info.set("If that account exists, reset instructions are on their way.".to_owned()),
                Err(e) => info.set(format!("Request failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset your password"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send reset request"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A attr:class="login-link" href="/auth/login">
                    "Back to sign in"
                </A>
            </div>
        </div>
    }
}
