//! Password-change page for a signed-in user.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use records::validate;

/// Require the current password and a valid, confirmed new one.
pub(crate) fn validate_change_input(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(String, String), String> {
    if current.trim().is_empty() {
        return Err("Enter your current password.".to_owned());
    }
    match validate::validate_password(new_password, confirm) {
        Ok(()) => Ok((current.to_owned(), new_password.to_owned())),
        Err(e) => Err(e.to_string()),
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current_value, new_value) =
            match validate_change_input(&current.get(), &new_password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message);
                    return;
                }
            };
        busy.set(true);
        info.set("Updating...".to_owned());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value);
            busy.set(false);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&current_value, &new_value).await {
                Ok(true) => {
                    info.set("Password updated.".to_owned());
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Ok(false) => info.set("Current password is incorrect.".to_owned()),
                Err(e) => info.set(format!("Update failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Change password"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Update password"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A attr:class="login-link" href="/client/home">
                    "Back to home"
                </A>
            </div>
        </div>
    }
}
