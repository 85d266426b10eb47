//! Login page: email + password against the mock session.
//!
//! There is no backend to check credentials against; a short simulated
//! wait precedes the session write so the flow feels like a real login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, User};

/// Simulated authentication delay.
#[cfg(feature = "hydrate")]
const MOCK_AUTH_DELAY_MS: u64 = 1000;

/// Validate and normalize the login form. Both fields are required.
fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Display name for a mock account: the email local part, capitalized.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, _password) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let user = User {
            name: display_name_from_email(&email_value),
            email: email_value,
            avatar_url: super::PLACEHOLDER_AVATAR.to_owned(),
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(MOCK_AUTH_DELAY_MS)).await;
                crate::state::session::login(session, user);
                busy.set(false);
                navigate("/", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, &navigate, session);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Enter your email and password to login"</p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/signup" class="auth-card__link">"Sign up"</a>
                </p>
            </div>
        </main>
    }
}
