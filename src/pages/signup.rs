//! Signup page: mock account creation.
//!
//! The only validation beyond required fields is the password
//! confirmation match; on success the new user is logged straight in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, User};

/// Simulated signup delay.
#[cfg(feature = "hydrate")]
const MOCK_SIGNUP_DELAY_MS: u64 = 1000;

/// Validate and normalize the signup form.
///
/// Passwords are compared verbatim (whitespace is significant); the
/// matched password itself is discarded since nothing stores it.
fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Fill in all fields.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let validated = validate_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        let (name_value, email_value) = match validated {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let user = User {
            name: name_value,
            email: email_value,
            avatar_url: super::PLACEHOLDER_AVATAR.to_owned(),
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(MOCK_SIGNUP_DELAY_MS)).await;
                crate::state::session::login(session, user);
                busy.set(false);
                navigate("/profile", leptos_router::NavigateOptions::default());
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
                <h1 class="auth-card__title">"Create an account"</h1>
                <p class="auth-card__subtitle">"Enter your information to create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login" class="auth-card__link">"Login"</a>
                </p>
            </div>
        </main>
    }
}
