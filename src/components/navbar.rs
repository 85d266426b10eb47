//! Top navigation bar with auth-dependent links and the account menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{self, SessionState};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());
    let menu_open = RwSignal::new(false);

    let is_active = move |path: &str| location.pathname.get() == path;

    let on_logout = move |_| {
        menu_open.set(false);
        session::logout(session);
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    };

    let user_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };
    let user_email = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.email.clone())
    };
    let avatar_url = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.avatar_url.clone())
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                <span class="navbar__brand-mark">"\u{201C}"</span>
                "QuoteGen"
            </a>

            <nav class="navbar__links">
                <a href="/" class="navbar__link" class=("navbar__link--active", move || is_active("/"))>
                    "Home"
                </a>
                <Show when=move || !session.get().is_authenticated()>
                    <a
                        href="/login"
                        class="navbar__link"
                        class=("navbar__link--active", move || is_active("/login"))
                    >
                        "Login"
                    </a>
                    <a
                        href="/signup"
                        class="navbar__link"
                        class=("navbar__link--active", move || is_active("/signup"))
                    >
                        "Sign Up"
                    </a>
                </Show>
            </nav>

            <Show when=move || session.get().is_authenticated()>
                <div class="navbar__account">
                    <button
                        class="navbar__avatar-button"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        title=user_name
                    >
                        <img class="navbar__avatar" src=avatar_url alt=user_name/>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="navbar__menu">
                            <div class="navbar__menu-identity">
                                <p class="navbar__menu-name">{user_name}</p>
                                <p class="navbar__menu-email">{user_email}</p>
                            </div>
                            <a
                                href="/profile"
                                class="navbar__menu-item"
                                on:click=move |_| menu_open.set(false)
                            >
                                "Profile"
                            </a>
                            <button class="navbar__menu-item navbar__menu-item--danger" on:click=on_logout>
                                "Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
