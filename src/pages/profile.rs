//! Profile page: saved quotes, account summary, and settings tabs.
//! Redirects to `/login` once the session has restored unauthenticated.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::saved_quotes::SavedQuotesList;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dark_mode;

/// Tabs available on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Saved,
    Account,
    Settings,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let active_tab = RwSignal::new(ProfileTab::default());
    let dark = RwSignal::new(false);
    Effect::new(move || {
        dark.set(dark_mode::read_preference());
    });

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

    let tab_button = move |tab: ProfileTab, label: &'static str| {
        view! {
            <button
                class="profile-tabs__trigger"
                class=("profile-tabs__trigger--active", move || active_tab.get() == tab)
                on:click=move |_| active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <main class="profile-page">
            <Show
                when=move || !session.get().loading && session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <p class="profile-page__pending">
                            {move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}
                        </p>
                    }
                }
            >
                <div class="profile-card">
                    <header class="profile-card__header">
                        <img class="profile-card__avatar" src=avatar_url alt=user_name/>
                        <div>
                            <h1 class="profile-card__name">{user_name}</h1>
                            <p class="profile-card__email">{user_email}</p>
                        </div>
                    </header>

                    <div class="profile-tabs">
                        {tab_button(ProfileTab::Saved, "Saved Quotes")}
                        {tab_button(ProfileTab::Account, "Account")}
                        {tab_button(ProfileTab::Settings, "Settings")}
                    </div>

                    <div class="profile-tabs__content">
                        <Show when=move || active_tab.get() == ProfileTab::Saved>
                            <SavedQuotesList/>
                        </Show>
                        <Show when=move || active_tab.get() == ProfileTab::Account>
                            <section class="profile-section">
                                <h2 class="profile-section__title">"Account Information"</h2>
                                <p class="profile-section__subtitle">"Manage your account details"</p>
                                <dl class="profile-section__grid">
                                    <div>
                                        <dt>"Name"</dt>
                                        <dd>{user_name}</dd>
                                    </div>
                                    <div>
                                        <dt>"Email"</dt>
                                        <dd>{user_email}</dd>
                                    </div>
                                    <div>
                                        <dt>"Member Since"</dt>
                                        <dd>"March 2023"</dd>
                                    </div>
                                </dl>
                            </section>
                        </Show>
                        <Show when=move || active_tab.get() == ProfileTab::Settings>
                            <section class="profile-section">
                                <h2 class="profile-section__title">"Settings"</h2>
                                <p class="profile-section__subtitle">"Manage your preferences"</p>
                                <div class="profile-section__row">
                                    <div>
                                        <p class="profile-section__row-title">"Email Notifications"</p>
                                        <p class="profile-section__row-hint">"Receive daily quote emails"</p>
                                    </div>
                                    <button class="btn">"Enable"</button>
                                </div>
                                <div class="profile-section__row">
                                    <div>
                                        <p class="profile-section__row-title">"Dark Mode"</p>
                                        <p class="profile-section__row-hint">"Toggle dark mode"</p>
                                    </div>
                                    <button
                                        class="btn"
                                        on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
                                    >
                                        {move || if dark.get() { "Light" } else { "Dark" }}
                                    </button>
                                </div>
                            </section>
                        </Show>
                    </div>
                </div>
            </Show>
        </main>
    }
}
