//! Application shell and composition root.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the three store signals (session, saved quotes, toasts),
//! provides them via context, and runs the one-shot client restore pass.
//! Components and pages hold only the signals; there is no ambient
//! module-level state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::state::saved::{self, SavedQuotesState};
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::dark_mode;

/// HTML document shell for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let saved = RwSignal::new(SavedQuotesState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(saved);
    provide_context(toasts);

    // Client-side rehydration from localStorage. Reads nothing reactive,
    // so it runs once after hydration; on the server it never runs and
    // the session stays in its loading state.
    Effect::new(move || {
        session::restore(session);
        saved::restore(saved);
        dark_mode::apply(dark_mode::read_preference());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/quotegen.css"/>
        <Title text="QuoteGen"/>
        <Router>
            <Navbar/>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/profile") view=ProfilePage/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
