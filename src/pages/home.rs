//! Home page: the quote generator.

use leptos::prelude::*;

use crate::components::quote_generator::QuoteGenerator;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <div class="home-page__inner">
                <h1 class="home-page__title">"Daily Inspiration"</h1>
                <QuoteGenerator/>
            </div>
        </main>
    }
}
