//! The quote card: random display, save toggle, copy, and share links.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the home-page centerpiece. The "New Quote" flow models a
//! network fetch that does not exist: a short client-side delay before the
//! next quote is shown. Delayed work carries a liveness flag cleared on
//! unmount so a timer that outlives the card never touches its state.

use leptos::prelude::*;

use crate::catalog::{self, Quote};
use crate::state::saved::{self, SavedQuotesState, ToggleOutcome};
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastState};
use crate::util::share;

/// Artificial delay before a new quote is shown.
#[cfg(feature = "hydrate")]
const QUOTE_FETCH_DELAY_MS: u64 = 600;

/// How long the copy button shows its confirmation state.
#[cfg(feature = "hydrate")]
const COPY_FEEDBACK_MS: u64 = 2000;

#[component]
pub fn QuoteGenerator() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let saved = expect_context::<RwSignal<SavedQuotesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // SSR renders a stable first quote; the client shuffles after hydration.
    let current = RwSignal::new(&catalog::all()[0]);
    let is_loading = RwSignal::new(false);
    let animation_key = RwSignal::new(0_u64);
    let copied = RwSignal::new(false);
    let share_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        Effect::new(move || {
            current.set(catalog::pick_random(None, catalog::js_random_index));
        });
    }

    #[cfg(feature = "hydrate")]
    let alive_fetch = alive.clone();
    let on_new_quote = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        is_loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let alive = alive_fetch.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(QUOTE_FETCH_DELAY_MS)).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                let exclude = current.get_untracked().id;
                current.set(catalog::pick_random(Some(exclude), catalog::js_random_index));
                animation_key.update(|key| *key += 1);
                is_loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            is_loading.set(false);
        }
    };

    let on_save = move |_| {
        let quote_id = current.get_untracked().id;
        let authenticated = session.get_untracked().is_authenticated();
        let outcome = saved
            .try_update(|s| s.toggle(quote_id, authenticated))
            .unwrap_or(ToggleOutcome::NeedsAuth);
        match outcome {
            ToggleOutcome::NeedsAuth => {
                toast::show_destructive(toasts, "Authentication required", "Please login to save quotes");
            }
            ToggleOutcome::Saved => {
                saved::persist(saved);
                toast::show(toasts, "Quote saved", "Quote added to your saved collection");
            }
            ToggleOutcome::Removed => {
                saved::persist(saved);
                toast::show(toasts, "Quote removed", "Quote removed from your saved collection");
            }
        }
    };

    #[cfg(feature = "hydrate")]
    let alive_copy = alive.clone();
    let on_copy = move |_| {
        share_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let quote = current.get_untracked();
            let text = share::format_quote(quote.text, quote.author);
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&text);
            }
            copied.set(true);
            toast::show(toasts, "Copied to clipboard", "Quote copied to clipboard");
            let alive = alive_copy.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(COPY_FEEDBACK_MS)).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    copied.set(false);
                }
            });
        }
    };

    let on_share_twitter = move |_| {
        share_open.set(false);
        let quote = current.get_untracked();
        open_in_new_tab(&share::tweet_url(&share::format_quote(quote.text, quote.author)));
    };
    let on_share_facebook = move |_| {
        share_open.set(false);
        open_in_new_tab(&share::facebook_share_url(&current_page_url()));
    };
    let on_share_linkedin = move |_| {
        share_open.set(false);
        let quote = current.get_untracked();
        open_in_new_tab(&share::linkedin_share_url(
            &current_page_url(),
            "Inspirational Quote",
            &share::format_quote(quote.text, quote.author),
        ));
    };

    let is_saved = move || saved.get().is_saved(current.get().id);

    view! {
        <div class="quote-card">
            {move || {
                // Keyed so each new quote remounts the body and replays the
                // entrance animation.
                let _ = animation_key.get();
                let quote: &'static Quote = current.get();
                view! {
                    <div class="quote-card__body">
                        <blockquote class="quote-card__text">"\"" {quote.text} "\""</blockquote>
                        <p class="quote-card__author">"\u{2014} " {quote.author}</p>
                    </div>
                }
            }}

            <div class="quote-card__actions">
                <button
                    class="btn btn--primary quote-card__new"
                    on:click=on_new_quote
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Loading..." } else { "New Quote" }}
                </button>

                <button
                    class="btn quote-card__save"
                    class=("quote-card__save--saved", is_saved)
                    on:click=on_save
                    title=move || if is_saved() { "Unsave" } else { "Save" }
                >
                    {move || if is_saved() { "\u{2665}" } else { "\u{2661}" }}
                </button>

                <div class="quote-card__share">
                    <button
                        class="btn quote-card__share-trigger"
                        on:click=move |_| share_open.update(|open| *open = !*open)
                        title="Share"
                    >
                        "Share"
                    </button>
                    <Show when=move || share_open.get()>
                        <div class="quote-card__share-menu">
                            <button class="quote-card__share-item" on:click=on_copy>
                                {move || if copied.get() { "Copied!" } else { "Copy to clipboard" }}
                            </button>
                            <button class="quote-card__share-item" on:click=on_share_twitter>
                                "Share on Twitter"
                            </button>
                            <button class="quote-card__share-item" on:click=on_share_facebook>
                                "Share on Facebook"
                            </button>
                            <button class="quote-card__share-item" on:click=on_share_linkedin>
                                "Share on LinkedIn"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Open a share URL in a new tab. No response is consumed.
fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Current page URL for link-based share targets.
fn current_page_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
