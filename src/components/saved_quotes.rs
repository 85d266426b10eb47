//! Saved-quotes list with per-entry removal.

use leptos::prelude::*;

use crate::state::saved::{self, SavedQuotesState};
use crate::state::toast::{self, ToastState};

#[component]
pub fn SavedQuotesList() -> impl IntoView {
    let saved = expect_context::<RwSignal<SavedQuotesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_remove = move |id: &'static str| {
        saved.update(|s| s.remove(id));
        saved::persist(saved);
        toast::show(toasts, "Quote removed", "Quote removed from your saved collection");
    };

    view! {
        <Show
            when=move || !saved.get().saved_quotes().is_empty()
            fallback=|| {
                view! {
                    <div class="saved-empty">
                        <p class="saved-empty__text">"You haven't saved any quotes yet."</p>
                        <a href="/" class="btn saved-empty__link">
                            "Go find some quotes"
                        </a>
                    </div>
                }
            }
        >
            <div class="saved-list">
                {move || {
                    saved
                        .get()
                        .saved_quotes()
                        .into_iter()
                        .map(|quote| {
                            view! {
                                <div class="saved-card">
                                    <div class="saved-card__content">
                                        <blockquote class="saved-card__text">
                                            "\"" {quote.text} "\""
                                        </blockquote>
                                        <p class="saved-card__author">"\u{2014} " {quote.author}</p>
                                    </div>
                                    <button
                                        class="saved-card__remove"
                                        on:click=move |_| on_remove(quote.id)
                                        title="Remove"
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
