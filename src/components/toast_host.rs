//! Fixed toast stack rendering the notification queue.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|item| {
                        let class = match item.variant {
                            ToastVariant::Info => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        let id = item.id;
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                <p class="toast__title">{item.title}</p>
                                <p class="toast__message">{item.message}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
