//! Loading indicator and dismissable error banner.

use leptos::prelude::*;

/// Neutral spinner shown while a session check or fetch is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}

/// Error alert with a close button.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <span class="alert__message">{move || message.get()}</span>
            <button
                class="alert__close"
                type="button"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "\u{00d7}"
            </button>
        </div>
    }
}
