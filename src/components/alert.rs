//! Alert Banner Component
//!
//! Dismissible success/error banner. Never auto-expires.

use leptos::prelude::*;

/// Dismissible alert banner
///
/// # Arguments
/// * `kind` - CSS variant suffix ("success" or "error")
/// * `icon` - leading icon glyph
/// * `text` - banner text
/// * `on_dismiss` - callback when the user closes the banner
#[component]
pub fn Alert(
    #[prop(into)] kind: String,
    #[prop(into)] icon: String,
    #[prop(into)] text: String,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", kind)>
            <span class="alert-icon">{icon}</span>
            {text}
            <button class="alert-close" on:click=move |_| on_dismiss.run(())>
                "×"
            </button>
        </div>
    }
}
