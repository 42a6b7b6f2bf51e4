//! Pagination Component
//!
//! Prev/next controls clamped to the backend's page count, plus the
//! page-size selector. Changing the page size resets to the first page.

use leptos::prelude::*;

use crate::state::PAGE_SIZES;
use crate::store::{use_app_store, ListStateStoreFields};

/// Pagination bar
#[component]
pub fn Pagination() -> impl IntoView {
    let store = use_app_store();

    let page = move || store.page().get();
    let total_pages = move || store.total_pages().get();
    let at_last = move || page() + 1 >= total_pages();

    let select_size = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            store.write().set_page_size(size);
        }
    };

    view! {
        <section class="pagination-section">
            <div class="pagination">
                <button
                    class="btn btn-secondary"
                    disabled=move || page() == 0
                    on:click=move |_| store.write().prev_page()
                >
                    "← Anterior"
                </button>

                <div class="pagination-info">
                    <span>
                        "Página " <strong>{move || page() + 1}</strong>
                        " de " <strong>{total_pages}</strong>
                    </span>
                </div>

                <button
                    class="btn btn-secondary"
                    disabled=at_last
                    on:click=move |_| store.write().next_page()
                >
                    "Siguiente →"
                </button>

                <select
                    class="page-size-select"
                    prop:value=move || store.size().get().to_string()
                    on:change=select_size
                >
                    {PAGE_SIZES.iter().map(|s| view! {
                        <option value=s.to_string()>{format!("{} por página", s)}</option>
                    }).collect_view()}
                </select>
            </div>
        </section>
    }
}
