//! Filter Panel Component
//!
//! Search filters for the property list. Edits are held locally and only
//! applied to the store on submit, which also resets the page index.

use leptos::prelude::*;

use crate::models::FilterCriteria;
use crate::store::use_app_store;

/// Filter panel with address substring and price/size bounds
#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = use_app_store();

    let (address, set_address) = signal(String::new());
    let (min_price, set_min_price) = signal(String::new());
    let (max_price, set_max_price) = signal(String::new());
    let (min_size, set_min_size) = signal(String::new());
    let (max_size, set_max_size) = signal(String::new());

    let apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.write().set_filter(FilterCriteria {
            address: address.get(),
            min_price: min_price.get(),
            max_price: max_price.get(),
            min_size: min_size.get(),
            max_size: max_size.get(),
        });
    };

    let clear = move |_| {
        set_address.set(String::new());
        set_min_price.set(String::new());
        set_max_price.set(String::new());
        set_min_size.set(String::new());
        set_max_size.set(String::new());
        store.write().set_filter(FilterCriteria::default());
    };

    view! {
        <section class="filters-section">
            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">"🔍 Filtros de Búsqueda"</h3>
                </div>
                <div class="card-content">
                    <form on:submit=apply>
                        <div class="filters-grid">
                            <div class="filter-group">
                                <label>"📍 Dirección"</label>
                                <input
                                    placeholder="Buscar por dirección..."
                                    prop:value=move || address.get()
                                    on:input=move |ev| set_address.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="filter-group">
                                <label>"💰 Precio Mínimo"</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    prop:value=move || min_price.get()
                                    on:input=move |ev| set_min_price.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="filter-group">
                                <label>"💰 Precio Máximo"</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="999999.99"
                                    prop:value=move || max_price.get()
                                    on:input=move |ev| set_max_price.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="filter-group">
                                <label>"📐 Tamaño Mín (m²)"</label>
                                <input
                                    type="number"
                                    placeholder="0"
                                    prop:value=move || min_size.get()
                                    on:input=move |ev| set_min_size.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="filter-group">
                                <label>"📐 Tamaño Máx (m²)"</label>
                                <input
                                    type="number"
                                    placeholder="9999"
                                    prop:value=move || max_size.get()
                                    on:input=move |ev| set_max_size.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="filter-actions">
                            <button type="submit" class="btn btn-primary">
                                "🔍 Buscar"
                            </button>
                            <button type="button" class="btn btn-secondary" on:click=clear>
                                "🗑️ Limpiar"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
