//! Property Table Component
//!
//! Paginated table of properties with per-row edit and delete actions.

use leptos::prelude::*;

use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::models::Property;
use crate::store::{use_app_store, ListStateStoreFields};

/// Format a price the way the backend's locale writes it: thousands
/// grouped with '.', cents after ',' only when present.
fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if cents < 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{:02}", sign, grouped, frac)
    }
}

/// Format a size without a trailing ".0" for whole numbers
fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{}", size as i64)
    } else {
        size.to_string()
    }
}

/// Property list table with empty state
#[component]
pub fn PropertyTable(
    #[prop(into)] on_edit: Callback<Property>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || store.items().read().is_empty() && !store.loading().get();

    view! {
        <section class="properties-section">
            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">"📋 Lista de Propiedades"</h3>
                    <Show when=move || store.loading().get()>
                        <div class="loading">"⏳ Cargando..."</div>
                    </Show>
                </div>
                <div class="card-content">
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                <div class="empty-icon">"🏘️"</div>
                                <h4>"No hay propiedades"</h4>
                                <p>"Comienza agregando tu primera propiedad"</p>
                            </div>
                        }
                    >
                        <div class="table-container">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"📍 Dirección"</th>
                                        <th>"💰 Precio"</th>
                                        <th>"📐 Tamaño"</th>
                                        <th>"📄 Descripción"</th>
                                        <th>"⚙️ Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || store.items().get()
                                        key=|p| p.id
                                        children=move |property| {
                                            let id = property.id;
                                            let edit_target = property.clone();
                                            view! {
                                                <tr class="table-row">
                                                    <td class="id-cell">{id}</td>
                                                    <td class="address-cell">{property.address.clone()}</td>
                                                    <td class="price-cell">{format!("${}", format_price(property.price))}</td>
                                                    <td class="size-cell">{format!("{} m²", format_size(property.size))}</td>
                                                    <td class="description-cell">
                                                        {property.description.clone().map(|d| view! { <span>{d}</span> }.into_any())
                                                            .unwrap_or_else(|| view! { <span class="no-description">"Sin descripción"</span> }.into_any())}
                                                    </td>
                                                    <td class="actions-cell">
                                                        <button
                                                            class="btn btn-sm btn-primary"
                                                            title="Editar propiedad"
                                                            on:click=move |_| on_edit.run(edit_target.clone())
                                                        >
                                                            "✏️"
                                                        </button>
                                                        <DeleteConfirmButton
                                                            button_class="btn btn-sm btn-danger"
                                                            on_confirm=move |_| on_delete.run(id)
                                                        />
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_thousands_are_grouped() {
        assert_eq!(format_price(1500000.0), "1.500.000");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(0.5), "0,50");
    }

    #[test]
    fn price_cents_only_when_present() {
        assert_eq!(format_price(120.5), "120,50");
        assert_eq!(format_price(120.0), "120");
    }

    #[test]
    fn size_drops_trailing_zero() {
        assert_eq!(format_size(85.0), "85");
        assert_eq!(format_size(85.5), "85.5");
    }
}
