//! Property Form Component
//!
//! Create/edit form with field-level validation. Validation errors are
//! local and block submission; nothing reaches the network while the
//! draft is invalid.

use leptos::prelude::*;

use crate::models::{Property, PropertyDraft, PropertyPayload};
use crate::validate::{validate, FormErrors};

/// Form for creating or editing a property
#[component]
pub fn PropertyForm(
    /// Existing record to edit; `None` for a new one
    initial: Option<Property>,
    #[prop(into)] on_submit: Callback<PropertyPayload>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let seed = initial
        .as_ref()
        .map(PropertyDraft::from_property)
        .unwrap_or_default();

    let (address, set_address) = signal(seed.address);
    let (price, set_price) = signal(seed.price);
    let (size, set_size) = signal(seed.size);
    let (description, set_description) = signal(seed.description);
    let (errors, set_errors) = signal(FormErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PropertyDraft {
            address: address.get(),
            price: price.get(),
            size: size.get(),
            description: description.get(),
        };
        let errs = validate(&draft);
        let valid = errs.is_empty();
        set_errors.set(errs);
        if valid {
            if let Some(payload) = draft.to_payload() {
                on_submit.run(payload);
            }
        }
    };

    view! {
        <form class="property-form" on:submit=submit>
            <div class="form-row">
                <div class="form-field">
                    <label class="form-label">"📍 Dirección"</label>
                    <input
                        name="address"
                        placeholder="Ej: Calle 123 #45-67"
                        class=move || if errors.get().address.is_some() { "error-input" } else { "" }
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    />
                    {move || errors.get().address.map(|msg| view! {
                        <small class="error-text">{msg}</small>
                    })}
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label class="form-label">"💰 Precio"</label>
                    <input
                        type="number"
                        step="0.01"
                        name="price"
                        placeholder="0.00"
                        class=move || if errors.get().price.is_some() { "error-input" } else { "" }
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                    {move || errors.get().price.map(|msg| view! {
                        <small class="error-text">{msg}</small>
                    })}
                </div>

                <div class="form-field">
                    <label class="form-label">"📐 Tamaño (m²)"</label>
                    <input
                        type="number"
                        name="size"
                        placeholder="0"
                        class=move || if errors.get().size.is_some() { "error-input" } else { "" }
                        prop:value=move || size.get()
                        on:input=move |ev| set_size.set(event_target_value(&ev))
                    />
                    {move || errors.get().size.map(|msg| view! {
                        <small class="error-text">{msg}</small>
                    })}
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label class="form-label">"📄 Descripción"</label>
                    <textarea
                        name="description"
                        placeholder="Descripción adicional de la propiedad..."
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "✕ Cancelar"
                </button>
                <button type="submit" class="btn btn-primary">
                    "✓ Guardar"
                </button>
            </div>
        </form>
    }
}
