//! Property Manager App
//!
//! Main application component. The query string derived from
//! filter/page/size is the change-detection key for list reloads; every
//! successful mutation bumps the reload trigger so the displayed page is
//! always a projection of the last server response.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Alert, EditTarget, FilterPanel, Pagination, PropertyForm, PropertyTable};
use crate::context::AppContext;
use crate::models::PropertyPayload;
use crate::state::ListState;
use crate::store::ListStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ListState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let (editing, set_editing) = signal::<Option<EditTarget>>(None);

    // Canonical query key; only a changed key (or the reload trigger)
    // issues a new request.
    let query_key = Memo::new(move |_| store.read().query_string());

    // Load the list whenever the query key or the reload trigger changes.
    // Responses carry the sequence number handed out at issue time; the
    // reducer discards any that are no longer the latest.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let key = query_key.get();
        let seq = store.write().begin_load();
        web_sys::console::log_1(&format!("[APP] load #{} ?{}", seq, key).into());
        spawn_local(async move {
            let result = api::fetch_page(&key).await;
            store.write().finish_load(seq, result);
        });
    });

    // Create or update depending on the open editing target. On failure
    // the editor stays open so the user can retry.
    let on_submit = Callback::new(move |payload: PropertyPayload| {
        let target = editing.get_untracked();
        spawn_local(async move {
            let result = match &target {
                Some(EditTarget::Existing(p)) => api::update_property(p.id, &payload)
                    .await
                    .map(|_| "Propiedad actualizada correctamente"),
                _ => api::create_property(&payload)
                    .await
                    .map(|_| "Propiedad creada correctamente"),
            };
            match result {
                Ok(message) => {
                    set_editing.set(None);
                    store.write().set_message(message);
                    ctx.reload();
                }
                Err(err) => store.write().set_error(err),
            }
        });
    });

    // Deletion is confirmed inline by the table's DeleteConfirmButton.
    let on_delete = Callback::new(move |id: u64| {
        spawn_local(async move {
            match api::delete_property(id).await {
                Ok(()) => {
                    store.write().set_message("Propiedad eliminada correctamente");
                    ctx.reload();
                }
                Err(err) => store.write().set_error(err),
            }
        });
    });

    let on_edit = Callback::new(move |property| {
        set_editing.set(Some(EditTarget::Existing(property)));
    });

    view! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1 class="title">"🏠 " <span>"Sistema de Gestión de Propiedades"</span></h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    {move || store.message().get().map(|text| view! {
                        <Alert
                            kind="success"
                            icon="✅"
                            text=text
                            on_dismiss=move |_| store.write().clear_message()
                        />
                    })}

                    {move || store.error().get().map(|text| view! {
                        <Alert
                            kind="error"
                            icon="❌"
                            text=text
                            on_dismiss=move |_| store.write().clear_error()
                        />
                    })}

                    <FilterPanel />

                    <section class="actions-section">
                        <button
                            class="btn btn-success btn-large"
                            on:click=move |_| set_editing.set(Some(EditTarget::New))
                        >
                            "➕ Nueva Propiedad"
                        </button>
                    </section>

                    <PropertyTable on_edit=on_edit on_delete=on_delete />

                    <Pagination />
                </div>
            </main>

            {move || editing.get().map(|target| {
                let is_edit = target.property().is_some();
                let initial = target.property().cloned();
                view! {
                    <div class="modal-overlay" on:click=move |_| set_editing.set(None)>
                        <div class="modal" on:click=|ev| ev.stop_propagation()>
                            <div class="modal-header">
                                <h3 class="modal-title">
                                    {if is_edit { "✏️ Editar Propiedad" } else { "➕ Nueva Propiedad" }}
                                </h3>
                                <button class="modal-close" on:click=move |_| set_editing.set(None)>
                                    "×"
                                </button>
                            </div>
                            <div class="modal-content">
                                <PropertyForm
                                    initial=initial
                                    on_submit=on_submit
                                    on_cancel=move |_| set_editing.set(None)
                                />
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
