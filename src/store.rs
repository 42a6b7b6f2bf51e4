//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over [`ListState`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::ListState;
pub use crate::state::ListStateStoreFields;

/// Type alias for the store
pub type AppStore = Store<ListState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
