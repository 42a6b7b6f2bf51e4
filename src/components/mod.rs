//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod delete_confirm_button;
mod editor_target;
mod filter_panel;
mod pagination;
mod property_form;
mod property_table;

pub use alert::Alert;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use filter_panel::FilterPanel;
pub use pagination::Pagination;
pub use property_form::PropertyForm;
pub use property_table::PropertyTable;
