//! Edit Target Type
//!
//! Represents the record being edited in the modal form.

use crate::models::Property;

/// Edit target - a new record or an existing one
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    /// Creating a new property
    New,
    /// Editing an existing property
    Existing(Property),
}

impl EditTarget {
    /// The existing record, if any
    pub fn property(&self) -> Option<&Property> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(p) => Some(p),
        }
    }
}
