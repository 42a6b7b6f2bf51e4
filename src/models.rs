//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Property record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub address: String,
    pub price: f64,
    pub size: f64,
    pub description: Option<String>,
}

/// Mutation body for create/update (backend assigns ids)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPayload {
    pub address: String,
    pub price: f64,
    pub size: f64,
    pub description: Option<String>,
}

/// One page of results (matches the backend's `Page` shape)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResponse {
    pub content: Vec<Property>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Raw form text prior to numeric coercion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    pub address: String,
    pub price: String,
    pub size: String,
    pub description: String,
}

impl PropertyDraft {
    /// Seed a draft from an existing record for editing
    pub fn from_property(p: &Property) -> Self {
        Self {
            address: p.address.clone(),
            price: p.price.to_string(),
            size: p.size.to_string(),
            description: p.description.clone().unwrap_or_default(),
        }
    }
}

/// Filter inputs; empty string means "unbounded" for that dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub address: String,
    pub min_price: String,
    pub max_price: String,
    pub min_size: String,
    pub max_size: String,
}
