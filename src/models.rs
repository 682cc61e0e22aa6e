//! Wire Models
//!
//! Data structures matching the backend's JSON responses.

use serde::{Deserialize, Serialize};

/// A marketplace listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Empty when the item was listed without a photo.
    #[serde(default)]
    pub image_name: String,
}

/// Envelope returned by `GET /items`. Order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}
