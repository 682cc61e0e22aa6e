//! UI Components
//!
//! Reusable Leptos components.

mod item_list;
mod listing;

pub use item_list::ItemList;
pub use listing::Listing;
