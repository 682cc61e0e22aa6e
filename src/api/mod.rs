//! Marketplace API Client
//!
//! HTTP bindings to the backend, organized by domain.

mod items;

use thiserror::Error;

/// Failure of an API call. The UI layer treats every variant the same
/// way (log and drop), so callers rarely match on it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(gloo_net::Error),
    #[error("failed to build request: {0}")]
    Request(String),
}

// Re-export all public items
pub use items::*;
