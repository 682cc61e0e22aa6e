//! Deployment Configuration
//!
//! Base URLs baked in at compile time, defaulting to the local
//! development setup.

/// Origin serving this frontend. Hosts the placeholder image.
pub fn frontend_url() -> &'static str {
    option_env!("FRONTEND_URL").unwrap_or("http://localhost:3000")
}

/// Origin of the marketplace API server.
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:9000")
}
