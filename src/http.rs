// src/http.rs
// Shared HTTP client for catalog requests

use std::time::Duration;

/// Default request timeout for catalog fetches
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the shared HTTP client with appropriate defaults.
///
/// Created once at startup and handed to the catalog gateway. Uses
/// connection pooling internally.
pub fn create_shared_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("holocron/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
