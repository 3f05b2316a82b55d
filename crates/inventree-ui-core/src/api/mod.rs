//! Server API plumbing
//!
//! - `endpoints` - endpoint paths, model types and URL building
//! - `client` - the `ApiClient` capability and its HTTP implementation

mod client;
mod endpoints;

pub use client::{error_message, ApiClient, HttpApiClient};
pub use endpoints::{api_url, ApiEndpoint, ModelType};

#[cfg(test)]
pub use client::MockApiClient;
