/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod credential;
pub mod deposits;
pub mod error;
pub mod lightning;
pub mod response;
pub mod webhooks;
pub mod withdrawals;

pub use error::{PlatformError, Result};

pub use client::{Cancellation, ClientConfig, PlatformClient, RedirectPolicy};
pub use credential::Credential;
