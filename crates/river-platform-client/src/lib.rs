/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public River Platform client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the River Platform payment API.
//!
//! Every operation builds an authenticated JSON request, sends it through
//! one pipeline and normalizes the answer into either a typed payload or a
//! [`PlatformError`]. Failed statuses surface as `Error <status>: <reason>`.
//!
//! The crate logs through [`tracing`] and installs no subscriber.

pub mod config;
pub mod http;
pub mod types;

pub use config::PlatformConfig;

// Re-export commonly used types from http
pub use http::{
    Cancellation,
    ClientConfig,
    Credential,
    PlatformClient,
    PlatformError,
    RedirectPolicy,
    Result,
};

// Re-export all types
pub use types::*;

// Callers share cancellation tokens with the client
pub use tokio_util::sync::CancellationToken;
