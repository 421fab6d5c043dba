//! Storefront API client.
//!
//! # Architecture
//!
//! - One `reqwest::Client` per [`CommerceClient`], shared behind an `Arc`
//! - The server is the source of truth - the only client-side state is the
//!   in-memory catalog, replaced wholesale on each successful listing
//! - Every user-triggered operation folds its own failures into exactly one
//!   discriminated outcome value; nothing escapes as an unhandled fault
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::storefront::{self, CommerceClient};
//!
//! let credential = storefront::login(&config.api_url, "alice", "hunter2").await?;
//! let client = CommerceClient::new(&config, credential);
//!
//! // Issued once per session, when the credential first becomes available.
//! client.refresh_catalog().await;
//!
//! let outcome = client.add_to_cart(item.id).await;
//! println!("{}", outcome.notice());
//! ```

mod client;
pub mod types;

pub use client::{CommerceClient, login};
pub use types::*;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server reached but rejected the request.
    #[error("Rejected ({status}): {message}")]
    Rejected {
        /// HTTP status of the rejection.
        status: StatusCode,
        /// Server-supplied error message, or a generic fallback.
        message: String,
    },
}
