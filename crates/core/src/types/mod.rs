//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod price;

pub use credential::Credential;
pub use id::*;
pub use price::Price;
