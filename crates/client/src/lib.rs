//! Shopfront client library.
//!
//! The session-and-commerce client for a storefront REST service. Holds the
//! authentication credential, drives every network interaction against the
//! storefront API, and maps each outcome to a discriminated result the
//! presentation layer can render however it likes.
//!
//! # Architecture
//!
//! - [`session`] - Credential lifecycle: restore on startup, login, logout,
//!   with an injected key-value store collaborator for persistence
//! - [`storefront`] - The commerce client: catalog listing, cart and order
//!   operations over `reqwest`, each producing exactly one terminal outcome
//! - [`config`] - Environment-driven configuration
//!
//! No operation lets a network failure escape as a fault: transport and
//! server rejections are folded into per-operation outcome values.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod session;
pub mod storefront;
