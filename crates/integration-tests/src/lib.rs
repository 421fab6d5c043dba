//! Integration tests for Shopfront.
//!
//! Each test runs the client against an in-process stub of the storefront
//! REST API: an `axum` router bound to an ephemeral localhost port. Tests
//! build whatever routes they need and hand the router to [`serve`].
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::TcpListener as StdTcpListener;
use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;

use shopfront_client::config::ClientConfig;

/// Serve a stub storefront router on an ephemeral port.
///
/// Returns the base URL to point the client at. The server task runs until
/// the test's runtime shuts down.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound socket should have an address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub server should run");
    });

    format!("http://{addr}")
}

/// A client configuration pointing at a stub server.
#[must_use]
pub fn config_for(api_url: &str) -> ClientConfig {
    ClientConfig {
        api_url: api_url.trim_end_matches('/').to_string(),
        token_file: PathBuf::from(".shopfront-token"),
    }
}

/// A base URL where nothing is listening, for transport-failure cases.
///
/// Binds an ephemeral port to learn a free address, then releases it.
#[must_use]
pub fn unreachable_api_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound socket should have an address");
    drop(listener);
    format!("http://{addr}")
}
