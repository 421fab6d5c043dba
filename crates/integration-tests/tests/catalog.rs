//! Catalog listing behavior against a stub storefront.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use shopfront_client::storefront::CommerceClient;
use shopfront_core::{Credential, ItemId, Price};
use shopfront_integration_tests::{config_for, serve, unreachable_api_url};

fn client_for(api_url: &str) -> CommerceClient {
    CommerceClient::new(&config_for(api_url), Credential::from("tok"))
}

#[tokio::test]
async fn catalog_replaced_wholesale_in_server_order() {
    let router = Router::new().route(
        "/items",
        get(|| async {
            Json(json!([
                {"id": 2, "name": "Teapot", "description": "Cast iron", "price": 49.0},
                {"id": 1, "name": "Mug", "description": "Ceramic", "price": 9.5},
            ]))
        }),
    );
    let client = client_for(&serve(router).await);

    client.refresh_catalog().await;

    let catalog = client.catalog();
    assert_eq!(catalog.len(), 2);
    // Server order preserved, no deduplication or sorting.
    assert_eq!(catalog[0].id, ItemId::new(2));
    assert_eq!(catalog[1].id, ItemId::new(1));
    assert_eq!(catalog[1].name, "Mug");
    assert_eq!(catalog[1].price, Price::new(Decimal::new(95, 1)));
    assert_eq!(catalog[1].price.to_string(), "$9.50");
}

#[tokio::test]
async fn null_listing_yields_empty_catalog() {
    let router = Router::new().route("/items", get(|| async { Json(Value::Null) }));
    let client = client_for(&serve(router).await);

    client.refresh_catalog().await;

    assert!(client.catalog().is_empty());
}

#[tokio::test]
async fn listing_failure_keeps_previous_catalog() {
    let failing = Arc::new(AtomicBool::new(false));
    let router = Router::new()
        .route(
            "/items",
            get(|State(failing): State<Arc<AtomicBool>>| async move {
                if failing.load(Ordering::SeqCst) {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": "boom"})),
                    )
                } else {
                    (
                        StatusCode::OK,
                        Json(json!([
                            {"id": 1, "name": "Mug", "description": "Ceramic", "price": 9.5},
                        ])),
                    )
                }
            }),
        )
        .with_state(Arc::clone(&failing));
    let client = client_for(&serve(router).await);

    client.refresh_catalog().await;
    assert_eq!(client.catalog().len(), 1);

    failing.store(true, Ordering::SeqCst);
    client.refresh_catalog().await;

    // Failure is silent and the catalog stays at its previous value.
    assert_eq!(client.catalog().len(), 1);
    assert_eq!(client.catalog()[0].name, "Mug");
}

#[tokio::test]
async fn unreachable_listing_leaves_catalog_empty() {
    let client = client_for(&unreachable_api_url());

    client.refresh_catalog().await;

    assert!(client.catalog().is_empty());
}
