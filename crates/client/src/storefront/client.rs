//! Commerce client implementation.
//!
//! Uses `reqwest` for HTTP. Constructed with a base URL and a credential,
//! both immutable for the client's lifetime; changing either means building
//! a new client. The catalog is the only state a background operation
//! mutates, and it is always replaced wholesale, never patched.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument, warn};

use shopfront_core::{Credential, ItemId};

use crate::config::ClientConfig;
use crate::storefront::StorefrontError;
use crate::storefront::types::{
    AddToCartOutcome, AddToCartRequest, CartPayload, CartViewOutcome, CheckoutOutcome, ErrorBody,
    Item, LoginRequest, LoginResponse, OrderHistoryOutcome, OrderSummary,
};

/// Client for the storefront REST API.
///
/// Cheap to clone; clones share the HTTP connection pool, credential, and
/// catalog. Operations take `&self` and may be issued concurrently - there
/// is no mutual exclusion between them, and completions apply independently.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
    catalog: RwLock<Vec<Item>>,
}

impl CommerceClient {
    /// Create a new commerce client for an authenticated session.
    #[must_use]
    pub fn new(config: &ClientConfig, credential: Credential) -> Self {
        Self {
            inner: Arc::new(CommerceClientInner {
                http: reqwest::Client::new(),
                base_url: config.api_url.trim_end_matches('/').to_string(),
                credential,
                catalog: RwLock::new(Vec::new()),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Snapshot of the current catalog.
    #[must_use]
    pub fn catalog(&self) -> Vec<Item> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Fetch the item listing and replace the catalog wholesale.
    ///
    /// Unauthenticated read. A failure is logged and leaves the catalog at
    /// its previous value - the initial load has its own loading indicator,
    /// so a background failure degrades to an empty-looking catalog rather
    /// than interrupting the user. Issued once per session by the caller;
    /// never re-issued automatically.
    #[instrument(skip(self))]
    pub async fn refresh_catalog(&self) {
        match self.fetch_items().await {
            Ok(items) => {
                debug!(count = items.len(), "catalog replaced");
                *self
                    .inner
                    .catalog
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = items;
            }
            Err(error) => {
                warn!(%error, "item listing failed, keeping previous catalog");
            }
        }
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, StorefrontError> {
        let response = self
            .inner
            .http
            .get(self.url("/items"))
            .send()
            .await?
            .error_for_status()?;

        // Body as text first for better parse diagnostics. The server
        // responds `null` when it has nothing to list.
        let body = response.text().await?;
        let items: Option<Vec<Item>> = serde_json::from_str(&body)?;
        Ok(items.unwrap_or_default())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add an item to the cart.
    ///
    /// Authenticated write. Any non-success status is a rejection; statuses
    /// are not differentiated further.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn add_to_cart(&self, item_id: ItemId) -> AddToCartOutcome {
        let request = self
            .inner
            .http
            .post(self.url("/carts"))
            .bearer_auth(self.inner.credential.expose())
            .json(&AddToCartRequest { item_id });

        match request.send().await {
            Ok(response) if response.status().is_success() => AddToCartOutcome::Added,
            Ok(response) => {
                debug!(status = %response.status(), "add to cart rejected");
                AddToCartOutcome::Rejected
            }
            Err(error) => {
                warn!(%error, "add to cart request failed");
                AddToCartOutcome::Unreachable
            }
        }
    }

    /// View the current server-side cart.
    ///
    /// The cart is fetched in full on every view; nothing is retained
    /// afterwards, and the client never assumes the contents match its last
    /// view. A rejection body without `cart_items` reads as an empty cart.
    #[instrument(skip(self))]
    pub async fn view_cart(&self) -> CartViewOutcome {
        let request = self
            .inner
            .http
            .get(self.url("/carts"))
            .bearer_auth(self.inner.credential.expose());

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "cart fetch failed");
                return CartViewOutcome::Unreachable;
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "cart body could not be read");
                return CartViewOutcome::Unreachable;
            }
        };

        match serde_json::from_str::<CartPayload>(&body) {
            Ok(payload) => CartViewOutcome::Retrieved(payload.cart_items.unwrap_or_default()),
            Err(error) => {
                warn!(%error, "cart body could not be parsed");
                CartViewOutcome::Unreachable
            }
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Check out the current cart.
    ///
    /// Authenticated write with no body. The server is the sole authority on
    /// whether checkout is possible; no cart state is validated client-side.
    /// On rejection the server's `error` message is surfaced verbatim when
    /// the body carries one.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> CheckoutOutcome {
        let request = self
            .inner
            .http
            .post(self.url("/orders"))
            .bearer_auth(self.inner.credential.expose());

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "checkout request failed");
                return CheckoutOutcome::Unreachable;
            }
        };

        let status = response.status();
        if status.is_success() {
            return CheckoutOutcome::Placed;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "checkout rejection body could not be read");
                return CheckoutOutcome::Unreachable;
            }
        };

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => {
                debug!(%status, "checkout rejected");
                CheckoutOutcome::Rejected {
                    message: parsed.error,
                }
            }
            Err(error) => {
                warn!(%error, %status, "checkout rejection body could not be parsed");
                CheckoutOutcome::Unreachable
            }
        }
    }

    /// View order history.
    #[instrument(skip(self))]
    pub async fn order_history(&self) -> OrderHistoryOutcome {
        let request = self
            .inner
            .http
            .get(self.url("/orders"))
            .bearer_auth(self.inner.credential.expose());

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "order history fetch failed");
                return OrderHistoryOutcome::Unreachable;
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "order history body could not be read");
                return OrderHistoryOutcome::Unreachable;
            }
        };

        match serde_json::from_str::<Option<Vec<OrderSummary>>>(&body) {
            Ok(orders) => OrderHistoryOutcome::Retrieved(orders.unwrap_or_default()),
            Err(error) => {
                warn!(%error, "order history body could not be parsed");
                OrderHistoryOutcome::Unreachable
            }
        }
    }
}

/// Exchange a username and password for a credential.
///
/// The one unauthenticated call besides the item listing; it happens before
/// a [`CommerceClient`] exists, so it takes the base URL directly.
///
/// # Errors
///
/// Returns [`StorefrontError::Rejected`] with the server's message on a
/// non-success status, or a transport/parse error if the exchange could not
/// be completed.
#[instrument(skip(password))]
pub async fn login(
    api_url: &str,
    username: &str,
    password: &str,
) -> Result<Credential, StorefrontError> {
    let response = reqwest::Client::new()
        .post(format!("{}/login", api_url.trim_end_matches('/')))
        .json(&LoginRequest { username, password })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| "Login failed".to_string());
        return Err(StorefrontError::Rejected { status, message });
    }

    let parsed: LoginResponse = serde_json::from_str(&body)?;
    Ok(Credential::new(parsed.token))
}
