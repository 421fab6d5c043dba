//! Wire types and operation outcomes for the storefront API.
//!
//! Each user-triggered operation produces exactly one outcome value. The
//! outcome's `notice()` renders the single user-visible message for that
//! invocation; how it is displayed (modal, toast, stdout) is the
//! presentation layer's decision.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use shopfront_core::{CartId, ItemId, OrderId, Price};

// =============================================================================
// Wire types
// =============================================================================

/// A purchasable item from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Non-negative price in dollars.
    pub price: Price,
}

/// One entry of the server-side cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartEntry {
    /// Cart the entry belongs to.
    pub cart_id: CartId,
    /// Item in the cart.
    pub item_id: ItemId,
}

/// A past order; only the identifier is consumed, other fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderSummary {
    /// Server-assigned order identifier.
    pub id: OrderId,
}

/// Body of `POST /carts`.
#[derive(Debug, Serialize)]
pub(crate) struct AddToCartRequest {
    pub item_id: ItemId,
}

/// Body of `GET /carts`. A missing or null `cart_items` field means empty.
#[derive(Debug, Deserialize)]
pub(crate) struct CartPayload {
    #[serde(default)]
    pub cart_items: Option<Vec<CartEntry>>,
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Success body of `POST /login`.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

/// Rejection body shape: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of an add-to-cart invocation. Exactly one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCartOutcome {
    /// The server accepted the item.
    Added,
    /// The server reached but rejected the request (any non-success status).
    Rejected,
    /// The request could not be completed.
    Unreachable,
}

impl AddToCartOutcome {
    /// The user-visible message for this outcome.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Added => "Item added to cart successfully",
            Self::Rejected => "Failed to add item to cart",
            Self::Unreachable => "Error adding item to cart",
        }
    }
}

/// Result of a checkout invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was created.
    Placed,
    /// The server rejected the checkout, optionally with its own message.
    Rejected {
        /// Server-supplied `error` field, surfaced verbatim when present.
        message: Option<String>,
    },
    /// The request could not be completed or the rejection body was garbage.
    Unreachable,
}

impl CheckoutOutcome {
    /// The user-visible message for this outcome.
    #[must_use]
    pub fn notice(&self) -> Cow<'static, str> {
        match self {
            Self::Placed => Cow::Borrowed("Order successful"),
            Self::Rejected { message: Some(m) } => Cow::Owned(m.clone()),
            Self::Rejected { message: None } => Cow::Borrowed("Failed to checkout"),
            Self::Unreachable => Cow::Borrowed("Error during checkout"),
        }
    }
}

/// Result of a view-cart invocation. Entries are not retained after display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartViewOutcome {
    /// The server returned the cart; may be empty.
    Retrieved(Vec<CartEntry>),
    /// The request could not be completed or the body could not be parsed.
    Unreachable,
}

impl CartViewOutcome {
    /// The user-visible message: one line per entry, or an empty-cart note.
    #[must_use]
    pub fn notice(&self) -> Cow<'static, str> {
        match self {
            Self::Retrieved(entries) if entries.is_empty() => Cow::Borrowed("Cart is empty"),
            Self::Retrieved(entries) => Cow::Owned(
                entries
                    .iter()
                    .map(|entry| {
                        format!("Cart ID: {}, Item ID: {}", entry.cart_id, entry.item_id)
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::Unreachable => Cow::Borrowed("Error fetching cart"),
        }
    }
}

/// Result of an order-history invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderHistoryOutcome {
    /// The server returned the order list; may be empty.
    Retrieved(Vec<OrderSummary>),
    /// The request could not be completed or the body could not be parsed.
    Unreachable,
}

impl OrderHistoryOutcome {
    /// The user-visible message: one line per order, or a no-orders note.
    #[must_use]
    pub fn notice(&self) -> Cow<'static, str> {
        match self {
            Self::Retrieved(orders) if orders.is_empty() => Cow::Borrowed("No orders found"),
            Self::Retrieved(orders) => Cow::Owned(
                orders
                    .iter()
                    .map(|order| format!("Order ID: {}", order.id))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::Unreachable => Cow::Borrowed("Error fetching orders"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_cart_notices() {
        assert_eq!(
            AddToCartOutcome::Added.notice(),
            "Item added to cart successfully"
        );
        assert_eq!(
            AddToCartOutcome::Rejected.notice(),
            "Failed to add item to cart"
        );
        assert_eq!(
            AddToCartOutcome::Unreachable.notice(),
            "Error adding item to cart"
        );
    }

    #[test]
    fn test_checkout_notice_surfaces_server_message_verbatim() {
        let outcome = CheckoutOutcome::Rejected {
            message: Some("Cart is empty".to_string()),
        };
        assert_eq!(outcome.notice(), "Cart is empty");
    }

    #[test]
    fn test_checkout_notice_falls_back_without_message() {
        let outcome = CheckoutOutcome::Rejected { message: None };
        assert_eq!(outcome.notice(), "Failed to checkout");
        assert_eq!(CheckoutOutcome::Placed.notice(), "Order successful");
        assert_eq!(CheckoutOutcome::Unreachable.notice(), "Error during checkout");
    }

    #[test]
    fn test_cart_view_notice_formats_one_line_per_entry() {
        let outcome = CartViewOutcome::Retrieved(vec![
            CartEntry {
                cart_id: 1.into(),
                item_id: 10.into(),
            },
            CartEntry {
                cart_id: 1.into(),
                item_id: 11.into(),
            },
        ]);
        assert_eq!(
            outcome.notice(),
            "Cart ID: 1, Item ID: 10\nCart ID: 1, Item ID: 11"
        );
    }

    #[test]
    fn test_cart_view_notice_empty_and_error() {
        assert_eq!(CartViewOutcome::Retrieved(vec![]).notice(), "Cart is empty");
        assert_eq!(CartViewOutcome::Unreachable.notice(), "Error fetching cart");
    }

    #[test]
    fn test_order_history_notice() {
        let outcome = OrderHistoryOutcome::Retrieved(vec![
            OrderSummary { id: 5.into() },
            OrderSummary { id: 9.into() },
        ]);
        assert_eq!(outcome.notice(), "Order ID: 5\nOrder ID: 9");
        assert_eq!(
            OrderHistoryOutcome::Retrieved(vec![]).notice(),
            "No orders found"
        );
        assert_eq!(
            OrderHistoryOutcome::Unreachable.notice(),
            "Error fetching orders"
        );
    }

    #[test]
    fn test_cart_payload_missing_items_is_empty() {
        let payload: CartPayload =
            serde_json::from_str(r#"{"error":"Cart is empty"}"#).expect("object should parse");
        assert!(payload.cart_items.unwrap_or_default().is_empty());

        let payload: CartPayload =
            serde_json::from_str(r#"{"cart_items":null}"#).expect("null items should parse");
        assert!(payload.cart_items.is_none());
    }

    #[test]
    fn test_item_ignores_extra_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id":1,"name":"Mug","description":"Ceramic","price":9.5,"created_at":"2026-01-01T00:00:00Z"}"#,
        )
        .expect("item should parse");
        assert_eq!(item.name, "Mug");
        assert_eq!(item.price.to_string(), "$9.50");
    }
}
