//! Order domain: drafts, submitted orders, and the user's order list.
//!
//! Lifecycle: a draft ([`OrderDraft`]) is validated locally and submitted; it
//! becomes an [`Order`] only once the backend acknowledges it. Status is
//! always read back from the backend, never set here.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::ValidationError;
use crate::shared::{OrderId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::UserOrders;

/// Default number of orders requested by `orders().list(None)`.
pub const DEFAULT_ORDER_LIMIT: u32 = 20;

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Backend-reported order status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[serde(rename = "Pendiente", alias = "Pending")]
    Pending,
    #[serde(rename = "Ejecutada", alias = "Executed")]
    Executed,
    #[serde(rename = "Cancelada", alias = "Cancelled")]
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Executed => write!(f, "Executed"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

// ─── OrderKind ───────────────────────────────────────────────────────────────

/// How an order is priced. Derived from the presence of a limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit(Decimal),
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderKind::Market => write!(f, "market"),
            OrderKind::Limit(price) => write!(f, "{}", price),
        }
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order acknowledged by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub instrument: String,
    pub side: Side,
    pub quantity: u64,
    pub limit_price: Option<Decimal>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn kind(&self) -> OrderKind {
        match self.limit_price {
            Some(price) => OrderKind::Limit(price),
            None => OrderKind::Market,
        }
    }

    /// `"market"` for market orders, the limit price otherwise.
    pub fn price_label(&self) -> String {
        self.kind().to_string()
    }
}

/// Immediate execution receipt returned when the backend matched the order
/// on submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Execution {
    pub id: String,
    pub price: Decimal,
    pub quantity: u64,
    pub amount: Decimal,
    pub executed_at: DateTime<Utc>,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    /// Backend confirmation text.
    pub message: String,
    pub execution: Option<Execution>,
}

// ─── OrderDraft ──────────────────────────────────────────────────────────────

/// Order under construction. Has no id; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub instrument: String,
    pub side: Side,
    /// Signed so that non-positive input can be represented and rejected.
    pub quantity: i64,
    /// `None` means a market order.
    pub limit_price: Option<Decimal>,
}

impl OrderDraft {
    pub fn new(
        instrument: impl Into<String>,
        side: Side,
        quantity: i64,
        limit_price: Option<Decimal>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            side,
            quantity,
            limit_price,
        }
    }

    /// Local checks, run before any network call. Normalizes the ticker to
    /// uppercase.
    pub fn validate(&self) -> Result<wire::PlaceOrderRequest, ValidationError> {
        let instrument = self.instrument.trim();
        if instrument.is_empty() {
            return Err(ValidationError::EmptyInstrument);
        }
        let quantity = u64::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ValidationError::NonPositiveQuantity)?;

        Ok(wire::PlaceOrderRequest {
            instrument: instrument.to_uppercase(),
            side: self.side,
            quantity,
            limit_price: self.limit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_uppercases_ticker() {
        let req = OrderDraft::new("enel", Side::Buy, 100, None).validate().unwrap();
        assert_eq!(req.instrument, "ENEL");
        assert_eq!(req.quantity, 100);
        assert!(req.limit_price.is_none());
    }

    #[test]
    fn test_validate_trims_ticker() {
        let req = OrderDraft::new("  sqm-b ", Side::Sell, 5, None)
            .validate()
            .unwrap();
        assert_eq!(req.instrument, "SQM-B");
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        for q in [0, -1, -100, i64::MIN] {
            let err = OrderDraft::new("ENEL", Side::Buy, q, None)
                .validate()
                .unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveQuantity);
        }
    }

    #[test]
    fn test_validate_rejects_empty_instrument() {
        let err = OrderDraft::new("   ", Side::Buy, 10, None)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyInstrument);
    }

    #[test]
    fn test_validate_passes_limit_price_through() {
        let price = Decimal::from_str("95.50").unwrap();
        let req = OrderDraft::new("BBVA", Side::Sell, 3, Some(price))
            .validate()
            .unwrap();
        assert_eq!(req.limit_price, Some(price));
    }

    #[test]
    fn test_order_kind_and_label() {
        let mut order = Order {
            id: OrderId::from("1"),
            instrument: "ENEL".into(),
            side: Side::Buy,
            quantity: 100,
            limit_price: None,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        assert_eq!(order.kind(), OrderKind::Market);
        assert_eq!(order.price_label(), "market");

        order.limit_price = Some(Decimal::from_str("101.25").unwrap());
        assert_eq!(order.price_label(), "101.25");
    }

    #[test]
    fn test_status_wire_names() {
        let s: OrderStatus = serde_json::from_str("\"Ejecutada\"").unwrap();
        assert_eq!(s, OrderStatus::Executed);
        let s: OrderStatus = serde_json::from_str("\"Pendiente\"").unwrap();
        assert_eq!(s, OrderStatus::Pending);
        let s: OrderStatus = serde_json::from_str("\"Cancelada\"").unwrap();
        assert_eq!(s, OrderStatus::Cancelled);
        assert!(serde_json::from_str::<OrderStatus>("\"Parcial\"").is_err());
    }
}
