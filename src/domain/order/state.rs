//! Order state container: the cached list of the user's orders.

use super::Order;
use chrono::{DateTime, Utc};

/// Snapshot of the user's orders, in the order the backend returned them.
///
/// Replaced wholesale on every successful fetch; never appended to locally.
#[derive(Debug, Clone, Default)]
pub struct UserOrders {
    orders: Vec<Order>,
    fetched_at: Option<DateTime<Utc>>,
}

impl UserOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh backend listing.
    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.fetched_at = Some(Utc::now());
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// First order for `instrument` (exact ticker match).
    pub fn find_instrument(&self, instrument: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.instrument == instrument)
    }

    /// When the snapshot was last replaced; `None` if never fetched.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
        self.fetched_at = None;
    }
}
