//! Tariff state container: one active row per exchange.

use super::{Exchange, Tariff};
use std::collections::BTreeMap;

/// The authoritative rate table as last read from the backend.
///
/// Keyed by exchange, so a second row for the same exchange overwrites the
/// first rather than adding a record.
#[derive(Debug, Clone, Default)]
pub struct TariffTable {
    rows: BTreeMap<Exchange, Tariff>,
}

impl TariffTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with a fresh listing.
    pub fn replace(&mut self, tariffs: impl IntoIterator<Item = Tariff>) {
        self.rows.clear();
        for t in tariffs {
            self.upsert(t);
        }
    }

    pub fn upsert(&mut self, tariff: Tariff) {
        self.rows.insert(tariff.exchange, tariff);
    }

    pub fn get(&self, exchange: Exchange) -> Option<&Tariff> {
        self.rows.get(&exchange)
    }

    /// Rows in exchange order (CL, PE, CO).
    pub fn iter(&self) -> impl Iterator<Item = &Tariff> {
        self.rows.values()
    }

    /// Exchanges with no configured tariff.
    pub fn unconfigured(&self) -> Vec<Exchange> {
        Exchange::ALL
            .into_iter()
            .filter(|e| !self.rows.contains_key(e))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
