//! Wire types for transaction reports.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// REST response for a single transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "idTransaccion", with = "serde_util::string_or_number")]
    pub id: String,
    #[serde(rename = "bolsaOrigen", default)]
    pub exchange: String,
    #[serde(rename = "idOrdenCompra", with = "serde_util::string_or_number")]
    pub buy_order_id: String,
    #[serde(rename = "idOrdenVenta", with = "serde_util::string_or_number")]
    pub sell_order_id: String,
    #[serde(rename = "cantidadEjecutada")]
    pub quantity: u64,
    #[serde(rename = "precioEjecucion", with = "rust_decimal::serde::float")]
    pub execution_price: Decimal,
    #[serde(rename = "monto", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(rename = "fechaEjecucion", with = "serde_util::iso_datetime")]
    pub executed_at: DateTime<Utc>,
}

/// Response of `GET /api/reportes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsResponse {
    #[serde(rename = "transacciones", default)]
    pub transactions: Vec<TransactionResponse>,
}
