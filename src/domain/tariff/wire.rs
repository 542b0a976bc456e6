//! Wire types for tariff configuration.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Exchange;

/// Body of `POST /api/tarifas`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfigureTariffRequest {
    #[serde(rename = "bolsa")]
    pub exchange: Exchange,
    #[serde(rename = "tarifa_base", with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,
}

/// Response of `POST /api/tarifas`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigureTariffResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// One row of the market configuration table.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffResponse {
    #[serde(rename = "idMercado")]
    pub market_id: String,
    #[serde(rename = "tarifa_base", with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,
    #[serde(default, with = "serde_util::iso_datetime_option")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Response of `GET /api/tarifas`.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffsResponse {
    #[serde(rename = "tarifas", default)]
    pub tariffs: Vec<TariffResponse>,
}
