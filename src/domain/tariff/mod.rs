//! Tariff domain: per-exchange fee base rates and the admin configuration form.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use state::TariffTable;

// ─── Exchange ────────────────────────────────────────────────────────────────

/// Supported trading venues.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Exchange {
    /// Santiago.
    #[default]
    CL,
    /// Lima.
    PE,
    /// Bogotá.
    CO,
}

impl Exchange {
    pub const ALL: [Exchange; 3] = [Exchange::CL, Exchange::PE, Exchange::CO];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::CL => "CL",
            Exchange::PE => "PE",
            Exchange::CO => "CO",
        }
    }

    pub fn country(&self) -> &'static str {
        match self {
            Exchange::CL => "Chile",
            Exchange::PE => "Peru",
            Exchange::CO => "Colombia",
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CL" => Ok(Exchange::CL),
            "PE" => Ok(Exchange::PE),
            "CO" => Ok(Exchange::CO),
            other => Err(format!("unknown exchange: {other}")),
        }
    }
}

// ─── Tariff ──────────────────────────────────────────────────────────────────

/// The active fee base rate for one exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tariff {
    pub exchange: Exchange,
    pub base_rate: Decimal,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Backend acknowledgement of a tariff write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}

// ─── TariffForm ──────────────────────────────────────────────────────────────

/// Admin input for a tariff write. `base_rate` is `None` until entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TariffForm {
    pub exchange: Exchange,
    pub base_rate: Option<Decimal>,
}

impl TariffForm {
    pub fn new(exchange: Exchange, base_rate: Option<Decimal>) -> Self {
        Self {
            exchange,
            base_rate,
        }
    }

    /// Back to the default exchange with an empty rate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rate must be present and non-negative.
    pub fn validate(&self) -> Result<wire::ConfigureTariffRequest, ValidationError> {
        match self.base_rate {
            Some(rate) if !rate.is_sign_negative() || rate.is_zero() => {
                Ok(wire::ConfigureTariffRequest {
                    exchange: self.exchange,
                    base_rate: rate,
                })
            }
            _ => Err(ValidationError::InvalidRate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_default_is_cl_empty() {
        let form = TariffForm::default();
        assert_eq!(form.exchange, Exchange::CL);
        assert!(form.base_rate.is_none());
    }

    #[test]
    fn test_form_reset() {
        let mut form = TariffForm::new(Exchange::CO, Some(Decimal::new(5, 3)));
        form.reset();
        assert_eq!(form, TariffForm::default());
    }

    #[test]
    fn test_validate_missing_rate() {
        let form = TariffForm::new(Exchange::PE, None);
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidRate);
    }

    #[test]
    fn test_validate_negative_rate() {
        let form = TariffForm::new(Exchange::PE, Some(Decimal::new(-1, 3)));
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidRate);
    }

    #[test]
    fn test_validate_zero_and_positive() {
        let req = TariffForm::new(Exchange::CL, Some(Decimal::ZERO))
            .validate()
            .unwrap();
        assert_eq!(req.base_rate, Decimal::ZERO);

        let req = TariffForm::new(Exchange::CO, Some(Decimal::new(5, 3)))
            .validate()
            .unwrap();
        assert_eq!(req.exchange, Exchange::CO);
        assert_eq!(req.base_rate, Decimal::new(5, 3));
    }

    #[test]
    fn test_exchange_parse() {
        assert_eq!("cl".parse::<Exchange>().unwrap(), Exchange::CL);
        assert_eq!(" PE ".parse::<Exchange>().unwrap(), Exchange::PE);
        assert!("BR".parse::<Exchange>().is_err());
        assert_eq!(Exchange::CO.country(), "Colombia");
    }
}
