//! Conversions from tariff wire types to domain types.

use super::wire::TariffResponse;
use super::{Exchange, Tariff};

impl TryFrom<TariffResponse> for Tariff {
    type Error = String;

    fn try_from(t: TariffResponse) -> Result<Self, Self::Error> {
        let exchange: Exchange = t.market_id.parse()?;
        Ok(Tariff {
            exchange,
            base_rate: t.base_rate,
            updated_at: t.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(market_id: &str) -> TariffResponse {
        TariffResponse {
            market_id: market_id.to_string(),
            base_rate: Decimal::new(3, 3),
            timestamp: None,
        }
    }

    #[test]
    fn test_known_exchange() {
        let t = Tariff::try_from(row("CO")).unwrap();
        assert_eq!(t.exchange, Exchange::CO);
        assert_eq!(t.base_rate, Decimal::new(3, 3));
    }

    #[test]
    fn test_unknown_exchange_rejected() {
        assert!(Tariff::try_from(row("MX")).is_err());
    }
}
