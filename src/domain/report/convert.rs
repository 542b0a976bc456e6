//! Conversions from report wire types to domain types.

use super::wire::TransactionResponse;
use super::Transaction;

impl From<TransactionResponse> for Transaction {
    fn from(t: TransactionResponse) -> Self {
        Self {
            id: t.id,
            exchange: t.exchange,
            buy_order_id: t.buy_order_id,
            sell_order_id: t.sell_order_id,
            quantity: t.quantity,
            execution_price: t.execution_price,
            total_amount: t.total_amount,
            executed_at: t.executed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::wire::ReportsResponse;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_json() -> &'static str {
        r#"{
            "success": true,
            "transacciones": [
                {
                    "idTransaccion": 456,
                    "bolsaOrigen": "CL",
                    "idOrdenCompra": "44",
                    "idOrdenVenta": "MATCH_FICTICIO",
                    "cantidadEjecutada": 10,
                    "precioEjecucion": 95.5,
                    "monto": 955.0,
                    "fechaEjecucion": "2024-03-01T12:00:01.123000"
                }
            ]
        }"#
    }

    #[test]
    fn test_transaction_response_conversion() {
        let resp: ReportsResponse = serde_json::from_str(sample_json()).unwrap();
        let tx: Transaction = resp.transactions.into_iter().next().unwrap().into();
        assert_eq!(tx.id, "456");
        assert_eq!(tx.exchange, "CL");
        assert_eq!(tx.buy_order_id, "44");
        assert_eq!(tx.sell_order_id, "MATCH_FICTICIO");
        assert_eq!(tx.execution_price, Decimal::from_str("95.5").unwrap());
        assert_eq!(tx.total_amount, Decimal::from(955));
    }
}
