//! Wire types for order requests and responses.

use crate::shared::{serde_util, OrderId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Body of `POST /api/orden`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceOrderRequest {
    #[serde(rename = "instrumento")]
    pub instrument: String,
    #[serde(rename = "tipo")]
    pub side: Side,
    #[serde(rename = "cantidad")]
    pub quantity: u64,
    /// Serialized as `null` for market orders.
    #[serde(rename = "precioLimite", with = "rust_decimal::serde::float_option")]
    pub limit_price: Option<Decimal>,
}

/// A single order as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "idOrden")]
    pub id: OrderId,
    #[serde(rename = "tipo")]
    pub side: Side,
    #[serde(rename = "instrumento")]
    pub instrument: String,
    #[serde(rename = "cantidad")]
    pub quantity: u64,
    #[serde(
        rename = "precioLimite",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub limit_price: Option<Decimal>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "fechaCreacion", with = "serde_util::iso_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Immediate execution attached to a place-order response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionResponse {
    #[serde(rename = "idTransaccion", with = "serde_util::string_or_number")]
    pub id: String,
    #[serde(rename = "precioEjecucion", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "cantidadEjecutada")]
    pub quantity: u64,
    #[serde(rename = "monto", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "fechaEjecucion", with = "serde_util::iso_datetime")]
    pub executed_at: DateTime<Utc>,
}

/// Response of `POST /api/orden`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "orden", default)]
    pub order: Option<OrderResponse>,
    #[serde(rename = "transaccion", default)]
    pub execution: Option<ExecutionResponse>,
}

/// Response of `GET /api/ordenes`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    #[serde(rename = "ordenes", default)]
    pub orders: Vec<OrderResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_place_order_request_market_is_null() {
        let req = PlaceOrderRequest {
            instrument: "ENEL".into(),
            side: Side::Buy,
            quantity: 100,
            limit_price: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"instrumento": "ENEL", "tipo": "Compra", "cantidad": 100, "precioLimite": null})
        );
    }

    #[test]
    fn test_place_order_request_limit_is_number() {
        let req = PlaceOrderRequest {
            instrument: "AAPL".into(),
            side: Side::Sell,
            quantity: 7,
            limit_price: Some(Decimal::from_str("99.5").unwrap()),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["tipo"], "Venta");
        assert_eq!(v["precioLimite"].as_f64(), Some(99.5));
    }

    #[test]
    fn test_orders_response_deserialize() {
        let json = r#"{
            "success": true,
            "ordenes": [
                {
                    "idOrden": 12,
                    "tipo": "Compra",
                    "instrumento": "ENEL",
                    "cantidad": 100,
                    "precioLimite": null,
                    "estado": "Pendiente",
                    "fechaCreacion": "2024-01-15T10:30:00"
                },
                {
                    "idOrden": 11,
                    "tipo": "Venta",
                    "instrumento": "SQM-B",
                    "cantidad": 5,
                    "precioLimite": 45.25,
                    "estado": "Ejecutada",
                    "fechaCreacion": "2024-01-15T09:00:00.500000"
                }
            ]
        }"#;
        let resp: OrdersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.orders.len(), 2);
        assert_eq!(resp.orders[0].id.as_str(), "12");
        assert!(resp.orders[0].limit_price.is_none());
        assert_eq!(
            resp.orders[1].limit_price,
            Some(Decimal::from_str("45.25").unwrap())
        );
        assert_eq!(resp.orders[1].status, OrderStatus::Executed);
    }

    #[test]
    fn test_order_response_missing_limit_price() {
        let json = r#"{
            "idOrden": 3, "tipo": "Compra", "instrumento": "BBVA", "cantidad": 1,
            "estado": "Cancelada", "fechaCreacion": "2024-02-01T00:00:00"
        }"#;
        let o: OrderResponse = serde_json::from_str(json).unwrap();
        assert!(o.limit_price.is_none());
        assert_eq!(o.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_place_order_response_with_execution() {
        let json = r#"{
            "success": true,
            "message": "Orden ejecutada exitosamente a $95.5",
            "orden": {
                "idOrden": 44, "tipo": "Compra", "instrumento": "ENEL", "cantidad": 10,
                "precioLimite": 95.5, "estado": "Ejecutada",
                "fechaCreacion": "2024-03-01T12:00:00"
            },
            "transaccion": {
                "idTransaccion": 9, "precioEjecucion": 95.5, "cantidadEjecutada": 10,
                "monto": 955.0, "fechaEjecucion": "2024-03-01T12:00:01"
            }
        }"#;
        let resp: PlaceOrderResponse = serde_json::from_str(json).unwrap();
        assert!(resp.order.is_some());
        let exec = resp.execution.unwrap();
        assert_eq!(exec.id, "9");
        assert_eq!(exec.amount, Decimal::from(955));
    }
}
