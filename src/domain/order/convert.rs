//! Conversions: order wire types → Order domain types.

use super::wire::{ExecutionResponse, OrderResponse};
use super::{Execution, Order};

impl From<OrderResponse> for Order {
    fn from(o: OrderResponse) -> Self {
        Order {
            id: o.id,
            instrument: o.instrument,
            side: o.side,
            quantity: o.quantity,
            limit_price: o.limit_price,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

impl From<ExecutionResponse> for Execution {
    fn from(e: ExecutionResponse) -> Self {
        Execution {
            id: e.id,
            price: e.price,
            quantity: e.quantity,
            amount: e.amount,
            executed_at: e.executed_at,
        }
    }
}
