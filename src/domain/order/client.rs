//! Orders sub-client: submit and list the user's orders.

use crate::client::{Action, NuamClient};
use crate::domain::order::wire::{OrdersResponse, PlaceOrderResponse};
use crate::domain::order::{
    Order, OrderDraft, PlacedOrder, UserOrders, DEFAULT_ORDER_LIMIT,
};
use crate::error::{HttpError, SdkError, ValidationError};
use crate::shared::Side;

use rust_decimal::Decimal;

pub struct Orders<'a> {
    pub(crate) client: &'a NuamClient,
}

impl<'a> Orders<'a> {
    /// Fetch the user's orders (default limit 20), in backend order.
    ///
    /// Replaces the cached list on success; leaves it untouched on failure.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Order>, SdkError> {
        let limit = limit.unwrap_or(DEFAULT_ORDER_LIMIT);
        if limit == 0 {
            return Err(ValidationError::InvalidLimit.into());
        }

        let url = self
            .client
            .http
            .api_url(&format!("/ordenes?limite={}", limit));
        let resp: OrdersResponse = self
            .client
            .http
            .get(&url, "Error loading orders")
            .await?;

        let orders: Vec<Order> = resp.orders.into_iter().map(Order::from).collect();
        self.client.order_cache.write().await.replace(orders.clone());
        Ok(orders)
    }

    /// Validate and submit a draft.
    ///
    /// Validation failures return before any network call. On success the
    /// backend's record is returned and the cached list is re-fetched; the
    /// draft itself is never inserted into the cache.
    pub async fn submit(&self, draft: &OrderDraft) -> Result<PlacedOrder, SdkError> {
        let request = draft.validate()?;
        let guard = self.client.in_flight.begin(Action::SubmitOrder)?;

        let url = self.client.http.api_url("/orden");
        let resp: PlaceOrderResponse = self
            .client
            .http
            .post(&url, Some(&request), "Error placing order")
            .await?;
        drop(guard);

        tracing::info!(
            instrument = %request.instrument,
            side = %request.side,
            quantity = request.quantity,
            "order accepted"
        );

        self.refresh_after_submit().await;

        let order = resp.order.ok_or_else(|| {
            HttpError::MalformedResponse("order acknowledgement is missing `orden`".to_string())
        })?;
        Ok(PlacedOrder {
            order: order.into(),
            message: resp.message.unwrap_or_default(),
            execution: resp.execution.map(Into::into),
        })
    }

    /// Convenience wrapper around [`Orders::submit`].
    pub async fn place(
        &self,
        instrument: &str,
        side: Side,
        quantity: i64,
        limit_price: Option<Decimal>,
    ) -> Result<PlacedOrder, SdkError> {
        self.submit(&OrderDraft::new(instrument, side, quantity, limit_price))
            .await
    }

    /// Last successfully fetched order list.
    pub async fn cached(&self) -> UserOrders {
        self.client.order_cache.read().await.clone()
    }

    async fn refresh_after_submit(&self) {
        NuamClient::pause(self.client.order_refresh_delay).await;
        if let Err(e) = self.list(None).await {
            tracing::warn!(error = %e, "order list refresh after submission failed");
        }
    }
}
