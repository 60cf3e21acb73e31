use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{HistoryEntry, OrderRequest, TradingOrders};

impl ApiClient {
    pub async fn get_orders(&self) -> Result<TradingOrders, ApiError> {
        self.send_json(RequestDescriptor::get("/trading/orders")).await
    }

    pub async fn get_pending_orders(&self) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get("/trading/orders/pending"))
            .await
    }

    pub async fn get_trading_history<P: Serialize>(&self, params: &P) -> Result<Vec<HistoryEntry>, ApiError> {
        self.send_json(RequestDescriptor::get("/trading/history").query_params(params)?)
            .await
    }

    pub async fn place_order(&self, order: &OrderRequest) -> Result<Value, ApiError> {
        let result = self
            .send(RequestDescriptor::post("/trading/orders").json(order)?)
            .await?;
        info!(symbol = %order.symbol, side = %order.side, quantity = order.quantity, "Order placed");
        Ok(result)
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.send_unit(RequestDescriptor::delete(format!(
            "/trading/orders/{}",
            encode_segment(order_id)
        )))
        .await?;
        info!(order_id, "Order cancelled");
        Ok(())
    }
}
