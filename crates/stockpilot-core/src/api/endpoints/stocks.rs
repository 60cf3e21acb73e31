use serde::Serialize;
use serde_json::Value;

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::SearchResult;

impl ApiClient {
    /// List stocks; `params` is any flat serializable filter.
    pub async fn list_stocks<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get("/stocks").query_params(params)?)
            .await
    }

    pub async fn get_stock(&self, symbol: &str) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get(format!("/stocks/{}", encode_segment(symbol))))
            .await
    }

    pub async fn get_stock_price(&self, symbol: &str) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get(format!(
            "/stocks/{}/price",
            encode_segment(symbol)
        )))
        .await
    }

    /// Chart series for `period` (`1d`, `1w`, `1m`, ...). Rendering is up to the caller.
    pub async fn get_stock_chart(&self, symbol: &str, period: &str) -> Result<Value, ApiError> {
        let request = RequestDescriptor::get(format!("/stocks/{}/chart", encode_segment(symbol)))
            .query("period", period);
        self.send(request).await
    }

    pub async fn search_stocks(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        self.send_json(RequestDescriptor::get("/stocks/search").query("q", query))
            .await
    }
}
