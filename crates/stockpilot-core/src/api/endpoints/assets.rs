use serde_json::Value;

use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{AssetKind, AssetSummary, Holding};

impl ApiClient {
    pub async fn get_asset_summary(&self) -> Result<AssetSummary, ApiError> {
        self.send_json(RequestDescriptor::get("/assets/summary")).await
    }

    /// Detail view for one asset category. The shape differs per category.
    pub async fn get_asset_detail(&self, kind: AssetKind) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get(format!("/assets/detail/{}", kind)))
            .await
    }

    pub async fn get_stock_holdings(&self) -> Result<Vec<Holding>, ApiError> {
        self.send_json(RequestDescriptor::get("/assets/stocks")).await
    }

    pub async fn get_bonds(&self) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get("/assets/bonds")).await
    }

    pub async fn get_coins(&self) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get("/assets/coins")).await
    }

    pub async fn get_cash(&self) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get("/assets/cash")).await
    }
}
