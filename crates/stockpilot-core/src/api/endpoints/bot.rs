use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{BotAnalysis, BotStatus};

impl ApiClient {
    pub async fn get_bot_status(&self) -> Result<BotStatus, ApiError> {
        self.send_json(RequestDescriptor::get("/bot/status")).await
    }

    pub async fn get_bot_analysis(&self, symbol: &str) -> Result<BotAnalysis, ApiError> {
        self.send_json(RequestDescriptor::get(format!(
            "/bot/analysis/{}",
            encode_segment(symbol)
        )))
        .await
    }

    pub async fn toggle_bot(&self, enabled: bool) -> Result<Value, ApiError> {
        let result = self
            .send(RequestDescriptor::post("/bot/toggle").json(&json!({ "enabled": enabled }))?)
            .await?;
        info!(enabled, "Trading bot toggled");
        Ok(result)
    }

    pub async fn update_bot_settings<S: Serialize>(&self, settings: &S) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::put("/bot/settings").json(settings)?)
            .await
    }
}
