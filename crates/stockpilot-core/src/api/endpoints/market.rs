use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{AiRecommendation, ExchangeRate, MarketIndices, NewsHeadline};

impl ApiClient {
    pub async fn get_market_indices(&self) -> Result<MarketIndices, ApiError> {
        self.send_json(RequestDescriptor::get("/market/indices")).await
    }

    pub async fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>, ApiError> {
        self.send_json(RequestDescriptor::get("/market/exchange-rates"))
            .await
    }

    pub async fn get_top_news(&self) -> Result<Vec<NewsHeadline>, ApiError> {
        self.send_json(RequestDescriptor::get("/market/top-news")).await
    }

    pub async fn get_ai_recommendations(&self) -> Result<Vec<AiRecommendation>, ApiError> {
        self.send_json(RequestDescriptor::get("/market/ai-recommendations"))
            .await
    }
}
