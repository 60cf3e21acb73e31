use serde_json::Value;

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::CompanyInfo;

impl ApiClient {
    pub async fn get_company(&self, symbol: &str) -> Result<CompanyInfo, ApiError> {
        self.send_json(RequestDescriptor::get(format!(
            "/companies/{}",
            encode_segment(symbol)
        )))
        .await
    }

    pub async fn get_company_financials(&self, symbol: &str) -> Result<Value, ApiError> {
        self.company_section(symbol, "financials").await
    }

    pub async fn get_company_disclosures(&self, symbol: &str) -> Result<Value, ApiError> {
        self.company_section(symbol, "disclosures").await
    }

    pub async fn get_company_ai_analysis(&self, symbol: &str) -> Result<Value, ApiError> {
        self.company_section(symbol, "ai-analysis").await
    }

    async fn company_section(&self, symbol: &str, section: &str) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get(format!(
            "/companies/{}/{}",
            encode_segment(symbol),
            section
        )))
        .await
    }
}
