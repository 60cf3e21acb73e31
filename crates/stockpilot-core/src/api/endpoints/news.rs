use chrono::NaiveDate;
use serde::Serialize;

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{NewsDetail, NewsHeadline};

impl ApiClient {
    pub async fn list_news<P: Serialize>(&self, params: &P) -> Result<Vec<NewsHeadline>, ApiError> {
        self.send_json(RequestDescriptor::get("/news").query_params(params)?)
            .await
    }

    pub async fn get_news(&self, id: &str) -> Result<NewsDetail, ApiError> {
        self.send_json(RequestDescriptor::get(format!("/news/{}", encode_segment(id))))
            .await
    }

    pub async fn get_news_by_date(&self, date: NaiveDate) -> Result<Vec<NewsHeadline>, ApiError> {
        let request =
            RequestDescriptor::get("/news/by-date").query("date", date.format("%Y-%m-%d"));
        self.send_json(request).await
    }
}
