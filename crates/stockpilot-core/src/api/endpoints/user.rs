use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{UserProfile, UserSettings};

impl ApiClient {
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.send_json(RequestDescriptor::get("/user/profile")).await
    }

    pub async fn update_profile(&self, profile: &UserProfile) -> Result<serde_json::Value, ApiError> {
        self.send(RequestDescriptor::put("/user/profile").json(profile)?)
            .await
    }

    pub async fn get_settings(&self) -> Result<UserSettings, ApiError> {
        self.send_json(RequestDescriptor::get("/user/settings")).await
    }

    pub async fn update_settings(&self, settings: &UserSettings) -> Result<serde_json::Value, ApiError> {
        self.send(RequestDescriptor::put("/user/settings").json(settings)?)
            .await
    }
}
