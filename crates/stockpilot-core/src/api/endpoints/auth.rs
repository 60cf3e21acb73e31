use serde_json::json;
use tracing::{info, warn};

use crate::api::request::encode_segment;
use crate::api::{ApiClient, ApiError, RequestDescriptor};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};

#[derive(serde::Deserialize)]
struct DuplicateCheck {
    #[serde(alias = "isDuplicate", alias = "duplicate")]
    exists: bool,
}

impl ApiClient {
    /// Log in and store the returned access token as the session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = RequestDescriptor::post("/auth/login").json(credentials)?;
        let response: LoginResponse = self.send_json(request).await?;
        if response.access_token.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Login response carried an empty access token".to_string(),
            ));
        }
        self.session().update(&response.access_token)?;
        info!(user = %credentials.id, "Logged in");
        Ok(response)
    }

    pub async fn register(&self, user: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.send(RequestDescriptor::post("/auth/register").json(user)?)
            .await
    }

    /// Log out on the server and drop the local session.
    ///
    /// The local token is removed even when the server call fails; the
    /// server error is still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.send_unit(RequestDescriptor::post("/auth/logout")).await;
        if let Err(ref e) = result {
            warn!(error = %e, "Server logout failed, clearing local session anyway");
        }
        self.session().clear()?;
        info!("Logged out");
        result
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.send_unit(RequestDescriptor::post("/auth/reset-password").json(request)?)
            .await
    }

    /// Ask the server to text a verification code to `phone`.
    pub async fn verify_phone(&self, phone: &str) -> Result<serde_json::Value, ApiError> {
        self.send(RequestDescriptor::post("/auth/verify-phone").json(&json!({ "phone": phone }))?)
            .await
    }

    /// Check whether a user id is already taken.
    pub async fn check_duplicate(&self, id: &str) -> Result<bool, ApiError> {
        let path = format!("/auth/check-duplicate/{}", encode_segment(id));
        let value = self.send(RequestDescriptor::get(path)).await?;
        match value {
            serde_json::Value::Bool(exists) => Ok(exists),
            other => serde_json::from_value::<DuplicateCheck>(other)
                .map(|c| c.exists)
                .map_err(|e| ApiError::InvalidResponse(format!("duplicate check: {}", e))),
        }
    }
}
