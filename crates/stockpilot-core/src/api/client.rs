//! API client for communicating with the StockPilot REST API.
//!
//! This module provides the `ApiClient` struct, which runs every request
//! through the interceptor pipeline before and after the HTTP transport.

use std::sync::Arc;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::Session;
use crate::config::ClientConfig;

use super::interceptor::{BearerAuth, Redirect, RequestInterceptor, ResponseInterceptor, SessionExpiry};
use super::{ApiError, RequestDescriptor};

/// API client for the StockPilot backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
    request_interceptors: Arc<Vec<Arc<dyn RequestInterceptor>>>,
    response_interceptors: Arc<Vec<Arc<dyn ResponseInterceptor>>>,
}

impl ApiClient {
    /// Create a client with the standard pipeline: bearer token attachment
    /// on the way out, sign-out and redirect to login on 401.
    pub fn new(
        config: &ClientConfig,
        session: Session,
        redirect: Arc<dyn Redirect>,
    ) -> Result<Self, ApiError> {
        Self::builder(config, session.clone())
            .request_interceptor(Arc::new(BearerAuth::new(session.clone())))
            .response_interceptor(Arc::new(SessionExpiry::new(session, redirect)))
            .build()
    }

    /// Start a client with an empty pipeline.
    pub fn builder(config: &ClientConfig, session: Session) -> ApiClientBuilder {
        ApiClientBuilder {
            config: config.clone(),
            session,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run the outbound stage on a request without sending it.
    pub fn prepare(&self, mut request: RequestDescriptor) -> RequestDescriptor {
        for interceptor in self.request_interceptors.iter() {
            interceptor.on_request(&mut request);
        }
        request
    }

    /// Send a request through the pipeline and return the JSON payload.
    ///
    /// A single attempt is made; failures are reported to the response
    /// interceptors and then returned as-is.
    pub async fn send(&self, request: RequestDescriptor) -> Result<Value, ApiError> {
        let request = self.prepare(request);
        let result = self.dispatch(&request).await;
        if let Err(ref err) = result {
            debug!(method = %request.method, path = %request.path, error = %err, "Request failed");
            for interceptor in self.response_interceptors.iter() {
                interceptor.on_error(&request, err);
            }
        }
        result
    }

    /// Send a request and deserialize the payload into `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T, ApiError> {
        let path = request.path.clone();
        let value = self.send(request).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e)))
    }

    /// Send a request whose response body the caller does not need.
    pub async fn send_unit(&self, request: RequestDescriptor) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn dispatch(&self, request: &RequestDescriptor) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        debug!(method = %request.method, url = %url, authenticated = request.authorization().is_some(), "Sending request");

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let response = Self::check_response(response).await?;

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e)))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

/// Assembles an `ApiClient` with a custom interceptor pipeline.
pub struct ApiClientBuilder {
    config: ClientConfig,
    session: Session,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Interceptors run in the order they are added.
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(self.config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(ApiClient {
            client,
            base_url: self.config.api_base_url.trim_end_matches('/').to_string(),
            session: self.session,
            request_interceptors: Arc::new(self.request_interceptors),
            response_interceptors: Arc::new(self.response_interceptors),
        })
    }
}
