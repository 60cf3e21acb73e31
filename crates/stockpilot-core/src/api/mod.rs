//! REST API client module for the StockPilot brokerage backend.
//!
//! This module provides the `ApiClient`, a request pipeline that runs every
//! call through the same two stages:
//!
//! - outbound: request interceptors decorate the request (the default one
//!   attaches `Authorization: Bearer <token>` when a session exists)
//! - inbound: successful bodies are unwrapped to JSON; failures are shown to
//!   response interceptors (the default one ends the session on 401) and
//!   then returned to the caller unchanged
//!
//! Endpoint groups (auth, user, assets, stocks, ...) live in `endpoints` as
//! `impl ApiClient` blocks.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod interceptor;
pub mod request;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ApiError;
pub use interceptor::{BearerAuth, Redirect, RequestInterceptor, ResponseInterceptor, SessionExpiry};
pub use request::RequestDescriptor;
