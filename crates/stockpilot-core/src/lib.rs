//! StockPilot core library.
//!
//! This crate holds everything the StockPilot client needs below the
//! presentation layer:
//!
//! - `routes`: the route table, the access guard and the navigator
//! - `api`: the authenticated request pipeline and the typed endpoint groups
//! - `auth`: session token storage and remembered logins
//! - `models`: request and response types for the brokerage API
//! - `config`: environment-driven client configuration and persisted settings
//! - `utils`: display formatting helpers

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod routes;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{Session, TokenStore};
pub use config::{ClientConfig, Settings};
pub use routes::{authorize, BuildMode, Decision, Navigator};
