//! Data models for the StockPilot API.
//!
//! This module contains the request and response types exchanged with the
//! backend. All of them use camelCase field names on the wire.
//!
//! - `UserProfile`, `UserSettings`: account and preferences
//! - `LoginRequest`, `LoginResponse`, `RegisterRequest`: auth flows
//! - `AssetSummary`, `StockAccountDetail`, `Holding`: portfolio
//! - `CompanyInfo`, `SearchResult`: stocks and companies
//! - `TradingOrders`, `HistoryEntry`, `OrderRequest`: trading
//! - `NewsDetail`, `NewsHeadline`: news
//! - `IndexQuote`, `ExchangeRate`, `AiRecommendation`: market overview
//! - `BotStatus`, `BotAnalysis`: the AI trading bot

pub mod asset;
pub mod auth;
pub mod bot;
pub mod company;
pub mod market;
pub mod news;
pub mod trading;
pub mod user;

pub use asset::{AccountValuation, AssetBreakdown, AssetBucket, AssetKind, AssetSummary, Holding, StockAccountDetail};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};
pub use bot::{AnalysisPoint, BotAnalysis, BotStatus};
pub use company::{CompanyInfo, SearchResult, ValuationScores};
pub use market::{AiRecommendation, ExchangeRate, IndexQuote, MarketIndices, NewsHeadline};
pub use news::{NewsDetail, RelatedNews};
pub use trading::{HistoryEntry, HistoryKind, OrderRequest, OrderSide, PendingOrder, TradingOrders, TransactionSummary, TransactionTotal};
pub use user::{BrokerAccount, NotificationSettings, NotificationToggles, UserProfile, UserSettings};
