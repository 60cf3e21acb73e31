use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Asset categories with their own detail endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Cash,
    Stocks,
    Bonds,
    Coins,
}

impl AssetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Cash => "cash",
            AssetKind::Stocks => "stocks",
            AssetKind::Bonds => "bonds",
            AssetKind::Coins => "coins",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Dashboard total with a per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub total_asset: i64,
    pub total_change: i64,
    pub change_percent: f64,
    pub updated_at: Option<NaiveDateTime>,
    pub breakdown: AssetBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AssetBreakdown {
    #[serde(default)]
    pub cash: AssetBucket,
    #[serde(default)]
    pub stocks: AssetBucket,
    #[serde(default)]
    pub bonds: AssetBucket,
    #[serde(default)]
    pub coins: AssetBucket,
}

impl AssetBreakdown {
    /// Categories in display order with their values
    pub fn buckets(&self) -> [(AssetKind, &AssetBucket); 4] {
        [
            (AssetKind::Cash, &self.cash),
            (AssetKind::Stocks, &self.stocks),
            (AssetKind::Bonds, &self.bonds),
            (AssetKind::Coins, &self.coins),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AssetBucket {
    pub amount: i64,
    pub change: i64,
    pub change_percent: f64,
}

/// Stock account valuation split by market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct StockAccountDetail {
    pub domestic: AccountValuation,
    pub overseas: AccountValuation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AccountValuation {
    pub estimated_asset: i64,
    /// Deposit available for settlement in two business days
    pub d2_deposit: i64,
    pub total_profit: i64,
    pub profit_percent: f64,
    pub total_purchase: i64,
    pub total_valuation: i64,
}

/// A position held in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub name_en: Option<String>,
    pub current_price: f64,
    pub purchase_price: f64,
    pub profit: f64,
    pub profit_percent: f64,
    pub avg_price: f64,
    pub quantity: u64,
    pub logo: Option<String>,
}

impl Holding {
    pub fn market_value(&self) -> f64 {
        self.current_price * self.quantity as f64
    }
}
