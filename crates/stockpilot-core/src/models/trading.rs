use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => f.pad("buy"),
            OrderSide::Sell => f.pad("sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            other => Err(format!("unknown order side: {}", other)),
        }
    }
}

/// An order that has not been filled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PendingOrder {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub symbol: String,
    pub name: Option<String>,
    pub price: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TradingOrders {
    #[serde(default)]
    pub pending: Vec<PendingOrder>,
    /// Orders scheduled for a later session
    #[serde(default)]
    pub reserved: Vec<PendingOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Buy,
    Sell,
    Dividend,
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
}

impl HistoryEntry {
    /// Name shown in the history list: the stock name, else the label
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .or(self.label.as_deref())
            .or(self.symbol.as_deref())
            .unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TransactionSummary {
    pub buy: Option<TransactionTotal>,
    pub sell: Option<TransactionTotal>,
    pub other: Option<TransactionTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TransactionTotal {
    pub amount: f64,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
}

/// Body of a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub quantity: u64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trading_orders() {
        let json = r#"{"pending":[{"type":"sell","symbol":"AMZN","name":"아마존","price":4262000,"currency":"$"},{"type":"buy","symbol":"AMZN","name":"아마존","price":4262000,"currency":"$"}],"reserved":[{"type":"buy","symbol":"AMZN","name":"아마존","price":2532000,"currency":"$"}]}"#;
        let orders: TradingOrders = serde_json::from_str(json).unwrap();
        assert_eq!(orders.pending.len(), 2);
        assert_eq!(orders.pending[0].side, OrderSide::Sell);
        assert_eq!(orders.reserved[0].price, 2_532_000.0);
    }

    #[test]
    fn test_parse_history_entries() {
        let json = r#"[{"type":"sell","symbol":"AMZN","name":"아마존","amount":4262000,"currency":"$"},{"type":"dividend","label":"원화","amount":234520,"currency":"$"}]"#;
        let history: Vec<HistoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(history[0].title(), "아마존");
        assert_eq!(history[1].kind, HistoryKind::Dividend);
        assert_eq!(history[1].title(), "원화");
    }

    #[test]
    fn test_order_request_wire_format() {
        let order = OrderRequest {
            symbol: "TSLA".to_string(),
            side: OrderSide::Buy,
            quantity: 3,
            price: 251.5,
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            serde_json::json!({"symbol":"TSLA","type":"buy","quantity":3,"price":251.5})
        );
    }

    #[test]
    fn test_order_side_from_str() {
        assert_eq!("BUY".parse::<OrderSide>(), Ok(OrderSide::Buy));
        assert_eq!("sell".parse::<OrderSide>(), Ok(OrderSide::Sell));
        assert!("hold".parse::<OrderSide>().is_err());
    }
}
