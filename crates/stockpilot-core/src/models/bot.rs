use serde::{Deserialize, Serialize};

use super::asset::Holding;

/// State of the AI trading bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BotStatus {
    pub enabled: bool,
    pub total_investment: f64,
    pub total_valuation: f64,
    pub profit_percent: f64,
    pub current_stock: Option<Holding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BotAnalysis {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<AnalysisPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AnalysisPoint {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bot_status() {
        let json = r#"{"enabled":true,"totalInvestment":1000000,"totalValuation":1234292,"profitPercent":23.2,"currentStock":{"symbol":"AMZN","name":"아마존","currentPrice":23400,"purchasePrice":140000,"profit":20000,"profitPercent":34,"avgPrice":20000,"quantity":124}}"#;
        let status: BotStatus = serde_json::from_str(json).unwrap();
        assert!(status.enabled);
        let stock = status.current_stock.unwrap();
        assert_eq!(stock.quantity, 124);
        assert!(stock.logo.is_none());
    }

    #[test]
    fn test_parse_bot_analysis() {
        let json = r#"{"symbol":"AMZN","name":"Amazon","points":[{"title":"지속적인 매출 성장","content":"..."}]}"#;
        let analysis: BotAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.points.len(), 1);
    }
}
