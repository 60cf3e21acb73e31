use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Market indices keyed by name (`kospi`, `kosdaq`, ...)
pub type MarketIndices = BTreeMap<String, IndexQuote>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: String,
    pub country: Option<String>,
    pub rate: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// A news item as it appears in lists and the home feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct NewsHeadline {
    pub id: u64,
    pub title: String,
    pub source: Option<String>,
    pub description: Option<String>,
    /// Free-form display date; the server sends both dates and clock times
    pub date: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AiRecommendation {
    pub title: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indices() {
        let json = r#"{"kospi":{"value":2345,"change":-56,"changePercent":-0.2},"kosdaq":{"value":932,"change":-23,"changePercent":-0.32}}"#;
        let indices: MarketIndices = serde_json::from_str(json).unwrap();
        assert_eq!(indices.len(), 2);
        assert_eq!(indices["kosdaq"].change_percent, -0.32);
    }

    #[test]
    fn test_parse_top_news_mixed_shapes() {
        let json = r#"[{"id":1,"title":"테슬라 로보택시 출시 예정","source":"블룸버그","date":"2024-10-24 08:10","image":"https://picsum.photos/200/150?random=1"},{"id":2,"title":"Title","description":"Description","date":"9:41 AM"}]"#;
        let news: Vec<NewsHeadline> = serde_json::from_str(json).unwrap();
        assert_eq!(news[0].source.as_deref(), Some("블룸버그"));
        assert!(news[1].image.is_none());
        assert_eq!(news[1].description.as_deref(), Some("Description"));
    }

    #[test]
    fn test_parse_exchange_rates_and_recommendations() {
        let rates: Vec<ExchangeRate> = serde_json::from_str(
            r#"[{"currency":"USD","country":"미국","rate":1342,"change":7,"changePercent":0.12}]"#,
        )
        .unwrap();
        assert_eq!(rates[0].rate, 1342.0);

        let recs: Vec<AiRecommendation> = serde_json::from_str(
            r#"[{"title":"Title","description":"Description","time":"9:41 AM","image":null}]"#,
        )
        .unwrap();
        assert!(recs[0].image.is_none());
    }
}
