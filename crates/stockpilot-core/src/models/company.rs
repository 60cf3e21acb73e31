use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub symbol: String,
    pub name: String,
    pub name_en: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub employees: Option<u64>,
    pub shares: Option<u64>,
    pub currency: Option<String>,
    pub market_cap: Option<f64>,
    pub dividend: Option<String>,
    pub description: Option<String>,
    pub scores: Option<ValuationScores>,
}

/// Valuation ratios scored 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ValuationScores {
    pub per: u8,
    pub pbr: u8,
    pub roe: u8,
    pub eps: u8,
}

impl ValuationScores {
    pub fn average(&self) -> f64 {
        (self.per as f64 + self.pbr as f64 + self.roe as f64 + self.eps as f64) / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_company_info() {
        let json = r#"{"symbol":"AMZN","name":"아마존","nameEn":"Amazon.com, Inc.","address":"Seattle, WA 98109-5210 410","website":"http://www.aboutamazon.com","sector":"경기 소비재","employees":1525000,"shares":10515000000,"currency":"USD","marketCap":2189010,"dividend":"2022-12-28 (현금배당)","description":"...","scores":{"per":70,"pbr":70,"roe":70,"eps":60}}"#;
        let info: CompanyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.shares, Some(10_515_000_000));
        assert_eq!(info.scores.unwrap().average(), 67.5);
    }

    #[test]
    fn test_parse_search_results() {
        let json = r#"[{"symbol":"TSLA","name":"테슬라","isFavorite":true},{"symbol":"AMZN","name":"아마존"}]"#;
        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        assert!(results[0].is_favorite);
        assert!(!results[1].is_favorite);
    }
}
