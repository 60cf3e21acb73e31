use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    pub id: u64,
    pub title: String,
    pub source: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub content: String,
    #[serde(default)]
    pub related_news: Vec<RelatedNews>,
}

impl NewsDetail {
    /// Article body split into paragraphs, blank lines dropped
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RelatedNews {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
}
