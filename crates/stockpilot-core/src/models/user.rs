use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The signed-in user and the brokerage account linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub birth: Option<NaiveDate>,
    pub broker: Option<BrokerAccount>,
}

/// Brokerage credentials as the server echoes them back (secrets masked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BrokerAccount {
    pub name: String,
    pub account_number: String,
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
}

impl BrokerAccount {
    /// Account number with all but the last four digits hidden.
    pub fn masked_account_number(&self) -> String {
        let digits = self.account_number.chars().filter(char::is_ascii_digit).count();
        let keep_from = digits.saturating_sub(4);
        let mut seen = 0;
        self.account_number
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    seen += 1;
                    if seen <= keep_from {
                        return '*';
                    }
                }
                c
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Asset categories in dashboard order (`stocks_overseas`, `coins`, ...)
    #[serde(default)]
    pub asset_order: Vec<String>,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub auto_login: bool,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct NotificationSettings {
    #[serde(default)]
    pub stocks: NotificationToggles,
    #[serde(default)]
    pub coins: NotificationToggles,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct NotificationToggles {
    #[serde(default)]
    pub news: bool,
    #[serde(default)]
    pub trading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_profile() {
        let json = r#"{"id":"test_id","name":"test_name","phone":"010-1111-2222","birth":"2024-06-10","broker":{"name":"한국 투자 증권","accountNumber":"01151321-02315","appKey":"****","appSecret":"**************"}}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "test_id");
        assert_eq!(profile.birth, NaiveDate::from_ymd_opt(2024, 6, 10));
        let broker = profile.broker.unwrap();
        assert_eq!(broker.account_number, "01151321-02315");
        assert_eq!(broker.masked_account_number(), "********-*2315");
    }

    #[test]
    fn test_parse_settings_with_missing_fields() {
        let json = r#"{"assetOrder":["stocks_overseas","stocks_domestic","coins","bonds"],"darkMode":true,"notifications":{"stocks":{"news":true,"trading":false}}}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.asset_order.len(), 4);
        assert!(settings.dark_mode);
        assert!(!settings.auto_login);
        assert!(settings.notifications.stocks.news);
        assert!(!settings.notifications.coins.trading);
    }
}
