use serde::{Deserialize, Serialize};

use super::user::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Login result. Only the access token is required; the rest is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub id: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub id: String,
    pub phone: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response_token_only() {
        let resp: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_login_response_requires_token() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"user":null}"#).is_err());
    }

    #[test]
    fn test_register_request_omits_empty_optionals() {
        let req = RegisterRequest {
            id: "u1".to_string(),
            password: "pw".to_string(),
            name: "Kim".to_string(),
            phone: "010-0000-0000".to_string(),
            birth: None,
            verification_code: Some("123456".to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("birth").is_none());
        assert_eq!(json["verificationCode"], "123456");
    }
}
