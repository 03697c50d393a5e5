use serde::{Deserialize, Serialize};

/// Serializable robot settings, meant to be embedded in an application's own
/// config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Full webhook URL, including the `access_token` query parameter.
    pub webhook: String,
    /// Signing secret (`SEC...`); absent or empty disables signing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl RobotConfig {
    #[must_use]
    pub fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            secret: None,
        }
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_secret() {
        let config: RobotConfig = serde_json::from_str(
            r#"{"webhook":"https://oapi.dingtalk.com/robot/send?access_token=abc"}"#,
        )
        .unwrap();
        assert_eq!(
            config.webhook,
            "https://oapi.dingtalk.com/robot/send?access_token=abc"
        );
        assert_eq!(config.secret, None);
    }

    #[test]
    fn test_decode_with_secret() {
        let config: RobotConfig =
            serde_json::from_str(r#"{"webhook":"https://h/send?access_token=a","secret":"SEC1"}"#)
                .unwrap();
        assert_eq!(config.secret.as_deref(), Some("SEC1"));
    }

    #[test]
    fn test_missing_webhook_is_rejected() {
        assert!(serde_json::from_str::<RobotConfig>(r#"{"secret":"SEC1"}"#).is_err());
    }

    #[test]
    fn test_secret_omitted_when_unset() {
        let json = serde_json::to_value(RobotConfig::new("https://h")).unwrap();
        assert!(json.get("secret").is_none());

        let json = serde_json::to_value(RobotConfig::new("https://h").with_secret("s")).unwrap();
        assert_eq!(json["secret"], "s");
    }
}
