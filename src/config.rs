//! Connector configuration.

use serde::{Deserialize, Serialize};

/// Telegram login connector configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectorConfig {
    /// Enable the connector.
    #[serde(default)]
    pub enabled: bool,

    /// Bot token issued by BotFather. Signing credential; never logged.
    #[serde(default)]
    pub bot_token: String,

    /// Bot username the login widget is bound to (without leading '@').
    #[serde(default)]
    pub bot_username: String,

    /// Path the widget redirects back to after authentication.
    #[serde(default)]
    pub redirect_path: String,

    /// Maximum accepted assertion age in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_secs: i64,

    /// Tolerance in seconds for assertion timestamps ahead of the clock.
    #[serde(default = "default_future_skew")]
    pub future_skew_secs: i64,
}

fn default_max_age() -> i64 {
    86400 // 24 hours
}

fn default_future_skew() -> i64 {
    300 // 5 minutes
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_token: String::new(),
            bot_username: String::new(),
            redirect_path: String::new(),
            max_age_secs: default_max_age(),
            future_skew_secs: default_future_skew(),
        }
    }
}

impl ConnectorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.bot_token.is_empty() {
            return Err("Telegram bot_token is required".to_string());
        }

        if self.max_age_secs <= 0 {
            return Err("Telegram max_age_secs must be positive".to_string());
        }

        if self.future_skew_secs < 0 {
            return Err("Telegram future_skew_secs must not be negative".to_string());
        }

        Ok(())
    }

    /// Load configuration from `TELEGRAM_*` environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN`, `TELEGRAM_BOT_USERNAME` and
    /// `TELEGRAM_REDIRECT_PATH`; the connector is enabled when a token is
    /// present.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            config.bot_token = token;
        }
        if let Ok(username) = std::env::var("TELEGRAM_BOT_USERNAME") {
            config.bot_username = username;
        }
        if let Ok(path) = std::env::var("TELEGRAM_REDIRECT_PATH") {
            config.redirect_path = path;
        }

        config.enabled = !config.bot_token.is_empty();
        config
    }
}

impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bot_token = if self.bot_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };

        f.debug_struct("ConnectorConfig")
            .field("enabled", &self.enabled)
            .field("bot_token", &bot_token)
            .field("bot_username", &self.bot_username)
            .field("redirect_path", &self.redirect_path)
            .field("max_age_secs", &self.max_age_secs)
            .field("future_skew_secs", &self.future_skew_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectorConfig::default();
        assert!(!config.enabled);
        assert!(config.bot_token.is_empty());
        assert_eq!(config.max_age_secs, 86400);
        assert_eq!(config.future_skew_secs, 300);
    }

    #[test]
    fn test_validation() {
        let mut config = ConnectorConfig::default();
        assert!(config.validate().is_ok()); // disabled is valid

        config.enabled = true;
        assert!(config.validate().is_err()); // missing bot_token

        config.bot_token = "123456:test-token".to_string();
        assert!(config.validate().is_ok());

        config.max_age_secs = 0;
        assert!(config.validate().is_err());

        config.max_age_secs = 86400;
        config.future_skew_secs = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ConnectorConfig =
            serde_json::from_str(r#"{"bot_token": "123456:test-token"}"#).unwrap();
        assert_eq!(config.bot_token, "123456:test-token");
        assert_eq!(config.max_age_secs, 86400);
        assert_eq!(config.future_skew_secs, 300);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ConnectorConfig {
            bot_token: "123456:test-token".to_string(),
            ..Default::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("test-token"));
        assert!(debug.contains("<redacted>"));

        let unset = format!("{:?}", ConnectorConfig::default());
        assert!(unset.contains("<unset>"));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123456:env-token");
        std::env::set_var("TELEGRAM_BOT_USERNAME", "env_bot");
        std::env::set_var("TELEGRAM_REDIRECT_PATH", "/auth/telegram");

        let config = ConnectorConfig::from_env();
        assert!(config.enabled);
        assert_eq!(config.bot_token, "123456:env-token");
        assert_eq!(config.bot_username, "env_bot");
        assert_eq!(config.redirect_path, "/auth/telegram");

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_BOT_USERNAME");
        std::env::remove_var("TELEGRAM_REDIRECT_PATH");
    }
}
