use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::domain::DomainError;

/// Default QnA Maker v2.0 knowledge base endpoint
pub const DEFAULT_BASE_ENDPOINT: &str =
    "https://westus.api.cognitive.microsoft.com/qnamaker/v2.0/knowledgebases/";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

/// Knowledge base client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_endpoint: String,
    /// Seconds, fractional values allowed
    #[serde(deserialize_with = "duration_from_secs")]
    pub timeout: Duration,
    pub subscription_key: String,
    /// Send one `hi`/`Hello` pair on create when no pairs and no URLs are given
    pub seed_empty_knowledge_base: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            subscription_key: String::new(),
            seed_empty_knowledge_base: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.base_endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_seed_empty_knowledge_base(mut self, enabled: bool) -> Self {
        self.seed_empty_knowledge_base = enabled;
        self
    }

    /// Reject configurations the client cannot be built from
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.subscription_key.trim().is_empty() {
            return Err(DomainError::configuration("need: subscription_key"));
        }

        if self.base_endpoint.trim().is_empty() {
            return Err(DomainError::configuration("need: base_endpoint"));
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("QNA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_endpoint, DEFAULT_BASE_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(!config.seed_empty_knowledge_base);
    }

    #[test]
    fn test_missing_subscription_key() {
        let error = ClientConfig::default().validate().unwrap_err();
        assert!(matches!(error, DomainError::Configuration { .. }));

        let error = ClientConfig::new("   ").validate().unwrap_err();
        assert!(matches!(error, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("key")
            .with_base_endpoint("http://localhost:8080/kb")
            .with_timeout(Duration::from_millis(500));

        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "client": {"subscription_key": "abc", "timeout": 20},
            "logging": {"format": "json"}
        }))
        .unwrap();

        assert_eq!(config.client.subscription_key, "abc");
        assert_eq!(config.client.timeout, Duration::from_secs(20));
        assert_eq!(config.client.base_endpoint, DEFAULT_BASE_ENDPOINT);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let result: Result<ClientConfig, _> =
            serde_json::from_value(serde_json::json!({"timeout": -1.0}));
        assert!(result.is_err());
    }
}
