//! QnA Maker knowledge base client
//!
//! Typed access to the QnA Maker v2.0 knowledge base API:
//! - Create, update, publish and delete knowledge bases
//! - Ask a knowledge base for answers to a question
//! - Remote error envelopes mapped to numeric codes

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, ClientConfig};
pub use domain::DomainError;
pub use infrastructure::knowledge_base::KnowledgeBaseClient;

use tracing::info;

/// Create a client from `config/*` files and `QNA__*` environment variables
pub fn create_client() -> Result<KnowledgeBaseClient, DomainError> {
    let config = AppConfig::load()
        .map_err(|e| DomainError::configuration(format!("Failed to load configuration: {}", e)))?;

    create_client_with_config(&config)
}

/// Create a client from an already loaded configuration
pub fn create_client_with_config(config: &AppConfig) -> Result<KnowledgeBaseClient, DomainError> {
    let client = KnowledgeBaseClient::new(config.client.clone())?;

    info!(
        base_endpoint = %config.client.base_endpoint,
        timeout_ms = config.client.timeout.as_millis() as u64,
        "Knowledge base client ready"
    );

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_config() {
        let mut config = AppConfig::default();
        assert!(matches!(
            create_client_with_config(&config),
            Err(DomainError::Configuration { .. })
        ));

        config.client.subscription_key = "key".to_string();
        let client = create_client_with_config(&config).unwrap();
        assert_eq!(client.config().subscription_key, "key");
    }
}
