use thiserror::Error;

/// Errors raised by the knowledge base client
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The remote service answered with a non-success status
    #[error("Remote error {code}: {message}")]
    Remote { code: u16, message: String },

    /// No response was received at all
    #[error("Transport error {code}: {message}")]
    Transport { code: u16, message: String },

    /// A body that could not be encoded or decoded as the expected JSON
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn remote(code: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            code,
            message: message.into(),
        }
    }

    pub fn transport(code: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            code,
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Numeric code carried by remote and transport errors
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Remote { code, .. } | Self::Transport { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Message without the variant prefix added by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message }
            | Self::Validation { message }
            | Self::Remote { message, .. }
            | Self::Transport { message, .. }
            | Self::Serialization { message } => message,
        }
    }
}
