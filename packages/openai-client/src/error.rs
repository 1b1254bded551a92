//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The API answered but returned no choices
    #[error("Empty response from OpenAI")]
    EmptyResponse,
}

impl OpenAIError {
    /// Whether another attempt at the same request may succeed.
    ///
    /// Network failures, rate limits and server-side errors are transient;
    /// everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            OpenAIError::Network(_) => true,
            OpenAIError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limits_and_server_errors_are_retryable() {
        let rate_limited = OpenAIError::Api {
            status: 429,
            message: "slow down".into(),
        };
        let bad_gateway = OpenAIError::Api {
            status: 502,
            message: "upstream".into(),
        };
        assert!(rate_limited.is_retryable());
        assert!(bad_gateway.is_retryable());
        assert!(OpenAIError::Network("reset".into()).is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let unauthorized = OpenAIError::Api {
            status: 401,
            message: "bad key".into(),
        };
        assert!(!unauthorized.is_retryable());
        assert!(!OpenAIError::Parse("eof".into()).is_retryable());
        assert!(!OpenAIError::EmptyResponse.is_retryable());
    }
}
