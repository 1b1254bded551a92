//! Minimal OpenAI chat completions client
//!
//! A small client for the OpenAI chat completions endpoint with no
//! domain-specific logic. Transient failures (network errors, rate limits,
//! 5xx responses) are retried a bounded number of times.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::new(api_key);
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new("gpt-3.5-turbo")
//!             .message(Message::system("You are terse."))
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_RETRIES: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);
const MIN_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(1);

/// OpenAI chat completions client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    max_retries: u32,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set a custom base URL (for Azure, proxies, local stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Number of additional attempts after a transient failure.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAIError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Fit every attempt and its backoff inside `total`.
    ///
    /// Call after [`with_max_retries`](Self::with_max_retries); the split
    /// depends on the retry count.
    pub fn with_total_timeout(self, total: Duration) -> Result<Self> {
        let timeout = attempt_timeout(total, self.max_retries);
        self.with_timeout(timeout)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Chat completion with bounded retries.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let mut attempt = 0;
        loop {
            match self.chat_completion_once(&request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        error = %e,
                        attempt,
                        max_retries = self.max_retries,
                        "OpenAI request failed, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn chat_completion_once(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| OpenAIError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or(OpenAIError::EmptyResponse)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}

/// Per-attempt share of `total` once the backoff sleeps are set aside.
fn attempt_timeout(total: Duration, max_retries: u32) -> Duration {
    let backoff: Duration = (1..=max_retries).map(|attempt| RETRY_BACKOFF * attempt).sum();
    let per_attempt = total.saturating_sub(backoff) / (max_retries + 1);
    per_attempt.max(MIN_ATTEMPT_TIMEOUT)
}
