// Completion service backed by the OpenAI chat completions API.
//
// Built once at startup and shared through ServerDeps.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::{BaseCompletionService, CompletionPrompt};

#[derive(Clone)]
pub struct OpenAICompletionService {
    client: OpenAIClient,
    model: String,
}

impl OpenAICompletionService {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn build_request(&self, prompt: &CompletionPrompt) -> ChatRequest {
        ChatRequest::new(&self.model)
            .message(Message::system(&prompt.system))
            .message(Message::user(&prompt.user))
            .temperature(prompt.temperature)
            .max_tokens(prompt.max_tokens)
    }
}

#[async_trait]
impl BaseCompletionService for OpenAICompletionService {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String> {
        tracing::info!(
            model = %self.model,
            prompt_length = prompt.user.len(),
            "Calling OpenAI API"
        );

        let response = self
            .client
            .chat_completion(self.build_request(prompt))
            .await
            .context("OpenAI chat completion failed")?;

        tracing::info!(
            response_length = response.content.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "OpenAI API response received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_prompt_and_sampling() {
        let service = OpenAICompletionService::new(OpenAIClient::new("sk-test"), "gpt-3.5-turbo");
        let prompt = CompletionPrompt {
            system: "be an educator".into(),
            user: "make cards".into(),
            temperature: 0.7,
            max_tokens: 1000,
        };

        let request = service.build_request(&prompt);

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(
            request.messages,
            vec![Message::system("be an educator"), Message::user("make cards")]
        );
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(1000));
    }
}
