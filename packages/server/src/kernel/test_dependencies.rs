// Test doubles for kernel services
//
// Provides a scripted completion service that can be injected into
// ServerDeps for tests and local runs without an API key.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseCompletionService, CompletionPrompt, MemoryStore, ServerDeps};

/// One scripted outcome for a `complete` call.
#[derive(Debug, Clone)]
pub enum MockCompletion {
    Text(String),
    Fail(String),
    /// Sleep before answering, to exercise caller timeouts
    Delayed(Duration, String),
}

/// Completion service that replays queued outcomes and records prompts.
///
/// When the queue is empty it answers with an empty string.
#[derive(Default)]
pub struct MockCompletionService {
    responses: Mutex<Vec<MockCompletion>>,
    calls: Mutex<Vec<CompletionPrompt>>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockCompletion::Text(text.to_string()));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockCompletion::Fail(message.to_string()));
        self
    }

    pub fn with_delayed_response(self, delay: Duration, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockCompletion::Delayed(delay, text.to_string()));
        self
    }

    /// Prompts received so far
    pub fn calls(&self) -> Vec<CompletionPrompt> {
        self.calls.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> Option<MockCompletion> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            None
        } else {
            Some(responses.remove(0))
        }
    }
}

#[async_trait]
impl BaseCompletionService for MockCompletionService {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.clone());

        match self.next_outcome() {
            None => Ok(String::new()),
            Some(MockCompletion::Text(text)) => Ok(text),
            Some(MockCompletion::Fail(message)) => Err(anyhow::anyhow!(message)),
            Some(MockCompletion::Delayed(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
        }
    }
}

/// Dependencies wired to in-memory fakes.
pub struct TestDependencies {
    pub store: Arc<MemoryStore>,
    pub completion: Arc<MockCompletionService>,
    pub completion_timeout: Duration,
}

impl TestDependencies {
    pub fn new(completion: MockCompletionService) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            completion: Arc::new(completion),
            completion_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.store.clone(),
            self.completion.clone(),
            self.completion_timeout,
        )
    }
}
