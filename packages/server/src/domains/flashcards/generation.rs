//! Drafting flashcards for a document with the completion service.

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::extraction::{extract_flashcards, ExtractedFlashcard};
use super::models::{Difficulty, Flashcard, NewFlashcard};
use crate::domains::documents::Document;
use crate::kernel::{CompletionPrompt, ServerDeps};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const DEFAULT_CARD_COUNT: u32 = 10;
pub const MAX_CARD_COUNT: u32 = 50;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;

const SYSTEM_PROMPT: &str = "You are an expert educational assistant that creates high-quality study flashcards.
Your flashcards should be:
1. Specific and detailed - avoid generic questions
2. Based on actual content from the document
3. Include clear, concise answers
4. Vary in difficulty appropriately
5. Never reference the document title directly in questions
6. Focus on key concepts, definitions, and important details";

const FALLBACK_SOURCE: &str = "AI generation failed, this is a fallback flashcard.";

/// Build the fixed prompt for `count` cards about `title`.
pub fn build_prompt(title: &str, count: u32) -> CompletionPrompt {
    let user = format!(
        "Generate {count} high-quality flashcards based on the document titled \"{title}\".

For each flashcard, follow this exact format:

FRONT: [Specific question or concept]
BACK: [Clear, concise answer]
DIFFICULTY: [easy/medium/hard]
SOURCE: [Relevant text from the document]

Guidelines:
1. Questions should be specific and test understanding
2. Answers should be comprehensive but concise
3. Include source text to verify accuracy
4. Vary difficulty levels appropriately
5. Never use placeholder text or generic questions"
    );

    CompletionPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Placeholder cards saved when the completion service is unavailable.
pub fn fallback_flashcards() -> Vec<NewFlashcard> {
    vec![
        NewFlashcard {
            front: "What are the main components discussed in this document?".to_string(),
            back: "This is a sample flashcard. The actual answer would contain information from your document.".to_string(),
            difficulty: Difficulty::Medium,
            source_text: FALLBACK_SOURCE.to_string(),
        },
        NewFlashcard {
            front: "Describe the key principles outlined in the document".to_string(),
            back: "This is another sample answer. The OpenAI API encountered an error.".to_string(),
            difficulty: Difficulty::Medium,
            source_text: FALLBACK_SOURCE.to_string(),
        },
    ]
}

/// Draft cards for `document` and persist them.
///
/// A failed or timed-out completion is replaced by [`fallback_flashcards`].
/// A completion that succeeds but contains no recognizable cards saves
/// nothing and returns an empty list.
pub async fn generate_for_document(
    deps: &ServerDeps,
    document: &Document,
    count: u32,
) -> Result<Vec<Flashcard>> {
    let prompt = build_prompt(&document.title, count);

    let outcome = tokio::time::timeout(deps.completion_timeout, deps.completion.complete(&prompt))
        .await
        .map_err(|_| anyhow::anyhow!("completion timed out after {:?}", deps.completion_timeout))
        .and_then(|result| result);

    let cards = match outcome {
        Ok(text) => {
            let cards: Vec<NewFlashcard> = extract_flashcards(&text)
                .into_iter()
                .map(ExtractedFlashcard::into_new_flashcard)
                .collect();
            info!(
                document_id = %document.id,
                requested = count,
                extracted = cards.len(),
                "Extracted flashcards from completion"
            );
            cards
        }
        Err(e) => {
            warn!(
                document_id = %document.id,
                error = %format!("{:#}", e),
                "Completion failed, saving fallback flashcards"
            );
            fallback_flashcards()
        }
    };

    if cards.is_empty() {
        return Ok(Vec::new());
    }

    deps.store
        .create_flashcards(document.id, &cards)
        .await
        .context("Failed to save generated flashcards")
}
