//! Flashcard extraction from free-form completion text.
//!
//! Models are asked for blocks of the form
//!
//! ```text
//! FRONT: <question>
//! BACK: <answer>
//! DIFFICULTY: <easy|medium|hard>
//! SOURCE: <supporting excerpt, may span lines>
//! ```
//!
//! but do not always comply. Extraction runs two strategies:
//!
//! 1. [`scan_marked_blocks`] finds complete, in-order blocks anywhere in the text.
//! 2. [`scan_paragraphs`] runs only when (1) found nothing. It treats each
//!    blank-line separated paragraph as a candidate card and picks out the
//!    marker lines in any order.
//!
//! Neither strategy fails; unparseable input yields no cards. Cards with an
//! empty front or back are never emitted.

use std::sync::LazyLock;

use regex::Regex;

use super::models::{Difficulty, NewFlashcard};

const DEFAULT_DIFFICULTY: &str = "medium";

/// FRONT through the first line of SOURCE. SOURCE continuation lines are
/// consumed by hand in [`source_end`].
static RE_BLOCK_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"FRONT:[ \t]*([^\n]*)\n[ \t]*BACK:[ \t]*([^\n]*)\n[ \t]*DIFFICULTY:[ \t]*([^\n]*)\n[ \t]*SOURCE:[ \t]*([^\n]*)",
    )
    .expect("block head pattern is valid")
});

static RE_PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("paragraph break pattern is valid"));

/// A card as read from completion text, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFlashcard {
    pub front: String,
    pub back: String,
    /// Lowercased as written by the model; not checked against the known levels
    pub difficulty: String,
    pub source: String,
}

impl ExtractedFlashcard {
    fn new(front: &str, back: &str, difficulty: Option<&str>, source: Option<&str>) -> Option<Self> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            return None;
        }

        let difficulty = difficulty
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());

        Some(Self {
            front: front.to_string(),
            back: back.to_string(),
            difficulty,
            source: source.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    /// Normalize for storage. Unknown difficulty labels become `Medium`.
    pub fn into_new_flashcard(self) -> NewFlashcard {
        NewFlashcard {
            difficulty: Difficulty::from_label(&self.difficulty),
            front: self.front,
            back: self.back,
            source_text: self.source,
        }
    }
}

/// Extract cards in order of appearance.
pub fn extract_flashcards(text: &str) -> Vec<ExtractedFlashcard> {
    let cards = scan_marked_blocks(text);
    if !cards.is_empty() {
        return cards;
    }

    let cards = scan_paragraphs(text);
    if !cards.is_empty() {
        tracing::debug!(count = cards.len(), "Recovered flashcards from paragraph fallback");
    }
    cards
}

/// Primary strategy: complete FRONT/BACK/DIFFICULTY/SOURCE blocks, scanned
/// left to right without overlap.
pub fn scan_marked_blocks(text: &str) -> Vec<ExtractedFlashcard> {
    let mut cards = Vec::new();
    let mut pos = 0;

    while let Some(caps) = RE_BLOCK_HEAD.captures_at(text, pos) {
        let whole = caps.get(0).expect("group 0 always present");
        let source_start = caps.get(4).map_or(whole.end(), |m| m.start());
        let end = source_end(text, whole.end());

        let card = ExtractedFlashcard::new(
            &caps[1],
            &caps[2],
            Some(&caps[3]),
            Some(&text[source_start..end]),
        );
        cards.extend(card);

        pos = end;
    }

    cards
}

/// SOURCE may run over several lines. It stops before a blank line or at the
/// end of input.
fn source_end(text: &str, first_line_end: usize) -> usize {
    let mut end = first_line_end;

    while text[end..].starts_with('\n') {
        let line_start = end + 1;
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |offset| line_start + offset);
        let line = text[line_start..line_end].trim();

        if line.is_empty() {
            break;
        }
        end = line_end;
    }

    end
}

/// Fallback strategy: one candidate card per paragraph, with marker lines in
/// any order. FRONT and BACK are required.
pub fn scan_paragraphs(text: &str) -> Vec<ExtractedFlashcard> {
    RE_PARAGRAPH_BREAK
        .split(text)
        .filter_map(|paragraph| {
            let lines: Vec<&str> = paragraph.lines().map(str::trim).collect();
            let field = |marker: &str| lines.iter().find_map(|line| line.strip_prefix(marker));

            ExtractedFlashcard::new(
                field("FRONT:")?,
                field("BACK:")?,
                field("DIFFICULTY:"),
                field("SOURCE:"),
            )
        })
        .collect()
}
