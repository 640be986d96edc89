use std::sync::LazyLock;

use regex::Regex;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits a document on runs of newlines.
///
/// Leading or trailing newlines produce empty paragraphs, so the number of
/// blocks is stable through the pipeline.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
	PARAGRAPH_BREAK.split(text).collect()
}

/// Splits a paragraph on whitespace that follows `.`, `!` or `?`.
///
/// The punctuation stays attached to its sentence and the whitespace is
/// dropped. A paragraph ending with such whitespace yields a trailing empty
/// sentence.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
	let mut sentences = Vec::new();
	let mut start = 0;

	for boundary in SENTENCE_BREAK.find_iter(paragraph) {
		// Terminal marks are ASCII, so the sentence ends one byte into the match
		let end = boundary.start() + 1;
		sentences.push(&paragraph[start..end]);
		start = boundary.end();
	}
	sentences.push(&paragraph[start..]);

	sentences
}
