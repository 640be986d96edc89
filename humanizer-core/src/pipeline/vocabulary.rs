use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::lexicon::VOCABULARY;

/// Builds a case-insensitive regex matching any of `words` as whole words.
///
/// Words are escaped, so multi-word phrases ("will not") match literally.
pub(crate) fn whole_word(words: &[&str]) -> Regex {
	let alternatives = words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
	// Should not panic: every alternative is escaped
	Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives)).unwrap()
}

static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
	VOCABULARY
		.iter()
		.map(|(words, replacement)| (whole_word(words), *replacement))
		.collect()
});

/// Replaces stiff vocabulary with plain equivalents.
///
/// Deterministic and tone-independent. Matching is case-insensitive and
/// restricted to whole words; text outside the matches keeps its casing.
pub fn normalize_vocabulary(sentence: &str) -> String {
	let mut result = sentence.to_owned();
	for (pattern, replacement) in RULES.iter() {
		if pattern.is_match(&result) {
			result = pattern.replace_all(&result, NoExpand(replacement)).into_owned();
		}
	}
	result
}
