use std::sync::LazyLock;

use regex::Regex;

fn collapse_whitespace(input: &str) -> String {
	static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
	RE.replace_all(input, " ").into_owned()
}

fn attach_punctuation(input: &str) -> String {
	static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([,.!?])").unwrap());
	RE.replace_all(input, "$1").into_owned()
}

fn collapse_commas(input: &str) -> String {
	static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",{2,}").unwrap());
	RE.replace_all(input, ",").into_owned()
}

fn remove_period_runs(input: &str) -> String {
	static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{4,}").unwrap());
	RE.replace_all(input, "").into_owned()
}

fn cleanup_once(input: &str) -> String {
	let cleaned = collapse_whitespace(input);
	let cleaned = attach_punctuation(&cleaned);
	let cleaned = collapse_commas(&cleaned);
	let cleaned = remove_period_runs(&cleaned);
	cleaned.trim().to_owned()
}

/// Removes the artifacts left by the stochastic insertions.
///
/// Collapses whitespace, glues `, . ! ?` to the preceding word, merges comma
/// runs, deletes runs of four or more periods and trims. The rules are
/// re-applied until the text stops changing, so the result is stable under
/// a second call.
pub fn cleanup(paragraph: &str) -> String {
	let mut current = cleanup_once(paragraph);
	loop {
		let next = cleanup_once(&current);
		if next == current {
			return current;
		}
		current = next;
	}
}
