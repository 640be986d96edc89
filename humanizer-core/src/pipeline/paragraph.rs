//! Passes applied to a whole paragraph once its sentences are rejoined.

use std::sync::LazyLock;

use rand::Rng;
use regex::{Captures, NoExpand, Regex};

use super::lexicon::CONTRACTIONS;
use super::vocabulary::whole_word;
use crate::random::chance;

static CONTRACTION_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
	CONTRACTIONS
		.iter()
		.map(|(full, contracted)| (whole_word(&[*full]), *contracted))
		.collect()
});

static TERMINAL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.!?]+)(\s+)").unwrap());

/// Contracts full-form phrases ("do not" → "don't").
///
/// Entries are drawn one by one, in table order, with probability `rate`;
/// a drawn entry replaces every case-insensitive whole-phrase occurrence.
pub fn apply_contractions<R: Rng + ?Sized>(text: &str, rng: &mut R, rate: f64) -> String {
	let mut result = text.to_owned();
	for (pattern, contracted) in CONTRACTION_PATTERNS.iter() {
		if chance(rng, rate) && pattern.is_match(&result) {
			result = pattern.replace_all(&result, NoExpand(contracted)).into_owned();
		}
	}
	result
}

/// Inserts an ellipsis after sentence-terminal punctuation followed by whitespace.
///
/// Each boundary is drawn independently. A single full stop grows into the
/// ellipsis (`"end. next"` → `"end... next"`), `!` and `?` get it appended
/// (`"end!... next"`), and a boundary that already ends with two or more
/// periods is left alone so no run of four periods is ever produced.
pub fn add_natural_pauses<R: Rng + ?Sized>(text: &str, rng: &mut R, probability: f64) -> String {
	TERMINAL_RUN
		.replace_all(text, |caps: &Captures| {
			let marks = &caps[1];
			let spacing = &caps[2];
			if !chance(rng, probability) {
				return format!("{}{}", marks, spacing);
			}

			let trailing_periods = marks.chars().rev().take_while(|c| *c == '.').count();
			match trailing_periods {
				0 => format!("{}...{}", marks, spacing),
				1 => format!("{}..{}", marks, spacing),
				_ => format!("{}{}", marks, spacing),
			}
		})
		.into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	#[test]
	fn contractions_apply_case_insensitively() {
		let mut rng = rng();
		assert_eq!(
			apply_contractions("I CANNOT go and Do Not care.", &mut rng, 1.0),
			"I can't go and don't care."
		);
	}

	#[test]
	fn contractions_match_whole_phrases_only() {
		let mut rng = rng();
		assert_eq!(apply_contractions("I cannotice, do nothing.", &mut rng, 1.0), "I cannotice, do nothing.");
	}

	#[test]
	fn contraction_rate_zero_keeps_text() {
		let mut rng = rng();
		let text = "We are sure that is not what I am going to do.";
		assert_eq!(apply_contractions(text, &mut rng, 0.0), text);
	}

	#[test]
	fn contractions_follow_table_order() {
		let mut rng = rng();
		// "is not" is applied before "that is", so "that is not" becomes "that isn't"
		assert_eq!(apply_contractions("that is not it", &mut rng, 1.0), "that isn't it");
	}

	#[test]
	fn pauses_extend_a_single_full_stop() {
		let mut rng = rng();
		assert_eq!(add_natural_pauses("One. Two! Three? Four", &mut rng, 1.0), "One... Two!... Three?... Four");
	}

	#[test]
	fn pauses_leave_existing_ellipses() {
		let mut rng = rng();
		assert_eq!(add_natural_pauses("Wait... what.. ok", &mut rng, 1.0), "Wait... what.. ok");
	}

	#[test]
	fn pauses_require_following_whitespace() {
		let mut rng = rng();
		assert_eq!(add_natural_pauses("The end.", &mut rng, 1.0), "The end.");
		assert_eq!(add_natural_pauses("One. Two", &mut rng, 0.0), "One. Two");
	}
}
