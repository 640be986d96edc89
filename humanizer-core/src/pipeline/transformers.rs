//! Sentence-level stylistic rewrites.
//!
//! Every transformer takes one sentence and returns it, possibly rewritten.
//! Each one is gated by its own probability: when the draw fails, the
//! sentence passes through unchanged. [`transform_sentence`] chains them in
//! the order the pipeline relies on.

use std::sync::LazyLock;

use rand::Rng;
use regex::{Captures, Regex};

use super::lexicon::{COLLOQUIALISMS, ToneLexicon};
use super::probabilities::Probabilities;
use super::tone::Tone;
use super::vocabulary::whole_word;
use crate::random::{chance, sample};

/// Prepends a tone-specific connective and lower-cases the whole sentence.
///
/// The entire sentence is lower-cased, not only its first letter.
pub fn add_sentence_starter<R: Rng + ?Sized>(sentence: &str, tone: Tone, rng: &mut R, probability: f64) -> String {
	prepend_lowercased(sentence, ToneLexicon::for_tone(tone).sentence_starters, rng, probability)
}

/// Prepends a tone-specific personal phrase and lower-cases the whole sentence.
///
/// Stacks with [`add_sentence_starter`] when both fire.
pub fn add_personal_touch<R: Rng + ?Sized>(sentence: &str, tone: Tone, rng: &mut R, probability: f64) -> String {
	prepend_lowercased(sentence, ToneLexicon::for_tone(tone).personal_phrases, rng, probability)
}

fn prepend_lowercased<R: Rng + ?Sized>(
	sentence: &str,
	candidates: &[&str],
	rng: &mut R,
	probability: f64,
) -> String {
	if chance(rng, probability) {
		if let Some(prefix) = sample(rng, candidates) {
			return format!("{} {}", prefix, sentence.to_lowercase());
		}
	}
	sentence.to_owned()
}

/// Prepends a hesitation marker followed by an ellipsis (`"hmm... "`).
pub fn add_thought_pause<R: Rng + ?Sized>(sentence: &str, tone: Tone, rng: &mut R, probability: f64) -> String {
	if chance(rng, probability) {
		if let Some(pause) = sample(rng, ToneLexicon::for_tone(tone).thought_pauses) {
			return format!("{}... {}", pause, sentence);
		}
	}
	sentence.to_owned()
}

/// Inserts tone-specific fillers before words.
///
/// The draw happens independently for every space-delimited token except
/// the first one.
pub fn add_mid_sentence_fillers<R: Rng + ?Sized>(
	sentence: &str,
	tone: Tone,
	rng: &mut R,
	probability: f64,
) -> String {
	let fillers = ToneLexicon::for_tone(tone).fillers;
	let mut result = String::with_capacity(sentence.len());

	for (index, word) in sentence.split(' ').enumerate() {
		if index > 0 {
			result.push(' ');
			if chance(rng, probability) {
				if let Some(filler) = sample(rng, fillers) {
					result.push_str(filler);
					result.push(' ');
				}
			}
		}
		result.push_str(word);
	}

	result
}

static CASUAL_EMPHASIS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| compile_emphasis(Tone::Casual));
static FORMAL_EMPHASIS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| compile_emphasis(Tone::Formal));
static PERSUASIVE_EMPHASIS: LazyLock<Vec<(Regex, &'static str)>> =
	LazyLock::new(|| compile_emphasis(Tone::Persuasive));

fn compile_emphasis(tone: Tone) -> Vec<(Regex, &'static str)> {
	ToneLexicon::for_tone(tone)
		.emphasis
		.iter()
		.map(|rule| (whole_word(rule.words), rule.intensifier))
		.collect()
}

fn emphasis_patterns(tone: Tone) -> &'static [(Regex, &'static str)] {
	match tone {
		Tone::Casual => &CASUAL_EMPHASIS,
		Tone::Formal => &FORMAL_EMPHASIS,
		Tone::Persuasive => &PERSUASIVE_EMPHASIS,
	}
}

/// Puts an intensifier in front of emphasizable words.
///
/// Each rule of the tone is drawn once; when it fires, every match of the
/// rule is rewritten as `"<intensifier> <word>"`, the word kept verbatim.
pub fn add_emphasis<R: Rng + ?Sized>(sentence: &str, tone: Tone, rng: &mut R, probability: f64) -> String {
	let mut result = sentence.to_owned();
	for (pattern, intensifier) in emphasis_patterns(tone) {
		if chance(rng, probability) {
			result = pattern
				.replace_all(&result, |caps: &Captures| format!("{} {}", intensifier, &caps[0]))
				.into_owned();
		}
	}
	result
}

/// Appends a tone-specific reaction word.
pub fn add_emotional_expression<R: Rng + ?Sized>(
	sentence: &str,
	tone: Tone,
	rng: &mut R,
	probability: f64,
) -> String {
	if chance(rng, probability) {
		if let Some(emotion) = sample(rng, ToneLexicon::for_tone(tone).emotions) {
			return format!("{} {}", sentence, emotion);
		}
	}
	sentence.to_owned()
}

static COLLOQUIAL_PATTERNS: LazyLock<Vec<(Regex, &'static [&'static str])>> = LazyLock::new(|| {
	COLLOQUIALISMS
		.iter()
		.map(|(word, slang)| (whole_word(&[*word]), *slang))
		.collect()
});

/// Swaps a few plain words for slang. Casual tone only.
///
/// Each mapped word is drawn once; when it fires, every occurrence gets its
/// own randomly chosen synonym.
pub fn add_colloquialisms<R: Rng + ?Sized>(sentence: &str, tone: Tone, rng: &mut R, probability: f64) -> String {
	if tone != Tone::Casual {
		return sentence.to_owned();
	}

	let mut result = sentence.to_owned();
	for (pattern, slang) in COLLOQUIAL_PATTERNS.iter() {
		if chance(rng, probability) {
			result = pattern
				.replace_all(&result, |caps: &Captures| match sample(rng, *slang) {
					Some(word) => (*word).to_owned(),
					None => caps[0].to_owned(),
				})
				.into_owned();
		}
	}
	result
}

/// Runs every sentence transformer, in pipeline order.
///
/// Blank sentences are returned unchanged.
pub fn transform_sentence<R: Rng + ?Sized>(
	sentence: &str,
	tone: Tone,
	rng: &mut R,
	probabilities: &Probabilities,
) -> String {
	if sentence.trim().is_empty() {
		return sentence.to_owned();
	}

	let sentence = add_sentence_starter(sentence, tone, rng, probabilities.starter);
	let sentence = add_personal_touch(&sentence, tone, rng, probabilities.personal);
	let sentence = add_thought_pause(&sentence, tone, rng, probabilities.thought_pause);
	let sentence = add_mid_sentence_fillers(&sentence, tone, rng, probabilities.filler);
	let sentence = add_emphasis(&sentence, tone, rng, probabilities.emphasis);
	let sentence = add_emotional_expression(&sentence, tone, rng, probabilities.emotion);
	add_colloquialisms(&sentence, tone, rng, probabilities.colloquialism)
}
