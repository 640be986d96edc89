use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::cleanup::cleanup;
use super::paragraph::{add_natural_pauses, apply_contractions};
use super::probabilities::Probabilities;
use super::segment::{split_paragraphs, split_sentences};
use super::tone::Tone;
use super::transformers::transform_sentence;
use super::vocabulary::normalize_vocabulary;

/// Rewrites text into a conversational variant of a given tone.
///
/// # Responsibilities
/// - Split a document into paragraphs and sentences
/// - Normalize vocabulary, then run the sentence transformers in order
/// - Apply contractions and natural pauses per paragraph, then clean up
///
/// The humanizer owns its random source. Successive calls on the same input
/// give different results; two humanizers built with [`Humanizer::seeded`]
/// and the same seed give identical ones.
#[derive(Debug, Clone)]
pub struct Humanizer<R: Rng = ThreadRng> {
	rng: R,
	probabilities: Probabilities,
}

impl Humanizer<ThreadRng> {
	/// Creates a humanizer over the thread-local random source with default probabilities.
	pub fn new() -> Self {
		Self::with_rng(rand::rng())
	}
}

impl Default for Humanizer<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl Humanizer<StdRng> {
	/// Creates a reproducible humanizer.
	pub fn seeded(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	/// Creates a humanizer seeded from the operating system's entropy.
	pub fn from_os_rng() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}
}

impl<R: Rng> Humanizer<R> {
	/// Creates a humanizer drawing from `rng`, with default probabilities.
	pub fn with_rng(rng: R) -> Self {
		Self { rng, probabilities: Probabilities::default() }
	}

	/// Replaces the probabilities, consuming the humanizer.
	///
	/// # Errors
	/// Returns an error if any probability is outside `[0, 1]`.
	pub fn with_probabilities(mut self, probabilities: Probabilities) -> Result<Self, String> {
		self.set_probabilities(probabilities)?;
		Ok(self)
	}

	/// Returns the probabilities currently in use.
	pub fn probabilities(&self) -> &Probabilities {
		&self.probabilities
	}

	/// Replaces the probabilities.
	///
	/// # Errors
	/// Returns an error if any probability is outside `[0, 1]`; the previous
	/// values are kept in that case.
	pub fn set_probabilities(&mut self, probabilities: Probabilities) -> Result<(), String> {
		probabilities.validate()?;
		self.probabilities = probabilities;
		Ok(())
	}

	/// Humanizes `text` in the given tone.
	///
	/// # Behavior
	/// - Empty input returns an empty string.
	/// - Paragraphs (split on newline runs) are processed independently and
	///   rejoined with a blank line, so their count and order are preserved.
	/// - Within a paragraph, sentences keep their order and terminal punctuation.
	pub fn humanize(&mut self, text: &str, tone: Tone) -> String {
		if text.is_empty() {
			return String::new();
		}

		let paragraphs = split_paragraphs(text);
		log::debug!("humanizing {} paragraph(s) in {} tone", paragraphs.len(), tone);

		paragraphs
			.into_iter()
			.map(|paragraph| self.humanize_paragraph(paragraph, tone))
			.collect::<Vec<_>>()
			.join("\n\n")
	}

	/// Produces `count` independent rewrites of the same text.
	///
	/// Equivalent to calling [`Humanizer::humanize`] `count` times ("regenerate").
	pub fn variants(&mut self, text: &str, tone: Tone, count: usize) -> Vec<String> {
		(0..count).map(|_| self.humanize(text, tone)).collect()
	}

	fn humanize_paragraph(&mut self, paragraph: &str, tone: Tone) -> String {
		let sentences = split_sentences(paragraph);
		log::trace!("paragraph split into {} sentence(s)", sentences.len());

		let joined = sentences
			.into_iter()
			.map(|sentence| {
				let normalized = normalize_vocabulary(sentence);
				transform_sentence(&normalized, tone, &mut self.rng, &self.probabilities)
			})
			.collect::<Vec<_>>()
			.join(" ");

		let contracted = apply_contractions(&joined, &mut self.rng, self.probabilities.contraction_for(tone));
		let paused = add_natural_pauses(&contracted, &mut self.rng, self.probabilities.natural_pause);
		cleanup(&paused)
	}
}

/// Humanizes `text` with the thread-local random source and default probabilities.
pub fn humanize(text: &str, tone: Tone) -> String {
	Humanizer::new().humanize(text, tone)
}
