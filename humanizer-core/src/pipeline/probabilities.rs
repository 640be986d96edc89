use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Probability of every stochastic step of the pipeline.
///
/// Each field is the chance, in `[0, 1]`, that the corresponding step fires
/// when it is evaluated. `filler` is evaluated once per word, `emphasis` and
/// `colloquialism` once per rule, the rest once per sentence (or per
/// sentence boundary for `natural_pause`).
///
/// # Invariants
/// - Every value lies in `[0, 1]` once [`Probabilities::validate`] succeeded.
/// - `contraction = None` means "use [`Tone::contraction_rate`]".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Probabilities {
	pub starter: f64,
	pub personal: f64,
	pub thought_pause: f64,
	pub filler: f64,
	pub emphasis: f64,
	pub emotion: f64,
	pub colloquialism: f64,
	pub natural_pause: f64,
	pub contraction: Option<f64>,
}

impl Default for Probabilities {
	fn default() -> Self {
		Self {
			starter: 0.45,
			personal: 0.5,
			thought_pause: 0.4,
			filler: 0.15,
			emphasis: 0.4,
			emotion: 0.3,
			colloquialism: 0.4,
			natural_pause: 0.3,
			contraction: None,
		}
	}
}

impl Probabilities {
	/// Every step disabled, contractions included.
	///
	/// Only the deterministic passes (vocabulary and cleanup) remain.
	pub fn silent() -> Self {
		Self {
			starter: 0.0,
			personal: 0.0,
			thought_pause: 0.0,
			filler: 0.0,
			emphasis: 0.0,
			emotion: 0.0,
			colloquialism: 0.0,
			natural_pause: 0.0,
			contraction: Some(0.0),
		}
	}

	/// Contraction rate actually used for `tone`.
	pub fn contraction_for(&self, tone: Tone) -> f64 {
		self.contraction.unwrap_or_else(|| tone.contraction_rate())
	}

	/// Checks that every probability lies in `[0, 1]`.
	///
	/// # Errors
	/// Returns the name and value of the first field out of range.
	pub fn validate(&self) -> Result<(), String> {
		let fields = [
			("starter", Some(self.starter)),
			("personal", Some(self.personal)),
			("thought_pause", Some(self.thought_pause)),
			("filler", Some(self.filler)),
			("emphasis", Some(self.emphasis)),
			("emotion", Some(self.emotion)),
			("colloquialism", Some(self.colloquialism)),
			("natural_pause", Some(self.natural_pause)),
			("contraction", self.contraction),
		];
		for (name, value) in fields {
			if let Some(value) = value {
				if !(0.0..=1.0).contains(&value) {
					return Err(format!("{} must be between 0.0 and 1.0, got {}", name, value));
				}
			}
		}
		Ok(())
	}
}
