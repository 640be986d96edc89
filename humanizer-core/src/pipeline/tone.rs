use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stylistic register used when humanizing a text.
///
/// The tone selects which lexicon row every table lookup uses and the
/// rate at which contractions are applied.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
	#[default]
	Casual,
	Formal,
	Persuasive,
}

impl Tone {
	/// Every tone, in declaration order.
	pub const ALL: [Tone; 3] = [Tone::Casual, Tone::Formal, Tone::Persuasive];

	/// Lowercase name, as accepted by [`Tone::from_str`].
	pub fn as_str(&self) -> &'static str {
		match self {
			Tone::Casual => "casual",
			Tone::Formal => "formal",
			Tone::Persuasive => "persuasive",
		}
	}

	/// Probability that a given contraction is applied for this tone.
	pub fn contraction_rate(&self) -> f64 {
		match self {
			Tone::Casual => 0.95,
			Tone::Formal => 0.2,
			Tone::Persuasive => 0.7,
		}
	}
}

impl fmt::Display for Tone {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Tone {
	type Err = String;

	/// Parses a tone name, ignoring case and surrounding whitespace.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"casual" => Ok(Tone::Casual),
			"formal" => Ok(Tone::Formal),
			"persuasive" => Ok(Tone::Persuasive),
			other => Err(format!(
				"Unknown tone '{}', expected one of: casual, formal, persuasive",
				other
			)),
		}
	}
}
