//! Stochastic text humanizing library.
//!
//! This crate rewrites stiff text into a conversational variant of a
//! chosen tone (casual, formal or persuasive):
//! - Deterministic vocabulary normalization
//! - Probability-gated sentence transformers (starters, fillers, pauses...)
//! - Paragraph-level contractions and pauses, then a cleanup pass
//! - Injectable random source for reproducible output
//!
//! ```
//! use humanizer_core::{Humanizer, Probabilities, Tone};
//!
//! let mut humanizer = Humanizer::seeded(7).with_probabilities(Probabilities::silent())?;
//! assert_eq!(humanizer.humanize("I will utilize this tool.", Tone::Formal), "I will use this tool.");
//! # Ok::<(), String>(())
//! ```

/// The humanizing pipeline and its stages.
pub mod pipeline;

/// Bounded-random primitives shared by every stochastic step.
pub mod random;

/// I/O utilities (file loading, path helpers).
pub mod io;

pub use pipeline::humanizer::{Humanizer, humanize};
pub use pipeline::probabilities::Probabilities;
pub use pipeline::tone::Tone;
pub use rand::rngs::StdRng;
