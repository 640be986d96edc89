//! Top-level module for the humanizing pipeline.
//!
//! This module provides:
//! - The tone register (`Tone`) and its lexicon rows (`ToneLexicon`)
//! - Vocabulary normalization and sentence segmentation
//! - Probability-gated sentence transformers
//! - Paragraph passes (contractions, natural pauses) and the final cleanup
//! - A high-level interface (`Humanizer`)

/// High-level interface turning a document into its humanized variant.
///
/// Owns the random source and the probabilities, and orchestrates every
/// other stage.
pub mod humanizer;

/// Tone register and its parsing from user input.
pub mod tone;

/// Static word lists per tone, contractions, slang and vocabulary tables.
pub mod lexicon;

/// Probabilities of every stochastic step, with validation.
pub mod probabilities;

/// Deterministic replacement of stiff vocabulary.
pub mod vocabulary;

/// Paragraph and sentence splitting.
pub mod segment;

/// Probability-gated rewrites of a single sentence.
pub mod transformers;

/// Contractions and natural pauses over a rejoined paragraph.
pub mod paragraph;

/// Final whitespace and punctuation normalization.
pub mod cleanup;
