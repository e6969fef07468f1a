//! Top-level module for the Markov chain generation system.
//!
//! This crate provides a word-level Markov chain text generator, including:
//! - The trained frequency-table model (`MarkovModel`)
//! - Two-stage softmax resampling (`sampler`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating word sequences from trained models.
///
/// Exposes dataset loading, seed resolution, and sequence generation with
/// configurable sampling stages.
pub mod generator;

/// First-order Markov chain model over word tokens.
///
/// Handles whitespace tokenization, vocabulary construction,
/// transition counting, and successor lookup.
pub mod markov_model;

/// Softmax-weighted subset sampling.
///
/// Converts successor counts to a temperature-controlled probability
/// distribution and draws a capped set of distinct keys from it.
pub mod sampler;

/// Generation parameter structure.
///
/// Stores the dataset selection, seed strategy, sequence length, and the
/// validated (temperature, cap) pairs of the two sampling stages.
pub mod generation_input;

/// Internal representation of a single chain state (token).
///
/// Tracks outgoing transition counts. This module is not exposed publicly.
mod state;

/// Internal vocabulary of distinct tokens and occurrence positions.
///
/// This module is not exposed publicly.
mod vocabulary;
