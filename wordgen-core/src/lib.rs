//! Word-level Markov chain text generation library.
//!
//! This crate provides a first-order Markov generation system including:
//! - Whitespace tokenization and frequency-table training
//! - Two-stage softmax resampling with controllable temperatures
//! - A high-level generator over named datasets
//! - Utilities for loading dataset files from disk
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core Markov chain model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal model representations private.
pub mod model;

/// I/O utilities (dataset loading, path helpers).
///
/// Exposed for the glue binaries that resolve dataset files on startup.
pub mod io;
