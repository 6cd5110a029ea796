//! Top-level module for the word chain generation system.
//!
//! This module provides:
//! - Whitespace tokenization of uploaded content (`tokenizer`)
//! - The prefix → suffixes chain (`Chain`) and its states (`State`)
//! - Generation parameters and their validation (`GenerationRequest`)
//! - The random-walk generator (`MarkovGenerator`)

/// Random-walk generator over a freshly built chain.
///
/// Validates parameters, builds the chain and samples the output with an
/// injected random source.
pub mod generator;

/// Fixed prefix length word chain.
///
/// Maps every window of consecutive words to the words observed after it,
/// keeping keys in first-insertion order.
pub mod chain;

/// Single chain state (prefix) and its observed suffixes.
pub mod state;

/// Generation parameters and their ordered validation.
pub mod request;

/// Decoding and whitespace splitting of raw content.
pub mod tokenizer;
