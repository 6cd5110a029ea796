//! Word-level Markov chain text generation library.
//!
//! This crate provides a small, self-contained generation pipeline:
//! - Whitespace tokenization of arbitrary (possibly binary) uploads
//! - Fixed-order prefix → suffixes chain construction
//! - Uniform random walk over the chain with an injectable random source
//! - Typed validation failures with stable, user-facing messages
//!
//! Every call to [`MarkovGenerator::generate`] builds its own chain and
//! discards it on return; nothing is shared between invocations.

/// Chain construction and generation logic.
///
/// Exposes the generator, the chain it walks and the request parameters.
pub mod model;

/// Validation failures surfaced to callers.
pub mod error;

/// I/O utilities (file loading).
pub mod io;

pub use error::{GenerationError, Result};
pub use model::chain::Chain;
pub use model::generator::MarkovGenerator;
pub use model::request::GenerationRequest;
