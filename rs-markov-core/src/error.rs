//! Error type shared across the crate.

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = GenerationError> = std::result::Result<T, E>;

/// Validation failure reported by [`crate::MarkovGenerator::generate`].
///
/// Variants are checked in declaration order and the first failing check
/// wins. The `Display` messages are fixed; callers show them verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
	/// `phrase_range_size < 1`.
	#[error("Size of your option cannot be less than 1")]
	InvalidRangeSize,
	/// No content was supplied.
	#[error("File value is null. Need to add an acceptable txt file.")]
	MissingFile,
	/// `output_size < phrase_range_size`.
	#[error("Output size is less than the phrase range size")]
	OutputSmallerThanRange,
	/// `output_size` is not strictly below the corpus word count.
	#[error("Output size is greater than the length of the word")]
	OutputExceedsCorpus,
}
