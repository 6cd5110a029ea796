use serde::Deserialize;

use crate::error::{GenerationError, Result};

/// Parameters of one generation call.
///
/// Both values are signed so that out-of-range input coming from a form or
/// a query string reaches validation instead of failing to parse.
///
/// # Validation order
/// 1. `phrase_range_size < 1` → [`GenerationError::InvalidRangeSize`]
/// 2. (content presence, checked by the generator)
/// 3. `output_size < phrase_range_size` → [`GenerationError::OutputSmallerThanRange`]
/// 4. `output_size >= word_count` → [`GenerationError::OutputExceedsCorpus`]
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	/// Number of words in a prefix.
	pub phrase_range_size: i64,

	/// Number of words to produce.
	pub output_size: i64,
}

impl GenerationRequest {
	pub fn new(phrase_range_size: i64, output_size: i64) -> Self {
		Self { phrase_range_size, output_size }
	}

	/// Checks the prefix length alone.
	///
	/// # Errors
	/// [`GenerationError::InvalidRangeSize`] if it is below 1.
	pub fn check_range(&self) -> Result<()> {
		if self.phrase_range_size < 1 {
			return Err(GenerationError::InvalidRangeSize);
		}
		Ok(())
	}

	/// Checks the output size against the prefix length and the corpus.
	///
	/// # Errors
	/// - [`GenerationError::OutputSmallerThanRange`] if `output_size < phrase_range_size`
	/// - [`GenerationError::OutputExceedsCorpus`] if `output_size >= word_count`
	pub fn check_output(&self, word_count: usize) -> Result<()> {
		if self.output_size < self.phrase_range_size {
			return Err(GenerationError::OutputSmallerThanRange);
		}
		let word_count = i64::try_from(word_count).unwrap_or(i64::MAX);
		if self.output_size >= word_count {
			return Err(GenerationError::OutputExceedsCorpus);
		}
		Ok(())
	}

	/// Runs every parameter check, in order, for a known word count.
	#[cfg(test)]
	fn validate(&self, word_count: usize) -> Result<()> {
		self.check_range()?;
		self.check_output(word_count)
	}

	/// Prefix length as an index. Meaningful once [`Self::check_range`] passed.
	pub(crate) fn prefix_len(&self) -> usize {
		usize::try_from(self.phrase_range_size).unwrap_or(0)
	}

	/// Output length as an index. Meaningful once [`Self::check_output`] passed.
	pub(crate) fn output_len(&self) -> usize {
		usize::try_from(self.output_size).unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn range_below_one_fails_first() {
		for range in [0, -1, i64::MIN] {
			assert_eq!(GenerationRequest::new(range, 0).validate(0), Err(GenerationError::InvalidRangeSize));
		}
	}

	#[test]
	fn output_smaller_than_range() {
		assert_eq!(GenerationRequest::new(500, 1).validate(10_000), Err(GenerationError::OutputSmallerThanRange));
		assert_eq!(GenerationRequest::new(3, -4).validate(10), Err(GenerationError::OutputSmallerThanRange));
	}

	#[test]
	fn output_must_stay_below_word_count() {
		assert_eq!(GenerationRequest::new(10, 100).validate(10), Err(GenerationError::OutputExceedsCorpus));
		assert_eq!(GenerationRequest::new(2, 9).validate(9), Err(GenerationError::OutputExceedsCorpus));
		assert_eq!(GenerationRequest::new(2, 8).validate(9), Ok(()));
	}

	#[test]
	fn equal_range_and_output_is_valid() {
		let request = GenerationRequest::new(4, 4);
		assert_eq!(request.validate(5), Ok(()));
		assert_eq!(request.prefix_len(), 4);
		assert_eq!(request.output_len(), 4);
	}
}
