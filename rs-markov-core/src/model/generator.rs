use crate::error::{GenerationError, Result};
use crate::model::chain::Chain;
use crate::model::request::GenerationRequest;
use crate::model::tokenizer::{decode, join_prefix, tokenize, trim_prefix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter;

/// Word written in place of missing output when the walk reaches a prefix
/// that is not in the chain.
pub const PLACEHOLDER: &str = "null";

/// How a walk ended. Every variant owns the words produced so far.
#[derive(Debug, PartialEq, Eq)]
enum Generated {
	/// Reached the requested length; truncated to it.
	Completed(Vec<String>),
	/// The corpus ran out (single empty suffix); may be shorter than requested.
	Exhausted(Vec<String>),
	/// The current prefix was never seen; padded with [`PLACEHOLDER`].
	DeadEnd(Vec<String>),
}

impl Generated {
	fn words(&self) -> &[String] {
		match self {
			Generated::Completed(w) | Generated::Exhausted(w) | Generated::DeadEnd(w) => w,
		}
	}

	/// Renders the words, each preceded by one space.
	fn render(&self) -> String {
		let words = self.words();
		let mut out = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
		for word in words {
			out.push(' ');
			out.push_str(word);
		}
		out
	}
}

/// Text generator walking a word-level Markov chain.
///
/// # Responsibilities
/// - Validate parameters in a fixed order and report typed failures
/// - Tokenize the supplied content and build a [`Chain`] for this call only
/// - Walk the chain with the owned random source to assemble the output
///
/// The random source is injected so a fixed seed gives a fixed output.
#[derive(Debug)]
pub struct MarkovGenerator<R = StdRng> {
	rng: R,
}

impl MarkovGenerator<StdRng> {
	/// Creates a generator seeded from the operating system.
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_os_rng())
	}

	/// Creates a reproducible generator.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> MarkovGenerator<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	/// Generates text from `content`.
	///
	/// # Parameters
	/// - `content`: uploaded bytes, `None` when nothing was supplied
	/// - `phrase_range_size`: number of words in a prefix
	/// - `output_size`: number of words to produce
	///
	/// # Returns
	/// A string where every word is preceded by a single space. It holds
	/// exactly `output_size` words, unless the walk reached the end of the
	/// corpus first, in which case it holds fewer.
	///
	/// # Errors
	/// See [`GenerationError`]; checks run in the order of its variants.
	pub fn generate(&mut self, content: Option<&[u8]>, phrase_range_size: i64, output_size: i64) -> Result<String> {
		self.generate_request(content, &GenerationRequest::new(phrase_range_size, output_size))
	}

	/// Same as [`Self::generate`] with the parameters bundled.
	pub fn generate_request(&mut self, content: Option<&[u8]>, request: &GenerationRequest) -> Result<String> {
		request.check_range()?;
		let content = content.ok_or(GenerationError::MissingFile)?;

		let words = tokenize(&decode(content));
		request.check_output(words.len())?;

		let chain = Chain::build(&words, request.prefix_len());
		let generated = self.walk(&chain, request.output_len());
		match &generated {
			Generated::Completed(w) => log::debug!("walk completed with {} words", w.len()),
			Generated::Exhausted(w) => log::debug!("corpus exhausted after {} words", w.len()),
			Generated::DeadEnd(w) => log::debug!("dead end, output padded to {} words", w.len()),
		}
		Ok(generated.render())
	}

	/// Random walk over `chain`.
	///
	/// Starts from a uniformly chosen prefix, then at step `n` looks up the
	/// `prefix_len` words of the output starting at offset `n`.
	fn walk(&mut self, chain: &Chain, output_size: usize) -> Generated {
		let Some(seed) = chain.random_key(&mut self.rng) else {
			return Generated::Exhausted(Vec::new());
		};
		let prefix_len = chain.prefix_len();
		let mut output: Vec<String> = seed.split(' ').map(str::to_owned).collect();
		let mut prefix = seed.to_owned();
		let mut n = 0;

		loop {
			let next = match chain.get(&prefix) {
				Some(state) if state.single() == Some("") => return Generated::Exhausted(output),
				Some(state) => state.predict(&mut self.rng),
				None => None,
			};

			let Some(word) = next else {
				log::trace!("prefix {:?} not in chain", prefix);
				let missing = output_size.saturating_sub(output.len());
				output.extend(iter::repeat_n(PLACEHOLDER.to_owned(), missing));
				output.truncate(output_size);
				return Generated::DeadEnd(output);
			};
			log::trace!("{:?} -> {:?}", prefix, word);
			output.push(word.to_owned());

			if output.len() >= output_size {
				output.truncate(output_size);
				return Generated::Completed(output);
			}

			n += 1;
			let end = (n + prefix_len).min(output.len());
			prefix = trim_prefix(&join_prefix(&output[n.min(end)..end])).to_owned();
		}
	}
}
