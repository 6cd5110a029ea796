use super::state::State;
use super::tokenizer::join_prefix;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// Word-level Markov chain of a fixed prefix length.
///
/// The `Chain` maps every window of `prefix_len` consecutive words of the
/// corpus to the words observed right after it.
///
/// # Responsibilities
/// - Build the prefix → suffixes mapping from a token sequence
/// - Keep keys in first-insertion order so that sampling a key is
///   reproducible under a fixed seed
/// - Look up the state of a prefix during the walk
///
/// # Invariants
/// - `prefix_len` is always >= 1
/// - `order` holds each key of `states` exactly once, first-seen first
/// - Every state holds at least one suffix (possibly `""`)
#[derive(Clone, Debug)]
pub struct Chain {
	/// Number of words in a prefix.
	prefix_len: usize,

	/// Keys in the order they were first seen.
	order: Vec<String>,

	/// Mapping from a prefix to its corresponding state.
	states: HashMap<String, State>,
}

impl Chain {
	/// Builds the chain for `tokens` with prefixes of `prefix_len` words.
	///
	/// For each start index `i` in `0..tokens.len() - prefix_len`, the prefix
	/// is `tokens[i..i + prefix_len]` and the suffix is the next token, except
	/// when that token is the last one of the corpus: the suffix is then `""`.
	/// The last token is therefore never recorded as a suffix.
	///
	/// The caller validates `prefix_len >= 1`. A corpus not longer than
	/// `prefix_len` gives an empty chain.
	pub fn build<S: AsRef<str>>(tokens: &[S], prefix_len: usize) -> Self {
		let mut chain = Self {
			prefix_len,
			order: Vec::new(),
			states: HashMap::new(),
		};
		if prefix_len == 0 {
			return chain;
		}

		let len = tokens.len();
		for i in 0..len.saturating_sub(prefix_len) {
			let prefix = join_prefix(&tokens[i..i + prefix_len]);
			let suffix = if i + prefix_len < len - 1 {
				tokens[i + prefix_len].as_ref()
			} else {
				""
			};
			chain.add(prefix, suffix);
		}

		log::debug!(
			"built chain: {} tokens, prefix length {}, {} distinct prefixes",
			len,
			prefix_len,
			chain.len()
		);
		chain
	}

	fn add(&mut self, prefix: String, suffix: &str) {
		if let Some(state) = self.states.get_mut(&prefix) {
			state.add_suffix(suffix);
			return;
		}
		let mut state = State::new(&prefix);
		state.add_suffix(suffix);
		self.order.push(prefix.clone());
		self.states.insert(prefix, state);
	}

	/// Number of words in a prefix.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Prefixes in first-insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str)
	}

	/// Returns the state of `prefix`, if it was seen while building.
	pub fn get(&self, prefix: &str) -> Option<&State> {
		self.states.get(prefix)
	}

	/// Picks a prefix uniformly, indexing into the first-insertion order.
	///
	/// Returns `None` if the chain is empty.
	pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.order.choose(rng).map(String::as_str)
	}
}
