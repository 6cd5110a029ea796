use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state in the word chain.
///
/// A `State` corresponds to one prefix (`key`, `prefix_len` words joined by
/// single spaces) and stores every word observed right after it, in corpus
/// order. Duplicates are kept, so a uniform pick over the list follows the
/// observed frequencies.
///
/// An empty suffix means "nothing follows": the corpus ends at that position.
///
/// ## Invariants
/// - `suffixes` is never empty once the state is stored in a chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Prefix this state belongs to.
	key: String,
	/// Observed next words, in insertion order. May contain `""`.
	suffixes: Vec<String>,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			suffixes: Vec::new(),
		}
	}

	/// Records one occurrence of `suffix` after this prefix.
	pub fn add_suffix(&mut self, suffix: &str) {
		self.suffixes.push(suffix.to_owned());
	}

	/// Prefix of this state.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Observed suffixes, in insertion order.
	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	/// Returns the only suffix if exactly one was observed.
	pub fn single(&self) -> Option<&str> {
		match self.suffixes.as_slice() {
			[only] => Some(only.as_str()),
			_ => None,
		}
	}

	/// Picks the next word uniformly among the observed suffixes.
	///
	/// A single-entry state returns its entry without touching `rng`.
	/// Returns `None` if the state has no suffixes.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if let Some(only) = self.single() {
			return Some(only);
		}
		self.suffixes.choose(rng).map(String::as_str)
	}
}
