use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Separator between words: runs of ASCII whitespace (` \t\n\x0B\x0C\r`).
///
/// Non-ASCII whitespace (NBSP, ideographic space, ...) stays inside words.
static SEPARATOR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?-u:\s)+").expect("Failed to build regex"));

/// Decodes raw upload bytes as text.
///
/// Invalid UTF-8 sequences are replaced by U+FFFD, so binary content never
/// fails here; it just produces odd words.
pub fn decode(content: &[u8]) -> Cow<'_, str> {
	String::from_utf8_lossy(content)
}

/// Strips leading and trailing characters `<= U+0020`.
///
/// This covers ASCII whitespace and the C0 control characters.
pub fn trim_prefix(text: &str) -> &str {
	text.trim_matches(|c: char| c <= ' ')
}

/// Splits text into words.
///
/// The text is trimmed with [`trim_prefix`] first, then split on runs of
/// ASCII whitespace. Empty or blank text gives no words.
pub fn tokenize(text: &str) -> Vec<String> {
	let text = trim_prefix(text);
	if text.is_empty() {
		return Vec::new();
	}
	SEPARATOR.split(text).map(str::to_owned).collect()
}

/// Joins consecutive words into a prefix key, separated by single spaces.
pub fn join_prefix<S: AsRef<str>>(words: &[S]) -> String {
	let mut key = String::new();
	for (i, word) in words.iter().enumerate() {
		if i > 0 {
			key.push(' ');
		}
		key.push_str(word.as_ref());
	}
	key
}
