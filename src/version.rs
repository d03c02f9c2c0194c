//! Version string lookup in header text.

/// Token searched for when no other is configured.
pub const DEFAULT_VERSION_TOKEN: &str = "OJ_VERSION";

/// Return the first double-quoted string that follows `token`.
///
/// `#define OJ_VERSION\t"3.1.1"` yields `3.1.1`. A missing token or an unterminated quote
/// yields `None`.
pub fn find_version(text: &str, token: &str) -> Option<String> {
	if token.is_empty() {
		return None;
	}
	let at = text.find(token)? + token.len();
	let rest = &text[at..];
	let first = rest.find('"')? + 1;
	let last = rest[first..].find('"')? + first;
	Some(rest[first..last].to_string())
}
