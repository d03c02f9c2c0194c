//! Brace matching and line lookup over raw header text.

use crate::core_api::error::HdrdocError;
use crate::core_api::Result;

/// Return the byte offset of the `}` that closes the first `{` found at or after `search_from`.
///
/// Nested blocks (a struct embedding an anonymous union, for instance) are skipped by tracking
/// depth, so the returned offset always belongs to the outermost block.
pub fn match_brace(text: &str, search_from: usize) -> Result<usize> {
	let bytes = text.as_bytes();
	let open = text
		.get(search_from..)
		.and_then(|rest| rest.find('{'))
		.map(|pos| search_from + pos)
		.ok_or_else(|| unbalanced(text, search_from))?;

	let mut depth = 1usize;
	for (pos, b) in bytes.iter().enumerate().skip(open + 1) {
		match b {
			b'{' => depth += 1,
			b'}' => {
				depth -= 1;
				if depth == 0 {
					return Ok(pos);
				}
			}
			_ => {}
		}
	}

	Err(unbalanced(text, open))
}

fn unbalanced(text: &str, offset: usize) -> HdrdocError {
	let line = LineIndex::new(text).line_of(offset);
	HdrdocError::Structural { offset, line }
}

/// Line-start table used to turn byte offsets into 1-based line numbers.
pub struct LineIndex {
	starts: Vec<usize>,
}

impl LineIndex {
	/// Index every line start in `text`.
	pub fn new(text: &str) -> Self {
		let mut starts = vec![0];
		for (i, b) in text.as_bytes().iter().enumerate() {
			if *b == b'\n' {
				starts.push(i + 1);
			}
		}
		Self { starts }
	}

	/// 1-based line containing `byte`.
	pub fn line_of(&self, byte: usize) -> usize {
		let idx = self.starts.partition_point(|&s| s <= byte);
		idx.max(1)
	}
}
