//! Heuristic declaration scanner for C headers.
//!
//! Nothing here builds a syntax tree. Each extractor looks for a keyword anchor
//! (`typedef enum`, `typedef struct`, `extern`, ...), balances braces where a body is
//! involved, and splits tab-aligned columns into types and names. Every extractor scans the
//! whole text from the start and owns its output, so they can run in any order.

/// Struct, union and function-pointer typedefs.
pub mod composites;
/// Type/name splitting helpers.
pub mod declarator;
/// Brace matching and line lookup.
pub mod delimiter;
/// `typedef enum` blocks.
pub mod enums;
/// `extern` function prototypes.
pub mod functions;
/// `extern` variables.
pub mod globals;

use tracing::debug;

pub use self::composites::extract_types;
pub use self::delimiter::{LineIndex, match_brace};
pub use self::enums::extract_enums;
pub use self::functions::extract_functions;
pub use self::globals::extract_globals;
use crate::core_api::Result;
use crate::core_api::error::HdrdocError;
use crate::model::SchemaModel;

/// Run every extractor over `text` and merge the results.
///
/// A structural error from any extractor aborts the whole run.
pub fn extract(text: &str) -> Result<SchemaModel> {
	let enums = extract_enums(text)?;
	let types = extract_types(text)?;
	let globals = extract_globals(text);
	let functions = extract_functions(text);
	debug!(
		enums = enums.len(),
		types = types.len(),
		globals = globals.len(),
		functions = functions.len(),
		"extracted declarations"
	);
	Ok(SchemaModel::new(enums, types, globals, functions))
}

/// Byte offsets of a `typedef <kind> { ... } Name;` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypedefBlock {
	/// Start of the `typedef` keyword.
	pub start: usize,
	/// The body's opening `{`.
	pub open: usize,
	/// The body's matching `}`.
	pub close: usize,
	/// The `;` ending the declaration.
	pub semi: usize,
}

impl TypedefBlock {
	/// Text between the braces.
	pub fn body<'a>(&self, text: &'a str) -> &'a str {
		&text[self.open + 1..self.close]
	}

	/// Trimmed text between the closing brace and the semicolon.
	pub fn name<'a>(&self, text: &'a str) -> &'a str {
		text[self.close + 1..self.semi].trim()
	}

	/// The whole declaration, semicolon included.
	pub fn synopsis<'a>(&self, text: &'a str) -> &'a str {
		&text[self.start..=self.semi]
	}
}

/// Locate the block of the typedef starting at `start`.
///
/// Returns `Ok(None)` for forward declarations (`typedef struct _x *x;`), where a `;` comes
/// before any `{`.
pub(crate) fn typedef_block(text: &str, start: usize) -> Result<Option<TypedefBlock>> {
	let rest = &text[start..];
	let open = rest.find('{').map(|p| start + p);
	let first_semi = rest.find(';').map(|p| start + p);

	let open = match (open, first_semi) {
		(Some(open), Some(semi)) if semi < open => return Ok(None),
		(Some(open), _) => open,
		(None, _) => return Ok(None),
	};

	let close = match_brace(text, open)?;
	let semi = text[close..]
		.find(';')
		.map(|p| close + p)
		.ok_or_else(|| HdrdocError::Structural {
			offset: close,
			line: LineIndex::new(text).line_of(close),
		})?;

	Ok(Some(TypedefBlock {
		start,
		open,
		close,
		semi,
	}))
}

/// Find `keyword` at or after `from` as a whole word.
pub(crate) fn find_keyword(text: &str, from: usize, keyword: &str) -> Option<usize> {
	let mut cursor = from;
	while let Some(pos) = text.get(cursor..)?.find(keyword) {
		let at = cursor + pos;
		let end = at + keyword.len();
		let before_ok = text[..at].chars().next_back().is_none_or(|c| !is_ident_char(c));
		let after_ok = text[end..].chars().next().is_none_or(|c| !is_ident_char(c));
		if before_ok && after_ok {
			return Some(at);
		}
		cursor = end;
	}
	None
}

fn is_ident_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}
