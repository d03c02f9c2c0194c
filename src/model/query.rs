use bitflags::bitflags;
use regex::Regex;

use crate::core_api::Result;

bitflags! {
	/// Declaration collections a query can select.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Sections: u32 {
		/// Enumerations.
		const ENUMS = 1 << 0;
		/// Structs, unions and function pointers.
		const TYPES = 1 << 1;
		/// Extern variables.
		const GLOBALS = 1 << 2;
		/// Extern functions.
		const FUNCTIONS = 1 << 3;
	}
}

impl Default for Sections {
	fn default() -> Self {
		Self::all()
	}
}

/// Name filter over a [`super::SchemaModel`].
///
/// The pattern is matched as a substring of each declaration name. `|` separates alternatives;
/// every other regex metacharacter is taken literally.
#[derive(Debug, Clone)]
pub struct Query {
	pattern: Option<Regex>,
	sections: Sections,
}

impl Default for Query {
	fn default() -> Self {
		Self {
			pattern: None,
			sections: Sections::all(),
		}
	}
}

impl Query {
	/// Match every declaration in every section.
	pub fn all() -> Self {
		Self::default()
	}

	/// Compile a name pattern.
	pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
		let trimmed = pattern.trim();
		if trimmed.is_empty() {
			return Ok(Self::all());
		}
		let escaped = escape_regex_preserving_pipes(trimmed);
		let source = if case_sensitive { escaped } else { format!("(?i){escaped}") };
		Ok(Self {
			pattern: Some(Regex::new(&source)?),
			sections: Sections::all(),
		})
	}

	/// Restrict the query to `sections`; an empty set selects everything.
	pub fn with_sections(mut self, sections: Sections) -> Self {
		self.sections = if sections.is_empty() { Sections::all() } else { sections };
		self
	}

	/// Selected sections.
	pub fn sections(&self) -> Sections {
		self.sections
	}

	/// Whether `name` passes the pattern.
	pub fn matches(&self, name: &str) -> bool {
		self.pattern.as_ref().is_none_or(|re| re.is_match(name))
	}
}

/// Escape regex metacharacters except pipes, so `a.b|c*` means "`a.b` or `c*`".
pub fn escape_regex_preserving_pipes(pattern: &str) -> String {
	let mut escaped = String::with_capacity(pattern.len() * 2);
	for ch in pattern.chars() {
		match ch {
			'|' => escaped.push(ch),
			'\\' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' => {
				escaped.push('\\');
				escaped.push(ch);
			}
			_ => escaped.push(ch),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{GlobalDecl, SchemaModel};

	#[test]
	fn escape_keeps_pipes_only() {
		assert_eq!(escape_regex_preserving_pipes("a.b|c*"), "a\\.b|c\\*");
		assert_eq!(escape_regex_preserving_pipes("(x)"), "\\(x\\)");
	}

	#[test]
	fn empty_pattern_matches_everything() {
		let q = Query::new("   ", true).unwrap();
		assert!(q.matches("anything"));
	}

	#[test]
	fn alternatives_and_case() {
		let q = Query::new("PARSE|write", false).unwrap();
		assert!(q.matches("oj_parse_str"));
		assert!(q.matches("oj_fwrite"));
		assert!(!q.matches("oj_destroy"));

		let strict = Query::new("Parse", true).unwrap();
		assert!(!strict.matches("oj_parse_str"));
	}

	#[test]
	fn filter_respects_sections() {
		let model = SchemaModel::new(
			Vec::new(),
			Vec::new(),
			vec![GlobalDecl {
				name: "oj_thread_safe".into(),
				synopsis: String::new(),
			}],
			Vec::new(),
		);
		let only_functions = Query::all().with_sections(Sections::FUNCTIONS);
		assert!(model.filter(&only_functions).is_empty());
		assert_eq!(model.filter(&Query::all().with_sections(Sections::empty())).len(), 1);
	}
}
