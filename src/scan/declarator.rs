//! Type/name splitting shared by struct fields, parameters and prototypes.

use crate::model::FieldDecl;

/// Move pointer stars from the front of `name` onto the end of `ty`.
///
/// `("char", "*name")`, `("char*", "name")` and `("char *", "name")` all become
/// `("char*", "name")`.
pub fn normalize_pointer(ty: &str, name: &str) -> FieldDecl {
	let name = name.trim();
	let ident = name.trim_start_matches(|c: char| c == '*' || c.is_whitespace());
	let moved = name[..name.len() - ident.len()].chars().filter(|c| *c == '*').count();

	let ty = ty.trim();
	let base = ty.trim_end_matches(|c: char| c == '*' || c.is_whitespace());
	let existing = ty[base.len()..].chars().filter(|c| *c == '*').count();

	let mut normalized = base.to_string();
	normalized.extend(std::iter::repeat_n('*', existing + moved));
	FieldDecl::new(normalized, ident)
}

/// Split a column-aligned declaration into type and name text.
///
/// Headers in this family align declarators with tabs, so the last tab run wins when one is
/// present. Otherwise the last whitespace run is used. Text with no separator is all type.
pub fn split_declarator(text: &str) -> (&str, &str) {
	let text = text.trim();
	if text.contains('\t') {
		let mut columns = text.rsplitn(2, '\t');
		let name = columns.next().unwrap_or_default();
		let ty = columns.next().unwrap_or_default();
		return (ty.trim(), name.trim());
	}
	split_last_whitespace(text)
}

/// Split at the last run of whitespace.
pub fn split_last_whitespace(text: &str) -> (&str, &str) {
	let text = text.trim();
	match text.rfind(char::is_whitespace) {
		Some(pos) => (text[..pos].trim_end(), text[pos..].trim_start()),
		None => (text, ""),
	}
}

/// Split and normalize in one step.
pub fn parse_declarator(text: &str) -> FieldDecl {
	let (ty, name) = split_declarator(text);
	normalize_pointer(ty, name)
}

/// Parse a function-pointer declarator `ret (*name)(args)`.
///
/// The name is lifted out, leaving `ret (*)(args)` as the type. Each argument is normalized
/// like a parameter, so `void *ctx` and `void* ctx` read the same. Returns `None` when the
/// text has no `(*name)` group.
pub fn parse_function_pointer(text: &str) -> Option<FieldDecl> {
	let text = squash_whitespace(text);
	let star = text.find("(*")?;
	let end = star + 2 + text[star + 2..].find(')')?;
	let name = text[star + 2..end].trim_start_matches('*').trim();
	let ret = normalize_pointer(&text[..star], "").ty;

	let rest = text[end + 1..].trim();
	let args = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
		Some(args) => format!("({})", normalize_args(args)),
		None => rest.to_string(),
	};
	Some(FieldDecl::new(format!("{ret} (*){args}"), name))
}

fn normalize_args(args: &str) -> String {
	split_top_level(args)
		.into_iter()
		.map(str::trim)
		.filter(|arg| !arg.is_empty())
		.map(|arg| {
			if arg.contains('(') {
				return arg.to_string();
			}
			let (ty, name) = split_last_whitespace(arg);
			let field = normalize_pointer(ty, name);
			if field.name.is_empty() { field.ty } else { format!("{} {}", field.ty, field.name) }
		})
		.collect::<Vec<_>>()
		.join(", ")
}

/// Split on commas outside parentheses and brackets.
///
/// `a, f(b, c), d[1, 2]` yields three pieces. Pieces are not trimmed.
pub fn split_top_level(list: &str) -> Vec<&str> {
	let mut pieces = Vec::new();
	let mut depth = 0usize;
	let mut begin = 0;
	for (i, ch) in list.char_indices() {
		match ch {
			'(' | '[' => depth += 1,
			')' | ']' => depth = depth.saturating_sub(1),
			',' if depth == 0 => {
				pieces.push(&list[begin..i]);
				begin = i + 1;
			}
			_ => {}
		}
	}
	pieces.push(&list[begin..]);
	pieces
}

/// Collapse every whitespace run to one space.
pub fn squash_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the end of `prefix` lies inside a `//` comment or an unclosed `/*` comment.
///
/// `prefix` is the text of a line up to some position.
pub fn ends_in_comment(prefix: &str) -> bool {
	// A marker placed at the position survives comment stripping only outside comments.
	let marked = format!("{prefix}\u{0}");
	!strip_line_comment(&marked).ends_with('\u{0}')
}

/// Drop `//` comments and single-line `/* ... */` comments from a line.
pub fn strip_line_comment(line: &str) -> String {
	let mut out = String::with_capacity(line.len());
	let mut rest = line;
	loop {
		let line_comment = rest.find("//");
		let block_comment = rest.find("/*");
		match (line_comment, block_comment) {
			(Some(l), Some(b)) if b < l => {
				out.push_str(&rest[..b]);
				match rest[b + 2..].find("*/") {
					Some(end) => rest = &rest[b + 2 + end + 2..],
					None => return out,
				}
			}
			(None, Some(b)) => {
				out.push_str(&rest[..b]);
				match rest[b + 2..].find("*/") {
					Some(end) => rest = &rest[b + 2 + end + 2..],
					None => return out,
				}
			}
			(Some(l), _) => {
				out.push_str(&rest[..l]);
				return out;
			}
			(None, None) => {
				out.push_str(rest);
				return out;
			}
		}
	}
}

/// Collapse every run of tabs to a single tab.
pub fn collapse_tabs(line: &str) -> String {
	let mut out = String::with_capacity(line.len());
	let mut prev_tab = false;
	for ch in line.chars() {
		if ch == '\t' {
			if !prev_tab {
				out.push(ch);
			}
			prev_tab = true;
		} else {
			out.push(ch);
			prev_tab = false;
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn pointer_spellings_normalize_identically() {
		let expected = FieldDecl::new("char*", "name");
		assert_eq!(parse_declarator("char* name"), expected);
		assert_eq!(parse_declarator("char *name"), expected);
		assert_eq!(parse_declarator("char * name"), expected);
		assert_eq!(parse_declarator("char\t\t*name"), expected);
	}

	#[test]
	fn double_pointers_accumulate() {
		assert_eq!(parse_declarator("char **name"), FieldDecl::new("char**", "name"));
		assert_eq!(parse_declarator("char* *name"), FieldDecl::new("char**", "name"));
		assert_eq!(parse_declarator("const char\t**json"), FieldDecl::new("const char**", "json"));
	}

	#[test]
	fn tab_column_wins_over_spaces() {
		assert_eq!(parse_declarator("long double\tdub"), FieldDecl::new("long double", "dub"));
		assert_eq!(parse_declarator("struct _ojVal\t\t*next"), FieldDecl::new("struct _ojVal*", "next"));
	}

	#[test]
	fn lone_token_is_type() {
		assert_eq!(split_declarator("int"), ("int", ""));
	}

	#[test]
	fn comments_are_removed() {
		assert_eq!(strip_line_comment("\tint\tlen;\t// length"), "\tint\tlen;\t");
		assert_eq!(strip_line_comment("A, /* first */ B"), "A,  B");
		assert_eq!(strip_line_comment("A /* open"), "A ");
	}

	#[test]
	fn function_pointer_arguments_are_normalized() {
		assert_eq!(
			parse_function_pointer("void\t\t(*pop)(void *ctx)"),
			Some(FieldDecl::new("void (*)(void* ctx)", "pop"))
		);
		assert_eq!(
			parse_function_pointer("char *(*name_of)(int, const char * label)"),
			Some(FieldDecl::new("char* (*)(int, const char* label)", "name_of"))
		);
		assert_eq!(parse_function_pointer("int\tplain"), None);
	}

	#[test]
	fn top_level_split_ignores_nested_commas() {
		assert_eq!(split_top_level("a, f(b, c), d[1, 2]"), vec!["a", " f(b, c)", " d[1, 2]"]);
		assert_eq!(split_top_level(""), vec![""]);
	}

	#[test]
	fn comment_position_detection() {
		assert!(ends_in_comment("// "));
		assert!(ends_in_comment("\tint x; /* "));
		assert!(!ends_in_comment("/* note */ "));
		assert!(!ends_in_comment("    "));
	}

	#[test]
	fn tab_runs_collapse() {
		assert_eq!(collapse_tabs("extern bool\t\toj_thread_safe;"), "extern bool\toj_thread_safe;");
	}
}
