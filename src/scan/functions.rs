use tracing::{trace, warn};

use super::declarator::{
	ends_in_comment, normalize_pointer, parse_function_pointer, split_last_whitespace, split_top_level,
	squash_whitespace, strip_line_comment,
};
use super::{LineIndex, find_keyword};
use crate::model::{FieldDecl, FunctionDecl};

const KEYWORD: &str = "extern";

/// Collect `extern` function prototypes.
///
/// An `extern` counts as a function only when a `(` follows it on the same line, comments
/// excluded. An `extern` inside a comment is ignored. Spans that cannot be read as a prototype
/// (no terminating `;`, a body, no name) are skipped.
pub fn extract_functions(text: &str) -> Vec<FunctionDecl> {
	let mut out = Vec::new();
	let mut cursor = 0;
	let mut lines: Option<LineIndex> = None;

	while let Some(start) = find_keyword(text, cursor, KEYWORD) {
		let line_start = text[..start].rfind('\n').map_or(0, |p| p + 1);
		let line_end = text[start..].find('\n').map_or(text.len(), |p| start + p);
		if ends_in_comment(&text[line_start..start]) || !strip_line_comment(&text[start..line_end]).contains('(') {
			cursor = start + KEYWORD.len();
			continue;
		}

		let Some(semi) = text[start..].find(';').map(|p| start + p) else {
			let line = lines.get_or_insert_with(|| LineIndex::new(text)).line_of(start);
			warn!(line, "skipping extern prototype without terminating `;`");
			cursor = line_end;
			continue;
		};

		let span = &text[start..=semi];
		match parse_prototype(span) {
			Some(decl) => {
				trace!(name = %decl.name, params = decl.params.len(), "function");
				out.push(decl);
			}
			None => {
				let line = lines.get_or_insert_with(|| LineIndex::new(text)).line_of(start);
				warn!(line, "skipping unrecognized extern declaration");
				// Resume right after the keyword so a prototype inside the span is still seen.
				cursor = start + KEYWORD.len();
				continue;
			}
		}
		cursor = semi + 1;
	}

	out
}

/// Parse `extern <ret>\t<name>(<params>);`.
fn parse_prototype(span: &str) -> Option<FunctionDecl> {
	if span.contains('{') {
		return None;
	}
	let open = span.find('(')?;
	let close = span.rfind(')')?;
	if close < open {
		return None;
	}

	let head = span[KEYWORD.len()..open].trim();
	let (ret, name) = match head.find('\t') {
		Some(tab) => (&head[..tab], &head[tab..]),
		None => split_last_whitespace(head),
	};
	let head = normalize_pointer(ret, name);
	if head.name.is_empty() || head.ty.is_empty() {
		return None;
	}

	Some(FunctionDecl {
		name: head.name,
		return_type: head.ty,
		synopsis: span.to_string(),
		params: parse_params(&span[open + 1..close]),
	})
}

/// Split a parameter list on top-level commas.
///
/// An empty list and a bare `void` both mean "no parameters".
pub fn parse_params(list: &str) -> Vec<FieldDecl> {
	let trimmed = list.trim();
	if trimmed.is_empty() || trimmed == "void" {
		return Vec::new();
	}

	split_top_level(trimmed)
		.into_iter()
		.map(str::trim)
		.filter(|p| !p.is_empty())
		.map(parse_param)
		.collect()
}

fn parse_param(param: &str) -> FieldDecl {
	if let Some(field) = parse_function_pointer(param) {
		return field;
	}
	let param = squash_whitespace(param);
	let (ty, name) = split_last_whitespace(&param);
	normalize_pointer(ty, name)
}
