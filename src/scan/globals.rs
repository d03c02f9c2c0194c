use tracing::trace;

use super::declarator::{collapse_tabs, split_declarator, strip_line_comment};
use super::find_keyword;
use crate::model::GlobalDecl;

/// Collect `extern` variables, one per line.
///
/// Any line with a `(` is left to the function extractor, so the two never overlap.
pub fn extract_globals(text: &str) -> Vec<GlobalDecl> {
	text.lines().filter_map(global_from_line).collect()
}

fn global_from_line(line: &str) -> Option<GlobalDecl> {
	let line = strip_line_comment(line);
	if find_keyword(&line, 0, "extern").is_none() || !line.contains(';') || line.contains('(') {
		return None;
	}

	let trimmed = line.trim();
	let decl = trimmed.trim_end_matches(';').trim_end();
	let (_, declarator) = split_declarator(decl);
	let name = declarator.trim_start_matches('*').trim();
	if name.is_empty() {
		return None;
	}

	trace!(name, "global");
	Some(GlobalDecl {
		name: name.to_string(),
		synopsis: collapse_tabs(trimmed),
	})
}
