use tracing::trace;

use super::declarator::{split_top_level, strip_line_comment};
use super::typedef_block;
use crate::core_api::Result;
use crate::model::EnumDecl;

const ANCHOR: &str = "typedef enum";

/// Collect every `typedef enum { ... } Name;` in source order.
pub fn extract_enums(text: &str) -> Result<Vec<EnumDecl>> {
	let mut out = Vec::new();
	let mut cursor = 0;

	while let Some(pos) = text[cursor..].find(ANCHOR) {
		let start = cursor + pos;
		let Some(block) = typedef_block(text, start)? else {
			cursor = start + ANCHOR.len();
			continue;
		};

		let decl = EnumDecl {
			name: block.name(text).to_string(),
			synopsis: block.synopsis(text).to_string(),
			values: enum_values(block.body(text)),
		};
		trace!(name = %decl.name, values = decl.values.len(), "enum");
		out.push(decl);
		cursor = block.semi + 1;
	}

	Ok(out)
}

/// Value identifiers of an enum body, `= expr` initializers dropped.
///
/// Commas inside an initializer's parentheses do not separate values.
fn enum_values(body: &str) -> Vec<String> {
	body.lines()
		.map(strip_line_comment)
		.flat_map(|line| {
			split_top_level(&line)
				.into_iter()
				.filter_map(|entry| {
					let ident = entry.split('=').next().unwrap_or_default().trim();
					(!ident.is_empty()).then(|| ident.to_string())
				})
				.collect::<Vec<_>>()
		})
		.collect()
}
