use std::collections::HashSet;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Make text safe inside a Markdown table cell.
pub fn escape_table_cell(text: &str) -> String {
	text.replace('|', "\\|").replace('\n', " ")
}

/// Hands out element ids, suffixing repeats so every id stays unique on the page.
#[derive(Debug, Default)]
pub struct UniqueIds {
	seen: HashSet<String>,
}

impl UniqueIds {
	/// Id for `name` in the section identified by `prefix`.
	pub fn next(&mut self, prefix: &str, name: &str) -> String {
		let base = format!("{prefix}-{name}");
		let mut candidate = base.clone();
		let mut n = 2;
		while !self.seen.insert(candidate.clone()) {
			candidate = format!("{base}-{n}");
			n += 1;
		}
		candidate
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn html_escaping() {
		assert_eq!(escape_html("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
	}

	#[test]
	fn table_cells_escape_pipes() {
		assert_eq!(escape_table_cell("a|b\nc"), "a\\|b c");
	}

	#[test]
	fn repeated_ids_get_suffixes() {
		let mut ids = UniqueIds::default();
		assert_eq!(ids.next("type", "Hook"), "type-Hook");
		assert_eq!(ids.next("type", "Hook"), "type-Hook-2");
		assert_eq!(ids.next("enum", "Hook"), "enum-Hook");
	}
}
