use super::utils::escape_table_cell;
use crate::model::{Document, FieldDecl};

/// Render `doc` as Markdown: one section per collection, one heading per declaration.
pub fn render_markdown(doc: &Document) -> String {
	let schema = &doc.schema;
	let mut out = format!("# {} v{}\n", doc.title, doc.version_label());

	if !schema.enums.is_empty() {
		out.push_str("\n## Enums\n");
		for e in &schema.enums {
			heading(&mut out, &e.name, None);
			synopsis(&mut out, &e.synopsis);
			if !e.values.is_empty() {
				out.push_str("\n| Value |\n| --- |\n");
				for v in &e.values {
					out.push_str(&format!("| `{}` |\n", escape_table_cell(v)));
				}
			}
		}
	}

	if !schema.types.is_empty() {
		out.push_str("\n## Types\n");
		for t in &schema.types {
			heading(&mut out, &t.name, Some(t.kind.label()));
			synopsis(&mut out, &t.synopsis);
			field_table(&mut out, "Field", &t.fields);
		}
	}

	if !schema.globals.is_empty() {
		out.push_str("\n## Globals\n");
		for g in &schema.globals {
			heading(&mut out, &g.name, None);
			synopsis(&mut out, &g.synopsis);
		}
	}

	if !schema.functions.is_empty() {
		out.push_str("\n## Functions\n");
		for f in &schema.functions {
			heading(&mut out, &f.name, None);
			synopsis(&mut out, &f.signature());
			field_table(&mut out, "Parameter", &f.params);
			out.push_str(&format!("\n**Returns:** `{}`\n", f.return_type));
		}
	}

	out
}

fn heading(out: &mut String, name: &str, kind: Option<&str>) {
	match kind {
		Some(kind) => out.push_str(&format!("\n### `{name}` ({kind})\n")),
		None => out.push_str(&format!("\n### `{name}`\n")),
	}
}

fn synopsis(out: &mut String, text: &str) {
	out.push_str("\n```c\n");
	out.push_str(text.trim_end());
	out.push_str("\n```\n");
}

fn field_table(out: &mut String, label: &str, fields: &[FieldDecl]) {
	if fields.is_empty() {
		return;
	}
	out.push_str(&format!("\n| {label} | Type |\n| --- | --- |\n"));
	for field in fields {
		out.push_str(&format!(
			"| `{}` | `{}` |\n",
			escape_table_cell(&field.name),
			escape_table_cell(&field.ty)
		));
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::model::{FunctionDecl, GlobalDecl, SchemaModel};

	#[test]
	fn function_and_global_sections() {
		let doc = Document {
			title: "Demo".into(),
			version: None,
			schema: SchemaModel::new(
				Vec::new(),
				Vec::new(),
				vec![GlobalDecl {
					name: "oj_thread_safe".into(),
					synopsis: "extern bool\toj_thread_safe;".into(),
				}],
				vec![FunctionDecl {
					name: "oj_key".into(),
					return_type: "const char*".into(),
					synopsis: String::new(),
					params: vec![FieldDecl::new("ojVal", "val")],
				}],
			),
		};

		let expected = "# Demo v?\n\
			\n## Globals\n\
			\n### `oj_thread_safe`\n\
			\n```c\nextern bool\toj_thread_safe;\n```\n\
			\n## Functions\n\
			\n### `oj_key`\n\
			\n```c\nconst char* oj_key(ojVal val)\n```\n\
			\n| Parameter | Type |\n| --- | --- |\n| `val` | `ojVal` |\n\
			\n**Returns:** `const char*`\n";
		assert_eq!(render_markdown(&doc), expected);
	}
}
