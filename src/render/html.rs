//! Single-page HTML output: an index column plus one description pane per declaration.

use super::utils::{UniqueIds, escape_html};
use crate::model::{DeclRef, Document, FieldDecl};

const STYLE: &str = "\
body { margin: 0; font-family: sans-serif; }
.header { padding: 0.5em 1em; border-bottom: 1px solid #ccc; }
.api { margin-left: 1em; font-size: 1.4em; }
.page { display: flex; }
.index { display: flex; flex-direction: column; min-width: 16em; padding: 0.5em; border-right: 1px solid #ccc; }
.cat { margin-top: 0.8em; font-weight: bold; }
.item { text-align: left; border: none; background: none; cursor: pointer; padding: 0.2em 0.5em; }
.level2 { padding-left: 1.5em; }
.selected { background: #dde; }
.desc-pane { padding: 1em; flex: 1; }
.desc { display: none; }
.title { font-size: 1.3em; font-weight: bold; margin-bottom: 0.5em; }
.kind { color: #666; margin-bottom: 0.5em; }
.synopsis { white-space: pre; font-family: monospace; tab-size: 8; background: #f4f4f4; padding: 0.5em; }
.param { font-family: monospace; font-weight: bold; }
.type { font-family: monospace; }
";

const SCRIPT: &str = "\
function displayDesc(e,d){
    var all = document.getElementsByClassName('desc');
    for (var i = all.length - 1; 0 <= i; i--) {
        all[i].style.display = 'none';
    }
    all = document.getElementsByClassName('item');
    for (var i = all.length - 1; 0 <= i; i--) {
        all[i].className = all[i].className.replace(' selected', '');
    }
    document.getElementById(d).style.display = 'block';
    if (e && e.currentTarget && e.currentTarget.className !== undefined) {
        e.currentTarget.className += ' selected';
    }
}
";

struct Entry<'a> {
	id: String,
	decl: DeclRef<'a>,
}

struct Section<'a> {
	label: &'static str,
	entries: Vec<Entry<'a>>,
}

fn sections(doc: &Document) -> Vec<Section<'_>> {
	let mut ids = UniqueIds::default();
	let schema = &doc.schema;
	vec![
		section(&mut ids, "Enums", "enum", schema.enums.iter().map(DeclRef::Enum)),
		section(&mut ids, "Types", "type", schema.types.iter().map(DeclRef::Type)),
		section(&mut ids, "Globals", "global", schema.globals.iter().map(DeclRef::Global)),
		section(&mut ids, "Functions", "func", schema.functions.iter().map(DeclRef::Function)),
	]
}

fn section<'a>(
	ids: &mut UniqueIds,
	label: &'static str,
	prefix: &str,
	decls: impl Iterator<Item = DeclRef<'a>>,
) -> Section<'a> {
	let entries = decls
		.map(|decl| Entry {
			id: ids.next(prefix, decl.name()),
			decl,
		})
		.collect();
	Section { label, entries }
}

/// Render `doc` as a standalone HTML page.
pub fn render_html(doc: &Document) -> String {
	let sections = sections(doc);
	let title = escape_html(&doc.title);
	let version = escape_html(doc.version_label());

	let mut out = String::new();
	out.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
	out.push_str(&format!("    <title>{title}</title>\n"));
	out.push_str("    <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />\n");
	out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
	out.push_str(&format!("    <style>\n{STYLE}    </style>\n"));
	out.push_str("  </head>\n");
	out.push_str("  <body onload=\"displayDesc(event,'Introduction')\">\n");
	out.push_str(&format!(
		"    <div class=\"header\"><span class=\"name\">{title}</span><span class=\"api\">v{version} API Documentation</span></div>\n"
	));
	out.push_str("    <div class=\"page\">\n      <div class=\"index\">\n");
	out.push_str(&index_button(1, "Introduction", "Introduction"));
	out.push_str(&index_button(1, "Guides", "Guides"));

	for section in sections.iter().filter(|s| !s.entries.is_empty()) {
		out.push_str(&format!("        <span class=\"cat\">{}</span>\n", section.label));
		for entry in &section.entries {
			out.push_str(&index_button(2, &entry.id, entry.decl.name()));
		}
	}

	out.push_str("      </div>\n\n      <div class=\"desc-pane\">\n");
	out.push_str(&placeholder_pane("Introduction"));
	out.push_str(&placeholder_pane("Guides"));

	for section in &sections {
		for entry in &section.entries {
			out.push_str(&render_entry(entry));
		}
	}

	out.push_str("      </div>\n    </div>\n");
	out.push_str(&format!("    <script>\n{SCRIPT}    </script>\n"));
	out.push_str("  </body>\n</html>\n");
	out
}

fn placeholder_pane(id: &str) -> String {
	format!(
		"        <div id=\"{id}\" class=\"desc\">\n          <div class=\"title\">{id}</div>\n          <p class=\"desc-text\">TBD</p>\n        </div>\n\n"
	)
}

fn index_button(level: u8, id: &str, label: &str) -> String {
	format!(
		"        <button class=\"item level{level}\" onclick=\"displayDesc(event,'{}')\">{}</button>\n",
		escape_html(id),
		escape_html(label)
	)
}

fn render_entry(entry: &Entry<'_>) -> String {
	let decl = entry.decl;
	let mut out = format!(
		"\n        <div id=\"{}\" class=\"desc\">\n          <div class=\"title\">{}</div>\n",
		escape_html(&entry.id),
		escape_html(decl.name())
	);

	if let DeclRef::Type(t) = decl {
		out.push_str(&format!("          <div class=\"kind\">{}</div>\n", t.kind.label()));
	}
	out.push_str(&format!(
		"          <div class=\"synopsis\">{}</div>\n",
		escape_html(decl.synopsis())
	));
	out.push_str("          <p class=\"desc-text\">TBD</p>\n");

	let rows: Vec<String> = match decl {
		DeclRef::Enum(e) => e.values.iter().map(|v| value_row(v)).collect(),
		DeclRef::Type(t) => t.fields.iter().map(field_row).collect(),
		DeclRef::Global(_) => Vec::new(),
		DeclRef::Function(f) => {
			let mut rows: Vec<String> = f.params.iter().map(field_row).collect();
			rows.push(format!(
				"            <tr><td><span class=\"param\">return</span></td><td><span class=\"type\">{}</span></td><td>TBD</td></tr>\n",
				escape_html(&f.return_type)
			));
			rows
		}
	};

	if !rows.is_empty() {
		out.push_str("          <table class=\"params\">\n");
		for row in rows {
			out.push_str(&row);
		}
		out.push_str("          </table>\n");
	}

	out.push_str("        </div>\n");
	out
}

fn value_row(value: &str) -> String {
	format!(
		"            <tr><td><span class=\"param\">{}</span></td><td>TBD</td></tr>\n",
		escape_html(value)
	)
}

fn field_row(field: &FieldDecl) -> String {
	let name = if field.name.is_empty() { "&nbsp;".to_string() } else { escape_html(&field.name) };
	format!(
		"            <tr><td><span class=\"param\">{name}</span></td><td><span class=\"type\">{}</span></td><td>TBD</td></tr>\n",
		escape_html(&field.ty)
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{CompositeKind, CompositeTypeDecl, EnumDecl, FunctionDecl, SchemaModel};

	fn doc() -> Document {
		Document {
			title: "OjC <API>".into(),
			version: Some("3.1.1".into()),
			schema: SchemaModel::new(
				vec![EnumDecl {
					name: "ojType".into(),
					synopsis: "typedef enum { OJ_NULL } ojType;".into(),
					values: vec!["OJ_NULL".into()],
				}],
				vec![
					CompositeTypeDecl {
						name: "Hook".into(),
						kind: CompositeKind::Struct,
						synopsis: "typedef struct { int\ta; } Hook;".into(),
						fields: vec![FieldDecl::new("int", "a")],
					},
					CompositeTypeDecl {
						name: "Hook".into(),
						kind: CompositeKind::FunctionPointer,
						synopsis: "typedef void (*Hook)(void);".into(),
						fields: Vec::new(),
					},
				],
				Vec::new(),
				vec![FunctionDecl {
					name: "oj_key".into(),
					return_type: "const char*".into(),
					synopsis: "extern const char*\toj_key(ojVal val);".into(),
					params: vec![FieldDecl::new("ojVal", "val")],
				}],
			),
		}
	}

	#[test]
	fn banner_and_title_are_escaped() {
		let html = render_html(&doc());
		assert!(html.contains("<title>OjC &lt;API&gt;</title>"));
		assert!(html.contains("v3.1.1 API Documentation"));
	}

	#[test]
	fn empty_categories_are_omitted() {
		let html = render_html(&doc());
		assert!(html.contains("<span class=\"cat\">Enums</span>"));
		assert!(html.contains("<span class=\"cat\">Functions</span>"));
		assert!(!html.contains("<span class=\"cat\">Globals</span>"));
	}

	#[test]
	fn duplicate_type_names_get_distinct_panes() {
		let html = render_html(&doc());
		assert!(html.contains("id=\"type-Hook\""));
		assert!(html.contains("id=\"type-Hook-2\""));
		assert!(html.contains("displayDesc(event,'type-Hook-2')"));
	}

	#[test]
	fn function_pane_lists_params_and_return() {
		let html = render_html(&doc());
		assert!(html.contains("<span class=\"param\">val</span></td><td><span class=\"type\">ojVal</span>"));
		assert!(html.contains("<span class=\"type\">const char*</span>"));
	}

	#[test]
	fn missing_version_shows_placeholder() {
		let mut d = doc();
		d.version = None;
		assert!(render_html(&d).contains("v? API Documentation"));
	}
}
