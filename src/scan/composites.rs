use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::declarator::{parse_declarator, parse_function_pointer, strip_line_comment};
use super::typedef_block;
use crate::core_api::Result;
use crate::model::{CompositeKind, CompositeTypeDecl, FieldDecl};

/// `typedef <ret> (*Name)(<args>);` on a single line.
static FUNCTION_POINTER: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"typedef\s+[^;{}()]+?\(\s*\*\s*(?P<name>[A-Za-z_]\w*)\s*\)\s*\([^;]*\)\s*;")
		.expect("function pointer pattern")
});

/// Collect unions, then structs, then function-pointer typedefs.
///
/// Names are not deduplicated across passes: a struct and a function pointer sharing a name
/// both appear.
pub fn extract_types(text: &str) -> Result<Vec<CompositeTypeDecl>> {
	let mut out = Vec::new();
	collect_blocks(text, "typedef union", CompositeKind::Union, &mut out)?;
	collect_blocks(text, "typedef struct", CompositeKind::Struct, &mut out)?;
	collect_function_pointers(text, &mut out);
	Ok(out)
}

fn collect_blocks(text: &str, anchor: &str, kind: CompositeKind, out: &mut Vec<CompositeTypeDecl>) -> Result<()> {
	let mut cursor = 0;
	while let Some(pos) = text[cursor..].find(anchor) {
		let start = cursor + pos;
		let Some(block) = typedef_block(text, start)? else {
			cursor = start + anchor.len();
			continue;
		};

		let decl = CompositeTypeDecl {
			name: block.name(text).replace('*', "").trim().to_string(),
			kind,
			synopsis: block.synopsis(text).to_string(),
			fields: fields(block.body(text)),
		};
		trace!(name = %decl.name, kind = kind.label(), fields = decl.fields.len(), "composite");
		out.push(decl);
		cursor = block.semi + 1;
	}
	Ok(())
}

/// Field declarations of a struct or union body.
///
/// Lines holding a brace open or close a nested block and are skipped; the fields inside
/// nested blocks still land in the outer list, in source order.
fn fields(body: &str) -> Vec<FieldDecl> {
	let mut out = Vec::new();
	for line in body.lines() {
		let line = strip_line_comment(line);
		if line.contains('{') || line.contains('}') {
			continue;
		}
		let mut statements: Vec<&str> = line.split(';').collect();
		// Whatever follows the last `;` is not a terminated field.
		statements.pop();
		for statement in statements {
			if statement.trim().is_empty() {
				continue;
			}
			let field = parse_function_pointer(statement).unwrap_or_else(|| parse_declarator(statement));
			out.push(field);
		}
	}
	out
}

fn collect_function_pointers(text: &str, out: &mut Vec<CompositeTypeDecl>) {
	for line in text.lines() {
		let Some(caps) = FUNCTION_POINTER.captures(line) else {
			continue;
		};
		let name = caps["name"].to_string();
		trace!(name = %name, "function pointer");
		out.push(CompositeTypeDecl {
			name,
			kind: CompositeKind::FunctionPointer,
			synopsis: line.trim().to_string(),
			fields: Vec::new(),
		});
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::core_api::error::HdrdocError;

	#[test]
	fn single_line_struct() {
		let types = extract_types("typedef struct { int64_t\tcount; char*\tlabel; } Item;").unwrap();
		assert_eq!(types.len(), 1);
		assert_eq!(types[0].name, "Item");
		assert_eq!(types[0].kind, CompositeKind::Struct);
		assert_eq!(
			types[0].fields,
			vec![FieldDecl::new("int64_t", "count"), FieldDecl::new("char*", "label")]
		);
	}

	#[test]
	fn pointer_typedef_name_and_star_fields() {
		let src = "    typedef struct _ojBuf {\n\
			\tchar\t\t*head;\n\
			\tint\t\tfd;\n\
			\tchar\t\tbase[4096];\n\
			    } *ojBuf;\n";
		let types = extract_types(src).unwrap();
		assert_eq!(types[0].name, "ojBuf");
		assert_eq!(
			types[0].fields,
			vec![
				FieldDecl::new("char*", "head"),
				FieldDecl::new("int", "fd"),
				FieldDecl::new("char", "base[4096]"),
			]
		);
	}

	#[test]
	fn nested_union_fields_are_flattened() {
		let src = "typedef struct _ojStr {\n\
			\tint\t\tlen;\t// length of raw\n\
			\tunion {\n\
			\t    char\traw[120];\n\
			\t    union ojS4k\t*s4k;\n\
			\t};\n\
			} *ojStr;\n";
		let types = extract_types(src).unwrap();
		assert_eq!(types.len(), 1);
		assert_eq!(types[0].name, "ojStr");
		assert_eq!(
			types[0].fields,
			vec![
				FieldDecl::new("int", "len"),
				FieldDecl::new("char", "raw[120]"),
				FieldDecl::new("union ojS4k*", "s4k"),
			]
		);
	}

	#[test]
	fn unions_are_labelled() {
		let types = extract_types("typedef union {\n\tint\ti;\n\tdouble\td;\n} Num;").unwrap();
		assert_eq!(types[0].kind, CompositeKind::Union);
		assert_eq!(types[0].fields.len(), 2);
	}

	#[test]
	fn function_pointer_typedef() {
		let types = extract_types("typedef void (*Callback)(int code);").unwrap();
		assert_eq!(types.len(), 1);
		assert_eq!(types[0].name, "Callback");
		assert_eq!(types[0].kind, CompositeKind::FunctionPointer);
		assert!(types[0].fields.is_empty());
	}

	#[test]
	fn tab_aligned_function_pointers() {
		let src = "    typedef ojCallbackOp\t(*ojParseCallback)(ojVal val, void *ctx);\n\
			    typedef ssize_t\t\t(*ojReadFunc)(void *src, char *buf, size_t size);\n";
		let names: Vec<_> = extract_types(src).unwrap().into_iter().map(|t| t.name).collect();
		assert_eq!(names, vec!["ojParseCallback", "ojReadFunc"]);
	}

	#[test]
	fn duplicate_names_survive_both_passes() {
		let src = "typedef struct { int\ta; } Hook;\ntypedef void (*Hook)(void);";
		let types = extract_types(src).unwrap();
		assert_eq!(types.len(), 2);
		assert!(types.iter().all(|t| t.name == "Hook"));
	}

	#[test]
	fn forward_struct_typedef_is_skipped() {
		let src = "typedef struct _ojVal *ojVal;\n";
		assert!(extract_types(src).unwrap().is_empty());
	}

	#[test]
	fn empty_struct_has_no_fields() {
		let types = extract_types("typedef struct {\n} Empty;").unwrap();
		assert_eq!(types[0].name, "Empty");
		assert!(types[0].fields.is_empty());
	}

	#[test]
	fn unclosed_struct_is_structural() {
		let err = extract_types("typedef struct { int x;").unwrap_err();
		assert!(matches!(err, HdrdocError::Structural { .. }));
	}

	#[test]
	fn braces_in_trailing_comments_keep_the_field() {
		let src = "typedef struct {\n\tint\tflags;\t// see {FLAGS}\n\tint\tn;\n} S;";
		let types = extract_types(src).unwrap();
		assert_eq!(types[0].fields, vec![FieldDecl::new("int", "flags"), FieldDecl::new("int", "n")]);
	}

	#[test]
	fn function_pointer_members_split_like_parameters() {
		let src = "typedef struct _ojParser {\n\
			\tvoid\t\t(*push)(ojVal val, void *ctx);\n\
			\tojVal\t\t(*pop)(void *ctx);\n\
			\tvoid\t\t*ctx;\n\
			} *ojParser;\n";
		let types = extract_types(src).unwrap();
		assert_eq!(
			types[0].fields,
			vec![
				FieldDecl::new("void (*)(ojVal val, void* ctx)", "push"),
				FieldDecl::new("ojVal (*)(void* ctx)", "pop"),
				FieldDecl::new("void*", "ctx"),
			]
		);
	}
}
