//! Declarations extracted from a header and the sorted model handed to renderers.

/// Name filters applied to a [`SchemaModel`].
pub mod query;

use serde::{Deserialize, Serialize};

pub use self::query::{Query, Sections};

/// A `typedef enum { ... } Name;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
	/// Typedef name.
	pub name: String,
	/// Verbatim source of the declaration.
	pub synopsis: String,
	/// Value identifiers in declaration order, initializers removed.
	pub values: Vec<String>,
}

/// A typed name inside a struct/union body or a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
	/// Declared type; pointer stars are attached here.
	#[serde(rename = "type")]
	pub ty: String,
	/// Identifier without pointer stars. Empty for unnamed parameters.
	pub name: String,
}

impl FieldDecl {
	/// Build a field from an already normalized type and name.
	pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			ty: ty.into(),
			name: name.into(),
		}
	}
}

/// Flavor of a [`CompositeTypeDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
	/// `typedef struct { ... } Name;`
	Struct,
	/// `typedef union { ... } Name;`
	Union,
	/// `typedef Ret (*Name)(Args);`
	FunctionPointer,
}

impl CompositeKind {
	/// Short label used by renderers.
	pub fn label(self) -> &'static str {
		match self {
			Self::Struct => "struct",
			Self::Union => "union",
			Self::FunctionPointer => "function pointer",
		}
	}
}

/// A struct, union or function-pointer typedef.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeTypeDecl {
	/// Typedef name with pointer stars removed.
	pub name: String,
	/// Which declaration shape produced this entry.
	pub kind: CompositeKind,
	/// Verbatim source of the declaration.
	pub synopsis: String,
	/// Fields in source order; always empty for function pointers.
	pub fields: Vec<FieldDecl>,
}

/// An `extern` variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDecl {
	/// Variable name.
	pub name: String,
	/// Declaration line with tab runs collapsed.
	pub synopsis: String,
}

/// An `extern` function prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
	/// Function name.
	pub name: String,
	/// Return type, pointer stars included.
	pub return_type: String,
	/// Verbatim source of the prototype.
	pub synopsis: String,
	/// Parameters in declaration order.
	pub params: Vec<FieldDecl>,
}

impl FunctionDecl {
	/// Single-line prototype rebuilt from the parsed parts.
	pub fn signature(&self) -> String {
		let params = if self.params.is_empty() {
			"void".to_string()
		} else {
			self.params
				.iter()
				.map(|p| {
					if p.name.is_empty() {
						p.ty.clone()
					} else if p.ty.is_empty() {
						p.name.clone()
					} else if p.ty.contains("(*)") {
						p.ty.replacen("(*)", &format!("(*{})", p.name), 1)
					} else {
						format!("{} {}", p.ty, p.name)
					}
				})
				.collect::<Vec<_>>()
				.join(", ")
		};
		format!("{} {}({params})", self.return_type, self.name)
	}
}

/// Borrowed view of a single declaration of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclRef<'a> {
	/// An enumeration.
	Enum(&'a EnumDecl),
	/// A struct, union or function pointer.
	Type(&'a CompositeTypeDecl),
	/// An extern variable.
	Global(&'a GlobalDecl),
	/// An extern function.
	Function(&'a FunctionDecl),
}

impl DeclRef<'_> {
	/// Name of the referenced declaration.
	pub fn name(&self) -> &str {
		match self {
			Self::Enum(e) => &e.name,
			Self::Type(t) => &t.name,
			Self::Global(g) => &g.name,
			Self::Function(f) => &f.name,
		}
	}

	/// Synopsis of the referenced declaration.
	pub fn synopsis(&self) -> &str {
		match self {
			Self::Enum(e) => &e.synopsis,
			Self::Type(t) => &t.synopsis,
			Self::Global(g) => &g.synopsis,
			Self::Function(f) => &f.synopsis,
		}
	}
}

/// The four extracted collections, each sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
	/// Enumerations.
	pub enums: Vec<EnumDecl>,
	/// Structs, unions and function pointers.
	pub types: Vec<CompositeTypeDecl>,
	/// Extern variables.
	pub globals: Vec<GlobalDecl>,
	/// Extern functions.
	pub functions: Vec<FunctionDecl>,
}

impl SchemaModel {
	/// Merge extractor output, sorting every collection by name.
	///
	/// The sort is stable, so declarations sharing a name keep their extraction order.
	pub fn new(
		mut enums: Vec<EnumDecl>,
		mut types: Vec<CompositeTypeDecl>,
		mut globals: Vec<GlobalDecl>,
		mut functions: Vec<FunctionDecl>,
	) -> Self {
		enums.sort_by(|a, b| a.name.cmp(&b.name));
		types.sort_by(|a, b| a.name.cmp(&b.name));
		globals.sort_by(|a, b| a.name.cmp(&b.name));
		functions.sort_by(|a, b| a.name.cmp(&b.name));
		Self {
			enums,
			types,
			globals,
			functions,
		}
	}

	/// Total number of declarations.
	pub fn len(&self) -> usize {
		self.enums.len() + self.types.len() + self.globals.len() + self.functions.len()
	}

	/// Whether nothing was extracted.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Look a declaration up by exact name.
	///
	/// Collections are searched in enum, type, global, function order; the first hit wins.
	pub fn find(&self, name: &str) -> Option<DeclRef<'_>> {
		self.iter().find(|decl| decl.name() == name)
	}

	/// Every declaration, collection by collection.
	pub fn iter(&self) -> impl Iterator<Item = DeclRef<'_>> {
		self.enums
			.iter()
			.map(DeclRef::Enum)
			.chain(self.types.iter().map(DeclRef::Type))
			.chain(self.globals.iter().map(DeclRef::Global))
			.chain(self.functions.iter().map(DeclRef::Function))
	}

	/// Copy of the model keeping only declarations accepted by `query`.
	pub fn filter(&self, query: &Query) -> Self {
		let sections = query.sections();
		Self {
			enums: keep(sections, Sections::ENUMS, &self.enums, |e| query.matches(&e.name)),
			types: keep(sections, Sections::TYPES, &self.types, |t| query.matches(&t.name)),
			globals: keep(sections, Sections::GLOBALS, &self.globals, |g| query.matches(&g.name)),
			functions: keep(sections, Sections::FUNCTIONS, &self.functions, |f| query.matches(&f.name)),
		}
	}
}

/// Everything a renderer needs for one header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Page title.
	pub title: String,
	/// Version string found in the header, if any.
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub version: Option<String>,
	/// Extracted declarations.
	pub schema: SchemaModel,
}

impl Document {
	/// Version for display, `?` when the header carries none.
	pub fn version_label(&self) -> &str {
		self.version.as_deref().unwrap_or("?")
	}
}

fn keep<T: Clone>(sections: Sections, section: Sections, items: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
	if !sections.contains(section) {
		return Vec::new();
	}
	items.iter().filter(|item| pred(item)).cloned().collect()
}
