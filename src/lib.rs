//! Core library for hdrdoc, which documents the public declarations of a C header.
//!
//! The scanner recognizes a fixed set of declaration shapes (enum, struct and union typedefs,
//! function-pointer typedefs, `extern` variables and prototypes) by keyword anchors, brace
//! balancing and tab-aligned columns, without building a syntax tree. The resulting
//! [`SchemaModel`] is sorted by name and rendered as HTML, Markdown or JSON.

/// Core API: the `Hdrdoc` generator, errors and header loading.
pub mod core_api;

/// Declaration types and the sorted schema model.
pub mod model;

/// Rendering of extracted declarations.
pub mod render;

/// Heuristic declaration scanner.
pub mod scan;

/// Version string lookup.
pub mod version;

pub use crate::core_api::{Hdrdoc, HdrdocError, Result};
pub use crate::model::{
	CompositeKind, CompositeTypeDecl, DeclRef, Document, EnumDecl, FieldDecl, FunctionDecl, GlobalDecl, Query,
	SchemaModel, Sections,
};
pub use crate::render::{RenderFormat, Renderer};
