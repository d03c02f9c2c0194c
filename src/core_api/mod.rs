//! Core library API: load a header, extract its declarations, render documentation.
//!
//! The [`Hdrdoc`] type ties the scanner, the version probe and the renderer together. It is
//! UI-agnostic; the CLI is one frontend over it.

/// Error types for the core API.
pub mod error;
/// Header resolution and reading.
pub mod loader;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use self::error::{HdrdocError, Result};
use self::loader::{load_header, resolve_header};
use crate::model::{Document, Query, SchemaModel, Sections};
use crate::render::{RenderFormat, Renderer};
use crate::scan;
use crate::version::{DEFAULT_VERSION_TOKEN, find_version};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "C API";

/// Documentation generator for a single C header.
#[derive(Debug, Clone)]
pub struct Hdrdoc {
	/// Directories searched when the header path does not exist as given.
	include_dirs: Vec<PathBuf>,

	/// Token whose quoted value is reported as the header version.
	version_token: String,

	/// Page title.
	title: String,

	/// Output format.
	render_format: RenderFormat,

	/// Filter applied before rendering.
	query: Option<Query>,
}

impl Default for Hdrdoc {
	fn default() -> Self {
		Self::new()
	}
}

impl Hdrdoc {
	/// Create a generator with default configuration: HTML output, `OJ_VERSION` token, no
	/// include directories and no filter.
	pub fn new() -> Self {
		Self {
			include_dirs: Vec::new(),
			version_token: DEFAULT_VERSION_TOKEN.to_string(),
			title: DEFAULT_TITLE.to_string(),
			render_format: RenderFormat::Html,
			query: None,
		}
	}

	/// Set the include directories searched for the header.
	pub fn with_include_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
		self.include_dirs = dirs;
		self
	}

	/// Set the token used to locate the version string.
	pub fn with_version_token(mut self, token: impl Into<String>) -> Self {
		self.version_token = token.into();
		self
	}

	/// Set the page title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Select the output format.
	pub fn with_render_format(mut self, format: RenderFormat) -> Self {
		self.render_format = format;
		self
	}

	/// Restrict rendered declarations to those accepted by `query`.
	pub fn with_query(mut self, query: Query) -> Self {
		self.query = Some(query);
		self
	}

	/// Only render the given declaration collections; an empty set renders all of them.
	pub fn with_sections(mut self, sections: Sections) -> Self {
		let query = self.query.take().unwrap_or_default();
		self.query = Some(query.with_sections(sections));
		self
	}

	/// Extract every declaration from header text.
	///
	/// Fails only on structural errors (unbalanced braces); ambiguous `extern` spans are
	/// skipped.
	pub fn extract(&self, text: &str) -> Result<SchemaModel> {
		scan::extract(text)
	}

	/// Extract declarations and the version string from header text.
	pub fn document(&self, text: &str) -> Result<Document> {
		let schema = self.extract(text)?;
		let version = find_version(text, &self.version_token);
		if version.is_none() {
			debug!(token = %self.version_token, "no version string found");
		}
		Ok(Document {
			title: self.title.clone(),
			version,
			schema,
		})
	}

	/// Resolve, read and extract a header file.
	pub fn load(&self, header: &Path) -> Result<Document> {
		let path = resolve_header(header, &self.include_dirs)?;
		info!(header = %path.display(), "reading header");
		let text = load_header(&path)?;
		self.document(&text)
	}

	/// Render a document with the configured format and filter.
	pub fn render(&self, doc: &Document) -> Result<String> {
		let mut renderer = Renderer::new().with_format(self.render_format);
		if let Some(query) = &self.query {
			renderer = renderer.with_query(query.clone());
		}
		renderer.render(doc)
	}

	/// Load `header`, render it and write the artifact to `output`.
	///
	/// Returns the extracted document so callers can report on it.
	pub fn generate(&self, header: &Path, output: &Path) -> Result<Document> {
		let doc = self.load(header)?;
		let rendered = self.render(&doc)?;
		fs::write(output, rendered).map_err(|e| HdrdocError::io(output, e))?;
		info!(output = %output.display(), declarations = doc.schema.len(), "wrote documentation");
		Ok(doc)
	}
}
