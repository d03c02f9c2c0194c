//! Turn a [`Document`] into a documentation artifact.

/// Single-page HTML output.
pub mod html;
/// Markdown output.
pub mod markdown;
/// Escaping and id helpers shared by the output formats.
pub mod utils;

use tracing::debug;

use crate::core_api::Result;
use crate::model::{Document, Query};

/// Output format of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
	/// Standalone HTML page with in-page navigation.
	#[default]
	Html,
	/// Markdown with one heading per declaration.
	Markdown,
	/// Pretty-printed JSON of the whole document.
	Json,
}

/// Configurable renderer over extracted declarations.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	/// Target output format.
	pub format: RenderFormat,
	/// Optional filter applied before rendering.
	pub query: Option<Query>,
}

impl Renderer {
	/// Create a renderer with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Select the output format.
	pub fn with_format(mut self, format: RenderFormat) -> Self {
		self.format = format;
		self
	}

	/// Only render declarations accepted by `query`.
	pub fn with_query(mut self, query: Query) -> Self {
		self.query = Some(query);
		self
	}

	/// Render `doc` in the configured format.
	pub fn render(&self, doc: &Document) -> Result<String> {
		let filtered;
		let doc = match &self.query {
			Some(query) => {
				filtered = Document {
					schema: doc.schema.filter(query),
					..doc.clone()
				};
				&filtered
			}
			None => doc,
		};
		debug!(format = ?self.format, declarations = doc.schema.len(), "rendering");

		Ok(match self.format {
			RenderFormat::Html => html::render_html(doc),
			RenderFormat::Markdown => markdown::render_markdown(doc),
			RenderFormat::Json => {
				let mut json = serde_json::to_string_pretty(doc)?;
				json.push('\n');
				json
			}
		})
	}
}
