//! Header lookup and reading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{HdrdocError, Result};

/// Resolve `path` directly, then relative to each include directory in order.
pub fn resolve_header(path: &Path, include_dirs: &[PathBuf]) -> Result<PathBuf> {
	if path.is_file() {
		return Ok(path.to_path_buf());
	}

	if path.is_relative() {
		for dir in include_dirs {
			let candidate = dir.join(path);
			if candidate.is_file() {
				debug!(header = %candidate.display(), "resolved header through include directory");
				return Ok(candidate);
			}
		}
	}

	Err(HdrdocError::HeaderNotFound {
		path: path.to_path_buf(),
		searched: include_dirs.to_vec(),
	})
}

/// Read a resolved header as UTF-8 text.
pub fn load_header(path: &Path) -> Result<String> {
	fs::read_to_string(path).map_err(|e| HdrdocError::io(path, e))
}
