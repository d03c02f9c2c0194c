use std::path::PathBuf;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the hdrdoc API.
#[derive(Debug, thiserror::Error)]
pub enum HdrdocError {
	/// An opening brace has no matching close, or a block is never terminated.
	#[error("unbalanced braces: declaration at line {line} (byte {offset}) is never closed")]
	Structural {
		/// Byte offset of the offending delimiter.
		offset: usize,
		/// 1-based line of the offending delimiter.
		line: usize,
	},
	/// The header could not be found directly or under any include directory.
	#[error("header `{}` not found (searched: {})", .path.display(), display_dirs(.searched))]
	HeaderNotFound {
		/// Path as requested.
		path: PathBuf,
		/// Include directories that were tried.
		searched: Vec<PathBuf>,
	},
	/// Failed to read or write a file.
	#[error("{}: {source}", .path.display())]
	Io {
		/// File being accessed.
		path: PathBuf,
		/// Underlying failure.
		#[source]
		source: std::io::Error,
	},
	/// Failed to encode the model as JSON.
	#[error("failed to serialize documentation: {0}")]
	Serialization(#[from] SerdeError),
	/// A search pattern did not compile.
	#[error("invalid search pattern: {0}")]
	InvalidQuery(#[from] regex::Error),
}

impl HdrdocError {
	/// Wrap an IO failure with the path it concerns.
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

fn display_dirs(dirs: &[PathBuf]) -> String {
	if dirs.is_empty() {
		return "no include directories".to_string();
	}
	dirs.iter()
		.map(|d| d.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

/// Result type returned by the hdrdoc library.
pub type Result<T> = std::result::Result<T, HdrdocError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn structural_message_names_the_line() {
		let err = HdrdocError::Structural { offset: 40, line: 3 };
		assert_eq!(
			err.to_string(),
			"unbalanced braces: declaration at line 3 (byte 40) is never closed"
		);
	}

	#[test]
	fn not_found_lists_include_dirs() {
		let err = HdrdocError::HeaderNotFound {
			path: PathBuf::from("oj.h"),
			searched: vec![PathBuf::from("inc"), PathBuf::from("src/oj")],
		};
		assert_eq!(err.to_string(), "header `oj.h` not found (searched: inc, src/oj)");
	}
}
