//! Error types for writing theme documents.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
	/// A filesystem operation on `path` failed.
	#[error("failed to write {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to serialize theme document: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Result type for emit operations.
pub type Result<T> = std::result::Result<T, EmitError>;
