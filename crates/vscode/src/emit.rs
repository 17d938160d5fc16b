use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::document::ThemeDocument;
use crate::error::{EmitError, Result};

/// Writes `doc` as pretty JSON to `out_dir/filename`, creating `out_dir` if
/// needed, and returns the written path.
///
/// The document is written to a temporary sibling first and renamed into
/// place, so an existing theme file is either fully replaced or untouched.
pub fn emit(out_dir: &Path, doc: &ThemeDocument, filename: &str) -> Result<PathBuf> {
	let io_err = |path: &Path| {
		let path = path.to_path_buf();
		move |source| EmitError::Io { path, source }
	};

	fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;

	let mut payload = serde_json::to_string_pretty(doc)?;
	payload.push('\n');

	let path = out_dir.join(filename);
	let tmp = out_dir.join(format!(".{filename}.tmp"));
	if let Err(err) = fs::write(&tmp, &payload) {
		let _ = fs::remove_file(&tmp);
		return Err(io_err(&tmp)(err));
	}
	if let Err(err) = fs::rename(&tmp, &path) {
		let _ = fs::remove_file(&tmp);
		return Err(io_err(&path)(err));
	}

	info!(theme = %doc.name, path = %path.display(), bytes = payload.len(), "wrote theme");
	Ok(path)
}
