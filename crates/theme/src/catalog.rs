//! Themes shipped with the generator.

use std::collections::HashSet;

use tracing::debug;

use crate::definition::ThemeDefinition;
use crate::error::{Result, ThemeError};
use crate::link::link_theme;
use crate::spec::parse_spec;

/// Embedded theme assets, keyed by asset name.
pub const ASSETS: &[(&str, &str)] = &[("original", include_str!("../assets/original.toml"))];

/// Loads every shipped theme, variants included, in asset order.
///
/// Fails if two definitions share an output filename.
pub fn builtin_themes() -> Result<Vec<ThemeDefinition>> {
	let mut themes = Vec::new();
	for (asset, source) in ASSETS {
		let spec = parse_spec(asset, source)?;
		let defs = link_theme(&spec)?;
		debug!(asset, count = defs.len(), "loaded theme asset");
		themes.extend(defs);
	}

	let mut seen = HashSet::new();
	for def in &themes {
		if !seen.insert(def.filename.as_str()) {
			return Err(ThemeError::DuplicateFilename(def.filename.clone()));
		}
	}

	Ok(themes)
}
