//! Raw theme asset schema, as deserialized from TOML.
//!
//! Values stay as strings here; [`link`](crate::link) turns them into typed
//! roles and colors.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, ThemeError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSpec {
	pub name: String,
	pub filename: String,
	/// Requests an italics variant with its own metadata.
	#[serde(default)]
	pub italics: Option<VariantSpec>,
	pub styles: IndexMap<String, RawStyle>,
	pub colors: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantSpec {
	pub name: String,
	pub filename: String,
}

/// A style value: either a bare color string or a decorated table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStyle {
	Plain(String),
	Decorated(RawDecoration),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDecoration {
	pub foreground: String,
	#[serde(default)]
	pub bold: bool,
	#[serde(default)]
	pub italic: bool,
	#[serde(default)]
	pub strikethrough: bool,
	#[serde(default)]
	pub underline: bool,
}

impl RawStyle {
	pub fn foreground(&self) -> &str {
		match self {
			Self::Plain(color) => color,
			Self::Decorated(decoration) => &decoration.foreground,
		}
	}
}

/// Parses a theme asset.
pub fn parse_spec(asset: &str, source: &str) -> Result<ThemeSpec> {
	toml::from_str(source).map_err(|source| ThemeError::Parse {
		asset: asset.to_string(),
		source,
	})
}
