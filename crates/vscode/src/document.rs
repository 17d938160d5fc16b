//! Serializable VS Code color theme document.

use indexmap::IndexMap;
use oro_primitives::{Color, SemanticForm};
use serde::Serialize;

/// Value of the document's `$schema` key.
pub const SCHEMA: &str = "vscode://schemas/color-theme";

/// A complete color theme, serialized in field order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeDocument {
	#[serde(rename = "$schema")]
	pub schema: &'static str,
	pub name: String,
	#[serde(rename = "semanticHighlighting")]
	pub semantic_highlighting: bool,
	#[serde(rename = "semanticTokenColors")]
	pub semantic_token_colors: IndexMap<&'static str, SemanticTokenColor>,
	#[serde(rename = "tokenColors")]
	pub token_colors: Vec<TokenColor>,
	pub colors: IndexMap<&'static str, Color>,
}

/// A `semanticTokenColors` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SemanticTokenColor {
	/// Styling taken from a style role.
	Style(SemanticForm),
	/// A decoration applied on top of whatever colors the token.
	Modifier {
		#[serde(rename = "fontStyle")]
		font_style: &'static str,
	},
}

impl SemanticTokenColor {
	pub fn foreground(&self) -> Option<Color> {
		match self {
			Self::Style(form) => Some(form.foreground()),
			Self::Modifier { .. } => None,
		}
	}
}

/// A TextMate `tokenColors` rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenColor {
	pub scope: Scope,
	pub settings: TokenSettings,
}

/// One scope selector or a list of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scope {
	One(&'static str),
	Many(&'static [&'static str]),
}

impl Scope {
	pub fn selectors(&self) -> &[&'static str] {
		match self {
			Self::One(scope) => core::slice::from_ref(scope),
			Self::Many(scopes) => scopes,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TokenSettings {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub foreground: Option<Color>,
	#[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
	pub font_style: Option<String>,
}
