use indexmap::IndexMap;
use oro_theme::ResolvedTheme;
use tracing::debug;

use crate::document::{SCHEMA, SemanticTokenColor, ThemeDocument, TokenColor, TokenSettings};
use crate::tables::{COLOR_RULES, SCOPE_RULES, SEMANTIC_MODIFIERS, SEMANTIC_TOKENS, ScopeSource};

/// Maps a resolved theme onto a VS Code theme document.
pub fn map(theme: &ResolvedTheme) -> ThemeDocument {
	let semantic_token_colors: IndexMap<_, _> = SEMANTIC_TOKENS
		.iter()
		.map(|&(key, role)| (key, SemanticTokenColor::Style(theme.style(role).semantic.clone())))
		.chain(
			SEMANTIC_MODIFIERS
				.iter()
				.map(|&(key, font_style)| (key, SemanticTokenColor::Modifier { font_style })),
		)
		.collect();

	let token_colors: Vec<_> = SCOPE_RULES
		.iter()
		.map(|&(scope, source)| TokenColor {
			scope,
			settings: settings(theme, source),
		})
		.collect();

	let colors: IndexMap<_, _> = COLOR_RULES
		.iter()
		.map(|&(key, role, derive)| (key, derive.apply(theme.color(role))))
		.collect();

	debug!(
		theme = %theme.name,
		semantic = semantic_token_colors.len(),
		scopes = token_colors.len(),
		colors = colors.len(),
		"mapped theme document"
	);

	ThemeDocument {
		schema: SCHEMA,
		name: theme.name.clone(),
		semantic_highlighting: true,
		semantic_token_colors,
		token_colors,
		colors,
	}
}

fn settings(theme: &ResolvedTheme, source: ScopeSource) -> TokenSettings {
	match source {
		ScopeSource::Style(role) => {
			let scope = &theme.style(role).scope;
			TokenSettings {
				foreground: Some(scope.foreground),
				font_style: Some(scope.font_style.clone()),
			}
		}
		ScopeSource::Color(role) => TokenSettings {
			foreground: Some(theme.color(role)),
			font_style: Some(String::new()),
		},
		ScopeSource::FontStyle(font_style) => TokenSettings {
			foreground: None,
			font_style: Some(font_style.to_string()),
		},
	}
}

#[cfg(test)]
mod tests;
