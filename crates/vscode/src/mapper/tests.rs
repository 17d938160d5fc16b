use oro_primitives::Color;
use oro_theme::{ResolvedTheme, StyleRole, build, builtin_themes};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::document::Scope;

fn original() -> ResolvedTheme {
	let themes = builtin_themes().unwrap();
	build(&themes[0]).unwrap()
}

fn italics() -> ResolvedTheme {
	let themes = builtin_themes().unwrap();
	build(&themes[1]).unwrap()
}

#[test]
fn top_level_keys_in_order() {
	let json = serde_json::to_string(&map(&original())).unwrap();
	let positions: Vec<_> = [
		"\"$schema\"",
		"\"name\"",
		"\"semanticHighlighting\"",
		"\"semanticTokenColors\"",
		"\"tokenColors\"",
		"\"colors\"",
	]
	.iter()
	.map(|key| json.find(key).unwrap())
	.collect();
	let mut sorted = positions.clone();
	sorted.sort_unstable();
	assert_eq!(positions, sorted);
	assert!(json.starts_with(r#"{"$schema":"vscode://schemas/color-theme","name":"Oro Theme: Original","semanticHighlighting":true"#));
}

#[test]
fn semantic_tokens_follow_table_order() {
	let doc = map(&original());
	let keys: Vec<_> = doc.semantic_token_colors.keys().copied().collect();
	let expected: Vec<_> = SEMANTIC_TOKENS
		.iter()
		.map(|(key, _)| *key)
		.chain(SEMANTIC_MODIFIERS.iter().map(|(key, _)| *key))
		.collect();
	assert_eq!(keys, expected);
}

#[test]
fn plain_semantic_token_is_bare_color() {
	let doc = map(&original());
	let value = serde_json::to_value(&doc.semantic_token_colors["keyword"]).unwrap();
	assert_eq!(value, json!("#E0CD78"));
	let value = serde_json::to_value(&doc.semantic_token_colors["*.consuming"]).unwrap();
	assert_eq!(value, json!({ "fontStyle": "bold" }));
}

#[test]
fn italic_semantic_token_is_styled() {
	let doc = map(&italics());
	let value = serde_json::to_value(&doc.semantic_token_colors["keyword"]).unwrap();
	assert_eq!(value, json!({ "foreground": "#E0CD78", "fontStyle": "italic" }));
	let value = serde_json::to_value(&doc.semantic_token_colors["lifetime"]).unwrap();
	assert_eq!(value, json!({ "foreground": "#E0CD78", "fontStyle": "italic" }));
}

#[test]
fn scope_rule_settings() {
	let doc = map(&original());
	let value = serde_json::to_value(&doc.token_colors[0]).unwrap();
	assert_eq!(
		value,
		json!({ "scope": "invalid.illegal", "settings": { "foreground": "#E04444", "fontStyle": "" } })
	);

	let bold = doc
		.token_colors
		.iter()
		.find(|rule| rule.scope == Scope::One("markup.bold"))
		.unwrap();
	assert_eq!(serde_json::to_value(&bold.settings).unwrap(), json!({ "fontStyle": "bold" }));

	let keywords = doc
		.token_colors
		.iter()
		.find(|rule| rule.scope.selectors().contains(&"storage"))
		.unwrap();
	assert_eq!(
		serde_json::to_value(keywords).unwrap(),
		json!({
			"scope": ["keyword", "storage", "variable.language"],
			"settings": { "foreground": "#E0CD78", "fontStyle": "" }
		})
	);
}

#[test]
fn scope_and_semantic_foregrounds_agree() {
	let theme = italics();
	let doc = map(&theme);
	for (&(key, role), rendered) in SEMANTIC_TOKENS.iter().zip(doc.semantic_token_colors.values()) {
		assert_eq!(rendered.foreground(), Some(theme.style(role).scope.foreground), "{key}");
	}
	for (&(_, source), rule) in SCOPE_RULES.iter().zip(&doc.token_colors) {
		if let ScopeSource::Style(role) = source {
			assert_eq!(rule.settings.foreground, Some(theme.style(role).color));
			assert_eq!(rule.settings.font_style.as_deref(), Some(theme.style(role).scope.font_style.as_str()));
		}
	}
}

#[test]
fn derived_workbench_colors() {
	let doc = map(&original());
	let color = |key: &str| doc.colors[key];
	assert_eq!(color("editor.background"), Color::rgb(0x16, 0x16, 0x16));
	assert_eq!(color("editorError.background"), Color::rgba(0xE0, 0x44, 0x44, 0x7F));
	assert_eq!(color("peekViewEditor.matchHighlightBackground"), Color::rgba(0x70, 0xC2, 0xE7, 0x62));
	assert_eq!(color("editor.selectionBackground"), Color::rgba(0x70, 0xC2, 0xE7, 0x33));
	assert_eq!(color("editor.findMatchBorder"), Color::rgba(0x44, 0x82, 0xFF, 0x66));
	assert_eq!(color("scrollbarSlider.background"), Color::rgba(0x5F, 0x5F, 0x5F, 0x60));
	assert_eq!(doc.colors.len(), COLOR_RULES.len());

	let json = serde_json::to_value(&doc.colors).unwrap();
	assert_eq!(json["editorError.background"], json!("#E044447F"));
	assert_eq!(json["textPreformat.foreground"], json!("#FFFFFF"));
}

#[test]
fn style_role_lookup_matches_table() {
	let theme = original();
	let doc = map(&theme);
	let macro_color = theme.style(StyleRole::Macro).color;
	assert_eq!(doc.semantic_token_colors["macro"].foreground(), Some(macro_color));
}
