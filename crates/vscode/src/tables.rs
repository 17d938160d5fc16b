//! Static mapping tables from theme roles to VS Code theme keys.
//!
//! Table order is output order.

use oro_primitives::Color;
use oro_theme::{ColorRole, ColorRole as C, StyleRole};

use self::Derive::{Alpha, Darken, Fade, Lighten, Pass};
use crate::document::Scope;

/// Semantic token categories and the style role that colors them.
///
/// Besides the standard categories this covers the extra ones reported by
/// rust-analyzer (`builtinType`, `derive`, `lifetime`, `escapeSequence`,
/// `boolean`, `punctuation`, `formatSpecifier`) and Pylance (`selfParameter`,
/// `clsParameter`, `builtinConstant`).
pub const SEMANTIC_TOKENS: &[(&str, StyleRole)] = &[
	// Types
	("class", StyleRole::UserType),
	("struct", StyleRole::UserType),
	("type", StyleRole::UserType),
	("class.defaultLibrary", StyleRole::StandardType),
	("struct.defaultLibrary", StyleRole::StandardType),
	("type.defaultLibrary", StyleRole::StandardType),
	("typeParameter", StyleRole::InterfaceType),
	("interface", StyleRole::InterfaceType),
	("enum", StyleRole::Enumeration),
	("enumMember", StyleRole::Constant),
	("builtinType", StyleRole::BuiltinType),
	("derive", StyleRole::InterfaceType),
	// Keywords
	("keyword", StyleRole::Keyword),
	("operator", StyleRole::Operator),
	("selfParameter", StyleRole::Keyword),
	("clsParameter", StyleRole::Keyword),
	("lifetime", StyleRole::Keyword),
	// Function-like
	("function", StyleRole::Function),
	("method", StyleRole::Function),
	("label", StyleRole::Function),
	("decorator", StyleRole::Function),
	("function.static", StyleRole::StaticFunction),
	("method.static", StyleRole::StaticFunction),
	("macro", StyleRole::Macro),
	// Variables and constants
	("parameter", StyleRole::Variable),
	("property", StyleRole::Variable),
	("variable", StyleRole::Variable),
	("event", StyleRole::Variable),
	("string", StyleRole::String),
	("regexp", StyleRole::String),
	("number", StyleRole::Number),
	("escapeSequence", StyleRole::Escape),
	("boolean", StyleRole::BuiltinConstant),
	("builtinConstant", StyleRole::BuiltinConstant),
	// Miscellaneous
	("namespace", StyleRole::Namespace),
	("comment", StyleRole::Comment),
	("punctuation", StyleRole::Punctuation),
	("formatSpecifier", StyleRole::Punctuation),
];

/// Semantic modifiers that decorate a token without recoloring it.
///
/// `mutable` and `consuming` come from rust-analyzer, the `usedAsMutable*`
/// pair from clangd.
pub const SEMANTIC_MODIFIERS: &[(&str, &str)] = &[
	("*.deprecated", "strikethrough"),
	("*.modification", "underline"),
	("*.mutable", "underline"),
	("*.consuming", "bold"),
	("*.usedAsMutableReference", "underline"),
	("*.usedAsMutablePointer", "underline"),
];

/// Where a scope rule takes its settings from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeSource {
	/// The role's scope form: foreground plus font style.
	Style(StyleRole),
	/// A plain foreground with no decorations.
	Color(ColorRole),
	/// A font style alone, leaving the color to other rules.
	FontStyle(&'static str),
}

/// TextMate scope rules in output order.
///
/// Order does not set precedence: the editor prefers the rule whose selector
/// matches a token's scope most specifically.
pub const SCOPE_RULES: &[(Scope, ScopeSource)] = &[
	(Scope::One("invalid.illegal"), ScopeSource::Color(ColorRole::Error)),
	// Types
	(
		Scope::Many(&["entity.name.type", "entity.name.type.class", "entity.name.type.struct"]),
		ScopeSource::Style(StyleRole::UserType),
	),
	(Scope::Many(&["support.class", "support.type"]), ScopeSource::Style(StyleRole::StandardType)),
	(
		Scope::Many(&[
			"storage.type.builtin",
			"storage.type.built-in",
			"storage.type.primitive",
			"support.type.builtin",
			"support.type.built-in",
			"support.type.primitive",
			"keyword.type",
		]),
		ScopeSource::Style(StyleRole::BuiltinType),
	),
	(
		Scope::Many(&["entity.name.type.interface", "entity.name.type.parameter"]),
		ScopeSource::Style(StyleRole::InterfaceType),
	),
	(Scope::One("entity.name.type.enum"), ScopeSource::Style(StyleRole::Enumeration)),
	(Scope::One("variable.other.enummember"), ScopeSource::Style(StyleRole::Constant)),
	(Scope::One("entity.name.type.namespace"), ScopeSource::Style(StyleRole::Namespace)),
	// Keywords
	(Scope::Many(&["keyword", "storage", "variable.language"]), ScopeSource::Style(StyleRole::Keyword)),
	(Scope::One("keyword.operator"), ScopeSource::Style(StyleRole::Operator)),
	// Functions
	(Scope::One("entity.name.function.preprocessor"), ScopeSource::Style(StyleRole::Macro)),
	(Scope::One("entity.name.function"), ScopeSource::Style(StyleRole::Function)),
	// Variables and constants
	(
		Scope::Many(&["variable", "entity.name.variable", "entity.name.type.module"]),
		ScopeSource::Style(StyleRole::Variable),
	),
	(Scope::One("constant"), ScopeSource::Style(StyleRole::Constant)),
	(Scope::One("constant.language"), ScopeSource::Style(StyleRole::BuiltinConstant)),
	(Scope::Many(&["comment", "punctuation.definition.comment"]), ScopeSource::Style(StyleRole::Comment)),
	(Scope::One("string"), ScopeSource::Style(StyleRole::String)),
	(Scope::One("constant.character.escape"), ScopeSource::Style(StyleRole::Escape)),
	(Scope::One("constant.numeric"), ScopeSource::Style(StyleRole::Number)),
	(Scope::One("punctuation"), ScopeSource::Style(StyleRole::Punctuation)),
	// Miscellaneous
	(Scope::One("entity.name.tag"), ScopeSource::Style(StyleRole::Constant)),
	(Scope::One("support.type.property-name"), ScopeSource::Style(StyleRole::Function)),
	// Markup
	(Scope::Many(&["markup.heading", "entity.name.section"]), ScopeSource::Style(StyleRole::Keyword)),
	(Scope::One("markup.bold"), ScopeSource::FontStyle("bold")),
	(Scope::One("markup.italic"), ScopeSource::FontStyle("italic")),
	(Scope::One("markup.underline"), ScopeSource::FontStyle("underline")),
	(Scope::One("markup.strikethrough"), ScopeSource::FontStyle("strikethrough")),
	(
		Scope::Many(&["markup.raw", "markup.inline.raw", "fenced_code.block.language"]),
		ScopeSource::Style(StyleRole::Punctuation),
	),
	(Scope::One("markup.quote"), ScopeSource::Style(StyleRole::Punctuation)),
	(Scope::One("markup.list.bullet"), ScopeSource::Style(StyleRole::Punctuation)),
	(Scope::One("markup.inserted"), ScopeSource::Color(ColorRole::Added)),
	(Scope::One("markup.deleted"), ScopeSource::Color(ColorRole::Deleted)),
	(Scope::One("markup.changed"), ScopeSource::Color(ColorRole::Modified)),
];

/// How a UI color is derived from its role's color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Derive {
	Pass,
	/// Replaces the alpha channel.
	Alpha(u8),
	Fade(f32),
	Darken(f32),
	Lighten(f32),
}

impl Derive {
	pub fn apply(self, color: Color) -> Color {
		match self {
			Self::Pass => color,
			Self::Alpha(alpha) => color.with_alpha(alpha),
			Self::Fade(amount) => color.fade(amount),
			Self::Darken(amount) => color.darken(amount),
			Self::Lighten(amount) => color.lighten(amount),
		}
	}
}

/// Workbench color keys.
pub const COLOR_RULES: &[(&str, ColorRole, Derive)] = &[
	// Editor
	("editor.background", C::Background, Pass),
	("editor.foreground", C::Foreground, Pass),
	("editorCursor.foreground", C::Foreground, Pass),
	("editor.selectionBackground", C::Accent, Fade(0.80)),
	("editor.inactiveSelectionBackground", C::Accent, Fade(0.90)),
	("editor.selectionHighlightBackground", C::Accent, Fade(0.85)),
	("editor.findMatchBackground", C::MatchFocus, Fade(0.70)),
	("editor.findMatchBorder", C::MatchFocus, Fade(0.60)),
	("editor.findMatchHighlightBackground", C::Match, Fade(0.80)),
	("editor.findMatchHighlightBorder", C::Match, Fade(0.75)),
	("editorBracketMatch.background", C::Accent, Fade(0.80)),
	("editorBracketMatch.border", C::Accent, Fade(0.60)),
	("editorLink.activeForeground", C::LinkHover, Pass),
	("editorLineNumber.foreground", C::Guide, Pass),
	("editorLineNumber.activeForeground", C::GuideFocus, Pass),
	("editorIndentGuide.background1", C::Guide, Fade(0.5)),
	("editorIndentGuide.activeBackground1", C::GuideFocus, Fade(0.5)),
	("editorGutter.background", C::Background, Pass),
	("editorGutter.addedBackground", C::Added, Pass),
	("editorGutter.deletedBackground", C::Deleted, Pass),
	("editorGutter.modifiedBackground", C::Modified, Pass),
	("editorGroupHeader.tabsBackground", C::BackgroundSecondary, Pass),
	// Diagnostics
	("editorError.background", C::Error, Alpha(0x7F)),
	("editorError.border", C::Error, Pass),
	("editorError.foreground", C::Error, Pass),
	("editorWarning.background", C::Warning, Alpha(0x7F)),
	("editorWarning.border", C::Warning, Pass),
	("editorWarning.foreground", C::Warning, Pass),
	("editorInfo.border", C::Info, Pass),
	("editorInfo.foreground", C::Info, Pass),
	("editorOverviewRuler.errorForeground", C::Error, Pass),
	("editorOverviewRuler.warningForeground", C::Warning, Pass),
	("editorOverviewRuler.infoForeground", C::Info, Pass),
	("editorOverviewRuler.findMatchForeground", C::Match, Pass),
	("minimap.findMatchHighlight", C::MatchFocus, Pass),
	("list.errorForeground", C::Error, Pass),
	("list.warningForeground", C::Warning, Pass),
	("notificationsErrorIcon.foreground", C::Error, Pass),
	("notificationsWarningIcon.foreground", C::Warning, Pass),
	("notificationsInfoIcon.foreground", C::Info, Pass),
	// Source control
	("gitDecoration.addedResourceForeground", C::Added, Pass),
	("gitDecoration.deletedResourceForeground", C::Deleted, Pass),
	("gitDecoration.ignoredResourceForeground", C::Ignored, Pass),
	("gitDecoration.modifiedResourceForeground", C::Modified, Pass),
	("gitDecoration.untrackedResourceForeground", C::Untracked, Pass),
	("diffEditor.insertedTextBackground", C::Added, Fade(0.85)),
	("diffEditor.removedTextBackground", C::Deleted, Fade(0.85)),
	// Testing and debugging
	("testing.iconPassed", C::Running, Pass),
	("testing.iconFailed", C::Error, Pass),
	("debugIcon.startForeground", C::Running, Pass),
	// Activity bar
	("activityBar.activeBackground", C::BackgroundSecondary, Pass),
	("activityBar.activeBorder", C::Accent, Pass),
	("activityBar.activeFocusBorder", C::Accent, Pass),
	("activityBar.background", C::Background, Pass),
	("activityBar.dropBorder", C::Accent, Pass),
	("activityBar.inactiveForeground", C::ForegroundInactive, Pass),
	("activityBarBadge.background", C::Badge, Pass),
	("activityBarBadge.foreground", C::BadgeForeground, Pass),
	("badge.background", C::Badge, Pass),
	("badge.foreground", C::BadgeForeground, Pass),
	// Controls
	("button.background", C::Button, Pass),
	("button.foreground", C::Foreground, Pass),
	("button.hoverBackground", C::ButtonHover, Pass),
	("checkbox.background", C::Checkbox, Pass),
	("dropdown.background", C::Input, Pass),
	("dropdown.border", C::InputBorder, Pass),
	("input.background", C::Input, Pass),
	("input.border", C::InputBorder, Pass),
	("focusBorder", C::Accent, Pass),
	("progressBar.background", C::Accent, Pass),
	("scrollbarSlider.background", C::ScrollBar, Pass),
	("scrollbarSlider.hoverBackground", C::ScrollBar, Lighten(0.2)),
	("scrollbarSlider.activeBackground", C::ScrollBarActive, Pass),
	// Widgets
	("editorWidget.background", C::Widget, Pass),
	("editorWidget.border", C::WidgetBorder, Pass),
	("editorSuggestWidget.background", C::Widget, Pass),
	("editorSuggestWidget.border", C::WidgetBorder, Pass),
	("editorHoverWidget.background", C::Widget, Pass),
	("editorHoverWidget.border", C::WidgetBorder, Pass),
	("notifications.background", C::Widget, Pass),
	("notifications.border", C::WidgetBorder, Pass),
	("menu.background", C::Widget, Pass),
	("menu.border", C::WidgetBorder, Pass),
	("menu.selectionBackground", C::Button, Pass),
	("quickInput.background", C::Widget, Pass),
	// Peek view
	("peekView.border", C::Accent, Pass),
	("peekViewEditor.background", C::BackgroundPeek, Pass),
	("peekViewEditor.matchHighlightBackground", C::Accent, Alpha(0x62)),
	("peekViewEditorGutter.background", C::BackgroundPeek, Pass),
	("peekViewResult.background", C::BackgroundPeek, Pass),
	("peekViewResult.matchHighlightBackground", C::Accent, Alpha(0x62)),
	("peekViewTitle.background", C::BackgroundPeek, Pass),
	// Lists
	("list.activeSelectionBackground", C::Accent, Fade(0.75)),
	("list.inactiveSelectionBackground", C::Accent, Fade(0.85)),
	("list.hoverBackground", C::Foreground, Fade(0.95)),
	("list.highlightForeground", C::Accent, Pass),
	("list.focusOutline", C::Accent, Pass),
	// Workbench
	("sideBar.background", C::BackgroundSecondary, Pass),
	("sideBarSectionHeader.background", C::BackgroundSecondary, Pass),
	("panel.background", C::Background, Pass),
	("panel.border", C::WidgetBorder, Pass),
	("statusBar.background", C::StatusBar, Pass),
	("statusBar.foreground", C::StatusBarForeground, Pass),
	("statusBar.debuggingBackground", C::StatusBarDebugging, Pass),
	("statusBar.debuggingForeground", C::StatusBarForeground, Pass),
	("statusBar.noFolderBackground", C::StatusBarNoFolder, Pass),
	("statusBarItem.hoverBackground", C::StatusBar, Lighten(0.2)),
	("statusBarItem.activeBackground", C::StatusBar, Darken(0.2)),
	("tab.activeBackground", C::Background, Pass),
	("tab.inactiveBackground", C::BackgroundSecondary, Pass),
	("tab.activeBorderTop", C::Accent, Pass),
	("tab.inactiveForeground", C::ForegroundInactive, Pass),
	("textLink.foreground", C::Link, Pass),
	("textLink.activeForeground", C::LinkHover, Pass),
	("textPreformat.foreground", C::Preformat, Pass),
	("textSeparator.foreground", C::Background, Pass),
	("titleBar.activeBackground", C::BackgroundSecondary, Pass),
	("titleBar.inactiveBackground", C::BackgroundSecondary, Pass),
	("titleBar.activeForeground", C::Foreground, Pass),
	("titleBar.inactiveForeground", C::ForegroundInactive, Pass),
];
