use indexmap::IndexMap;

use crate::role::{ColorRole, StyleRole};
use crate::{Color, FontStyle, Style};

/// Roles that gain the italic decoration in an italics variant.
pub const ITALIC_ROLES: [StyleRole; 3] = [StyleRole::Keyword, StyleRole::BuiltinType, StyleRole::BuiltinConstant];

/// A theme as authored: display metadata plus a value for each role.
///
/// Definitions own all of their data, so a clone is fully independent of the
/// definition it was taken from. Completeness is checked when the definition
/// is resolved by [`build`](crate::build), not on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDefinition {
	/// Display name written into the theme document.
	pub name: String,
	/// File name of the generated theme document.
	pub filename: String,
	styles: IndexMap<StyleRole, Style>,
	colors: IndexMap<ColorRole, Color>,
}

impl ThemeDefinition {
	pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			filename: filename.into(),
			styles: IndexMap::new(),
			colors: IndexMap::new(),
		}
	}

	pub fn with_style(mut self, role: StyleRole, style: impl Into<Style>) -> Self {
		self.set_style(role, style);
		self
	}

	pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
		self.set_color(role, color);
		self
	}

	/// Sets a style role, returning the previous value.
	pub fn set_style(&mut self, role: StyleRole, style: impl Into<Style>) -> Option<Style> {
		self.styles.insert(role, style.into())
	}

	/// Sets a color role, returning the previous value.
	pub fn set_color(&mut self, role: ColorRole, color: Color) -> Option<Color> {
		self.colors.insert(role, color)
	}

	pub fn remove_style(&mut self, role: StyleRole) -> Option<Style> {
		self.styles.shift_remove(&role)
	}

	pub fn remove_color(&mut self, role: ColorRole) -> Option<Color> {
		self.colors.shift_remove(&role)
	}

	pub fn style(&self, role: StyleRole) -> Option<&Style> {
		self.styles.get(&role)
	}

	pub fn color(&self, role: ColorRole) -> Option<Color> {
		self.colors.get(&role).copied()
	}

	/// Style roles in the order they were declared.
	pub fn styles(&self) -> impl Iterator<Item = (StyleRole, &Style)> {
		self.styles.iter().map(|(role, style)| (*role, style))
	}

	/// Color roles in the order they were declared.
	pub fn colors(&self) -> impl Iterator<Item = (ColorRole, Color)> {
		self.colors.iter().map(|(role, color)| (*role, *color))
	}

	/// Derives the italics variant of this theme.
	///
	/// Each role in [`ITALIC_ROLES`] keeps its foreground and existing
	/// decorations and gains italics. Every other role is copied unchanged.
	pub fn derive_italics(&self, name: impl Into<String>, filename: impl Into<String>) -> Self {
		let mut variant = self.clone();
		variant.name = name.into();
		variant.filename = filename.into();
		for role in ITALIC_ROLES {
			if let Some(style) = variant.styles.get_mut(&role) {
				*style = style.with_font(FontStyle::ITALIC);
			}
		}
		variant
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn base() -> ThemeDefinition {
		ThemeDefinition::new("Base", "base.json")
			.with_style(StyleRole::Keyword, Color::rgb(0xE0, 0xCD, 0x78))
			.with_style(StyleRole::BuiltinType, Color::rgb(0x70, 0xC2, 0xE7))
			.with_style(
				StyleRole::BuiltinConstant,
				Style::Decorated {
					foreground: Color::rgb(0x77, 0xD4, 0xD4),
					font: FontStyle::BOLD,
				},
			)
			.with_style(StyleRole::Operator, Color::rgb(0xE0, 0xCD, 0x78))
			.with_color(ColorRole::Error, Color::rgb(0xE0, 0x44, 0x44))
	}

	#[test]
	fn italics_variant_leaves_base_untouched() {
		let base = base();
		let mut variant = base.derive_italics("Base (Italics)", "baseItalics.json");
		variant.set_style(StyleRole::Keyword, Color::rgb(0, 0, 0));

		assert_eq!(base.style(StyleRole::Keyword), Some(&Style::Plain(Color::rgb(0xE0, 0xCD, 0x78))));
		assert_eq!(base.name, "Base");
		assert_eq!(base.filename, "base.json");
	}

	#[test]
	fn italics_variant_decorates_flagged_roles_only() {
		let base = base();
		let variant = base.derive_italics("Base (Italics)", "baseItalics.json");

		assert_eq!(
			variant.style(StyleRole::Keyword),
			Some(&Style::Decorated {
				foreground: Color::rgb(0xE0, 0xCD, 0x78),
				font: FontStyle::ITALIC,
			})
		);
		assert_eq!(
			variant.style(StyleRole::BuiltinConstant),
			Some(&Style::Decorated {
				foreground: Color::rgb(0x77, 0xD4, 0xD4),
				font: FontStyle::BOLD | FontStyle::ITALIC,
			})
		);
		assert_eq!(variant.style(StyleRole::Operator), base.style(StyleRole::Operator));
		assert_eq!(variant.color(ColorRole::Error), base.color(ColorRole::Error));
		assert_eq!(variant.name, "Base (Italics)");
		assert_eq!(variant.filename, "baseItalics.json");
	}

	#[test]
	fn italics_skips_absent_roles() {
		let mut base = base();
		base.remove_style(StyleRole::BuiltinType);
		let variant = base.derive_italics("v", "v.json");
		assert_eq!(variant.style(StyleRole::BuiltinType), None);
	}

	#[test]
	fn set_returns_previous_value() {
		let mut def = base();
		let previous = def.set_color(ColorRole::Error, Color::rgb(1, 2, 3));
		assert_eq!(previous, Some(Color::rgb(0xE0, 0x44, 0x44)));
		assert_eq!(def.color(ColorRole::Error), Some(Color::rgb(1, 2, 3)));
	}
}
