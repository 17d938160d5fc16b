use oro_primitives::{Color, ResolvedStyle, resolve};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::definition::ThemeDefinition;
use crate::error::{Result, ThemeError};
use crate::role::{ColorRole, StyleRole};

/// A theme with every role resolved.
///
/// Values are stored in role declaration order, so lookups are infallible
/// once a theme has been built.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
	pub name: String,
	pub filename: String,
	styles: Vec<ResolvedStyle>,
	colors: Vec<Color>,
}

impl ResolvedTheme {
	pub fn style(&self, role: StyleRole) -> &ResolvedStyle {
		&self.styles[role as usize]
	}

	pub fn color(&self, role: ColorRole) -> Color {
		self.colors[role as usize]
	}
}

/// Resolves every role of `def`.
///
/// Fails with [`ThemeError::MissingRole`] on the first role, in declaration
/// order, that the definition does not provide.
pub fn build(def: &ThemeDefinition) -> Result<ResolvedTheme> {
	let missing = |role: &'static str| ThemeError::MissingRole {
		theme: def.name.clone(),
		role,
	};

	let styles = StyleRole::iter()
		.map(|role| def.style(role).map(resolve).ok_or_else(|| missing(role.name())))
		.collect::<Result<Vec<_>>>()?;

	let colors = ColorRole::iter()
		.map(|role| def.color(role).ok_or_else(|| missing(role.name())))
		.collect::<Result<Vec<_>>>()?;

	debug!(theme = %def.name, styles = styles.len(), colors = colors.len(), "resolved theme");

	Ok(ResolvedTheme {
		name: def.name.clone(),
		filename: def.filename.clone(),
		styles,
		colors,
	})
}

#[cfg(test)]
mod tests {
	use oro_primitives::{FontStyle, Style};
	use pretty_assertions::assert_eq;

	use super::*;

	fn complete() -> ThemeDefinition {
		let mut def = ThemeDefinition::new("Complete", "complete.json");
		for (i, role) in StyleRole::iter().enumerate() {
			def.set_style(role, Color::rgb(i as u8, 0, 0));
		}
		for (i, role) in ColorRole::iter().enumerate() {
			def.set_color(role, Color::rgb(0, i as u8, 0));
		}
		def
	}

	#[test]
	fn resolves_every_role_by_index() {
		let mut def = complete();
		def.set_style(
			StyleRole::Keyword,
			Style::Decorated {
				foreground: Color::rgb(0xE0, 0xCD, 0x78),
				font: FontStyle::ITALIC,
			},
		);
		let theme = build(&def).unwrap();

		assert_eq!(theme.style(StyleRole::Keyword).scope.font_style, "italic");
		assert_eq!(theme.style(StyleRole::Escape).color, Color::rgb(StyleRole::Escape as u8, 0, 0));
		assert_eq!(theme.color(ColorRole::BadgeForeground), Color::rgb(0, ColorRole::BadgeForeground as u8, 0));
		assert_eq!(theme.name, "Complete");
		assert_eq!(theme.filename, "complete.json");
	}

	#[test]
	fn missing_style_role_is_reported() {
		let mut def = complete();
		def.remove_style(StyleRole::Macro);
		match build(&def) {
			Err(ThemeError::MissingRole { theme, role }) => {
				assert_eq!(theme, "Complete");
				assert_eq!(role, "macro");
			}
			other => panic!("expected missing role, got {other:?}"),
		}
	}

	#[test]
	fn missing_color_role_is_reported() {
		let mut def = complete();
		def.remove_color(ColorRole::LinkHover);
		let err = build(&def).unwrap_err();
		assert_eq!(err.to_string(), "theme 'Complete' is missing required role 'linkHover'");
	}

	#[test]
	fn declaration_order_does_not_matter() {
		let forward = complete();
		let mut reversed = ThemeDefinition::new("Complete", "complete.json");
		let styles: Vec<_> = forward.styles().map(|(r, s)| (r, *s)).collect();
		for (role, style) in styles.into_iter().rev() {
			reversed.set_style(role, style);
		}
		let colors: Vec<_> = forward.colors().collect();
		for (role, color) in colors.into_iter().rev() {
			reversed.set_color(role, color);
		}
		assert_eq!(build(&forward).unwrap(), build(&reversed).unwrap());
	}
}
