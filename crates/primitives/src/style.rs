use bitflags::bitflags;
use serde::Serialize;

use crate::Color;

bitflags! {
	/// Font decorations a token style can request.
	///
	/// Rendering always walks the flags in declaration order, so the same set
	/// of flags produces the same `fontStyle` string everywhere it is emitted.
	#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Hash)]
	pub struct FontStyle: u8 {
		/// Bold text.
		const BOLD          = 0b0001;
		/// Italic text.
		const ITALIC        = 0b0010;
		/// Struck-through text.
		const STRIKETHROUGH = 0b0100;
		/// Underlined text.
		const UNDERLINE     = 0b1000;
	}
}

impl FontStyle {
	const NAMES: [(FontStyle, &'static str); 4] = [
		(FontStyle::BOLD, "bold"),
		(FontStyle::ITALIC, "italic"),
		(FontStyle::STRIKETHROUGH, "strikethrough"),
		(FontStyle::UNDERLINE, "underline"),
	];

	/// Builds flags from the four decoration booleans of a theme definition.
	pub fn from_flags(bold: bool, italic: bool, strikethrough: bool, underline: bool) -> Self {
		let mut font = Self::empty();
		font.set(Self::BOLD, bold);
		font.set(Self::ITALIC, italic);
		font.set(Self::STRIKETHROUGH, strikethrough);
		font.set(Self::UNDERLINE, underline);
		font
	}

	/// Renders the space-separated `fontStyle` string (`""` when empty).
	pub fn render(self) -> String {
		Self::NAMES
			.iter()
			.filter(|(flag, _)| self.contains(*flag))
			.map(|(_, name)| *name)
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// How a token is styled in a theme definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
	/// Foreground color only, no decorations.
	Plain(Color),
	/// Foreground color plus font decorations.
	Decorated { foreground: Color, font: FontStyle },
}

impl Style {
	/// The foreground color, regardless of decorations.
	pub const fn foreground(&self) -> Color {
		match *self {
			Self::Plain(color) => color,
			Self::Decorated { foreground, .. } => foreground,
		}
	}

	/// The requested decorations (`empty` for [`Style::Plain`]).
	pub const fn font(&self) -> FontStyle {
		match *self {
			Self::Plain(_) => FontStyle::empty(),
			Self::Decorated { font, .. } => font,
		}
	}

	/// Returns a decorated copy with `extra` added to the existing decorations.
	pub fn with_font(&self, extra: FontStyle) -> Self {
		Self::Decorated {
			foreground: self.foreground(),
			font: self.font() | extra,
		}
	}
}

impl From<Color> for Style {
	fn from(color: Color) -> Self {
		Self::Plain(color)
	}
}

/// Semantic-token rendering of a style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SemanticForm {
	/// Bare color string.
	Color(Color),
	/// Color with an explicit font style.
	Styled {
		foreground: Color,
		#[serde(rename = "fontStyle")]
		font_style: String,
	},
}

impl SemanticForm {
	pub fn foreground(&self) -> Color {
		match self {
			Self::Color(color) => *color,
			Self::Styled { foreground, .. } => *foreground,
		}
	}
}

/// TextMate scope-rule rendering of a style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeForm {
	pub foreground: Color,
	#[serde(rename = "fontStyle")]
	pub font_style: String,
}

/// A style rendered once for both consumers of the theme document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
	pub semantic: SemanticForm,
	pub scope: ScopeForm,
	pub color: Color,
}

/// Resolves a style into its semantic-token and scope-rule renderings.
///
/// The decoration string is computed a single time and shared by both
/// renderings.
pub fn resolve(style: &Style) -> ResolvedStyle {
	match *style {
		Style::Plain(color) => ResolvedStyle {
			semantic: SemanticForm::Color(color),
			scope: ScopeForm {
				foreground: color,
				font_style: String::new(),
			},
			color,
		},
		Style::Decorated { foreground, font } => {
			let font_style = font.render();
			ResolvedStyle {
				semantic: SemanticForm::Styled {
					foreground,
					font_style: font_style.clone(),
				},
				scope: ScopeForm {
					foreground,
					font_style,
				},
				color: foreground,
			}
		}
	}
}
