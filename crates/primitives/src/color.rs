use core::fmt;
use core::str::FromStr;

use palette::{FromColor, Hsl, Srgb};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors produced while constructing a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
	/// The input is not a `#RRGGBB` or `#RRGGBBAA` literal.
	#[error("invalid color format: {0:?} (expected #RRGGBB or #RRGGBBAA)")]
	Format(String),
}

/// An sRGB color with an alpha channel.
///
/// Colors are plain values: every manipulation returns a new color. Hex
/// rendering uses uppercase digits, and the alpha pair is only emitted when
/// the color is not fully opaque.
///
/// ```rust
/// use oro_primitives::Color;
///
/// let accent: Color = "#70C2E7".parse().unwrap();
/// assert_eq!(accent.fade(0.8).to_string(), "#70C2E733");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	/// Fully opaque alpha value.
	pub const OPAQUE: u8 = u8::MAX;

	/// Creates an opaque color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: Self::OPAQUE }
	}

	/// Creates a color from its channels, including alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Returns true if the alpha channel is at full opacity.
	pub const fn is_opaque(self) -> bool {
		self.a == Self::OPAQUE
	}

	/// Returns this color with the alpha channel replaced.
	pub const fn with_alpha(self, a: u8) -> Self {
		Self { a, ..self }
	}

	/// Scales HSL lightness up by `amount` (`l + l * amount`).
	///
	/// `amount` is clamped to `[0, 1]` and the resulting lightness to the
	/// color-space boundary.
	pub fn lighten(self, amount: f32) -> Self {
		self.scale_lightness(1.0 + clamp_unit(amount))
	}

	/// Scales HSL lightness down by `amount` (`l - l * amount`).
	pub fn darken(self, amount: f32) -> Self {
		self.scale_lightness(1.0 - clamp_unit(amount))
	}

	/// Moves the alpha channel toward transparent by `amount` (`a - a * amount`).
	///
	/// `fade(0.0)` is the identity and `fade(1.0)` is fully transparent.
	pub fn fade(self, amount: f32) -> Self {
		let amount = clamp_unit(amount);
		if amount == 0.0 {
			return self;
		}
		let alpha = f32::from(self.a) * (1.0 - amount);
		self.with_alpha(alpha.round().clamp(0.0, 255.0) as u8)
	}

	/// Renders `#RRGGBB`, dropping the alpha channel.
	pub fn hex(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}

	/// Renders `#RRGGBBAA`.
	pub fn hex_with_alpha(self) -> String {
		format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
	}

	fn scale_lightness(self, factor: f32) -> Self {
		if factor == 1.0 {
			return self;
		}
		let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
		let mut hsl: Hsl = Hsl::from_color(rgb);
		hsl.lightness = (hsl.lightness * factor).clamp(0.0, 1.0);
		let rgb: Srgb<f32> = Srgb::from_color(hsl);
		let out: Srgb<u8> = rgb.into_format();
		Self::rgba(out.red, out.green, out.blue, self.a)
	}
}

fn clamp_unit(amount: f32) -> f32 {
	if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) }
}

impl FromStr for Color {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || ColorError::Format(s.to_string());
		let hex = s.strip_prefix('#').ok_or_else(err)?;
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(err());
		}

		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
		match hex.len() {
			6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
			8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
			_ => Err(err()),
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_opaque() {
			f.write_str(&self.hex())
		} else {
			f.write_str(&self.hex_with_alpha())
		}
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
