//! Core types for theme authoring: colors, font styles, and style resolution.

/// sRGB colors with alpha, hex parsing, and lightness/alpha composition.
pub mod color;
/// Token styles and their resolution into editor-facing renderings.
pub mod style;

pub use color::{Color, ColorError};
pub use style::{FontStyle, ResolvedStyle, ScopeForm, SemanticForm, Style, resolve};
