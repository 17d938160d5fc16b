//! VS Code color theme output.
//!
//! [`map`] turns a [`ResolvedTheme`](oro_theme::ResolvedTheme) into a
//! [`ThemeDocument`] using the static tables in [`tables`], and [`emit`]
//! writes the document as pretty JSON.

pub mod document;
pub mod emit;
pub mod error;
pub mod mapper;
pub mod tables;

pub use document::{SCHEMA, Scope, SemanticTokenColor, ThemeDocument, TokenColor, TokenSettings};
pub use emit::emit;
pub use error::{EmitError, Result};
pub use mapper::map;
