//! Error types for theme loading and resolution.

use oro_primitives::ColorError;
use thiserror::Error;

/// Errors that can occur when loading or building a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// A theme asset is not valid TOML or does not match the asset schema.
	#[error("failed to parse theme asset '{asset}': {source}")]
	Parse {
		/// Name of the asset being parsed.
		asset: String,
		/// The underlying TOML error.
		#[source]
		source: toml::de::Error,
	},

	/// A role value could not be parsed as a color.
	#[error("theme '{theme}' role '{role}': {source}")]
	Color {
		theme: String,
		role: String,
		#[source]
		source: ColorError,
	},

	/// An asset names a role outside the closed role set.
	#[error("theme '{theme}' has unknown {kind} role '{role}'")]
	UnknownRole {
		theme: String,
		/// `"style"` or `"color"`, the table the role appeared in.
		kind: &'static str,
		role: String,
	},

	/// A required role has no value in the definition.
	#[error("theme '{theme}' is missing required role '{role}'")]
	MissingRole { theme: String, role: &'static str },

	/// Two themes would be written to the same file.
	#[error("duplicate theme filename: '{0}'")]
	DuplicateFilename(String),
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
