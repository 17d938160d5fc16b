//! Theme definitions and the builder that resolves them.
//!
//! A [`ThemeDefinition`] maps every [`StyleRole`] to a [`Style`] and every
//! [`ColorRole`] to a [`Color`]. Definitions ship as TOML assets (see
//! [`catalog`]) and are resolved into a [`ResolvedTheme`] by [`build`] before
//! being mapped onto an editor's theme format.

pub use oro_primitives::{Color, FontStyle, ResolvedStyle, Style};

pub mod builder;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod link;
pub mod role;
pub mod spec;

pub use builder::{ResolvedTheme, build};
pub use catalog::builtin_themes;
pub use definition::{ITALIC_ROLES, ThemeDefinition};
pub use error::{Result, ThemeError};
pub use role::{ColorRole, StyleRole};
