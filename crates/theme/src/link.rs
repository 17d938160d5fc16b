//! Links raw [`ThemeSpec`]s into typed [`ThemeDefinition`]s.

use core::str::FromStr;

use oro_primitives::{Color, FontStyle, Style};

use crate::definition::ThemeDefinition;
use crate::error::{Result, ThemeError};
use crate::role::{ColorRole, StyleRole};
use crate::spec::{RawStyle, ThemeSpec};

/// Links a spec into its base definition, followed by the italics variant
/// when the asset requests one.
pub fn link_theme(spec: &ThemeSpec) -> Result<Vec<ThemeDefinition>> {
	let base = link_definition(spec)?;
	let mut out = Vec::with_capacity(2);
	if let Some(italics) = &spec.italics {
		let variant = base.derive_italics(&italics.name, &italics.filename);
		out.push(base);
		out.push(variant);
	} else {
		out.push(base);
	}
	Ok(out)
}

/// Links the base definition of a spec, without variants.
pub fn link_definition(spec: &ThemeSpec) -> Result<ThemeDefinition> {
	let mut def = ThemeDefinition::new(&spec.name, &spec.filename);

	for (key, raw) in &spec.styles {
		let role = StyleRole::from_str(key).map_err(|_| ThemeError::UnknownRole {
			theme: spec.name.clone(),
			kind: "style",
			role: key.clone(),
		})?;
		def.set_style(role, link_style(&spec.name, key, raw)?);
	}

	for (key, raw) in &spec.colors {
		let role = ColorRole::from_str(key).map_err(|_| ThemeError::UnknownRole {
			theme: spec.name.clone(),
			kind: "color",
			role: key.clone(),
		})?;
		def.set_color(role, link_color(&spec.name, key, raw)?);
	}

	Ok(def)
}

fn link_style(theme: &str, role: &str, raw: &RawStyle) -> Result<Style> {
	let foreground = link_color(theme, role, raw.foreground())?;
	Ok(match raw {
		RawStyle::Plain(_) => Style::Plain(foreground),
		RawStyle::Decorated(d) => Style::Decorated {
			foreground,
			font: FontStyle::from_flags(d.bold, d.italic, d.strikethrough, d.underline),
		},
	})
}

fn link_color(theme: &str, role: &str, raw: &str) -> Result<Color> {
	Color::from_str(raw).map_err(|source| ThemeError::Color {
		theme: theme.to_string(),
		role: role.to_string(),
		source,
	})
}
