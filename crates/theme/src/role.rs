//! The closed set of roles a theme definition must fill.
//!
//! Role names are the camelCase keys used by theme assets. Adding a role is an
//! additive schema change: every asset and the editor mappers must be updated
//! alongside it.

use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Roles that accept a full [`Style`](crate::Style), decorations included.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, EnumString, IntoStaticStr, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum StyleRole {
	/// Keywords.
	Keyword,
	/// Operators.
	Operator,
	/// User-defined types, such as classes.
	UserType,
	/// Types from a language's standard library.
	StandardType,
	/// Built-in types.
	BuiltinType,
	/// Interface or interface-like types.
	InterfaceType,
	/// Functions.
	Function,
	/// Static functions.
	StaticFunction,
	/// Constants and enumeration members.
	Constant,
	/// Built-in constants, such as `true`.
	BuiltinConstant,
	/// Enumerations.
	Enumeration,
	/// Namespaces.
	Namespace,
	/// Macros.
	Macro,
	/// Variables.
	Variable,
	/// Numbers.
	Number,
	/// Punctuation.
	Punctuation,
	/// Comments.
	Comment,
	/// Strings.
	String,
	/// Escape sequences.
	Escape,
}

/// Roles that accept a bare [`Color`](crate::Color) only.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, EnumString, IntoStaticStr, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ColorRole {
	/// Errors and illegal code.
	Error,
	Warning,
	Info,

	/// Source control: added resources.
	Added,
	Deleted,
	Ignored,
	Modified,
	Untracked,

	/// Running or passing tasks and tests.
	Running,

	/// Editor background.
	Background,
	/// Side bar, title bar and inactive tab background.
	BackgroundSecondary,
	/// Peek view background.
	BackgroundPeek,

	Foreground,
	ForegroundInactive,

	/// Preformatted text.
	Preformat,
	Accent,

	/// Line numbers and indent guides.
	Guide,
	GuideFocus,

	/// Find matches.
	Match,
	MatchFocus,

	Link,
	LinkHover,

	Button,
	ButtonHover,

	Input,
	InputBorder,

	/// Hover, suggest and notification widgets.
	Widget,
	WidgetBorder,

	Checkbox,

	ScrollBar,
	ScrollBarActive,

	StatusBar,
	StatusBarForeground,
	StatusBarDebugging,
	StatusBarNoFolder,

	Badge,
	BadgeForeground,
}

impl StyleRole {
	/// Asset key for this role.
	pub fn name(self) -> &'static str {
		self.into()
	}
}

impl ColorRole {
	/// Asset key for this role.
	pub fn name(self) -> &'static str {
		self.into()
	}
}

#[cfg(test)]
mod tests {
	use core::str::FromStr;

	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn names_are_camel_case() {
		assert_eq!(StyleRole::UserType.name(), "userType");
		assert_eq!(StyleRole::String.name(), "string");
		assert_eq!(ColorRole::BackgroundSecondary.name(), "backgroundSecondary");
		assert_eq!(ColorRole::StatusBarNoFolder.name(), "statusBarNoFolder");
	}

	#[test]
	fn names_parse_back() {
		for role in StyleRole::iter() {
			assert_eq!(StyleRole::from_str(role.name()), Ok(role));
		}
		for role in ColorRole::iter() {
			assert_eq!(ColorRole::from_str(role.name()), Ok(role));
		}
	}

	#[test]
	fn iteration_order_matches_discriminants() {
		for (i, role) in StyleRole::iter().enumerate() {
			assert_eq!(role as usize, i);
		}
		for (i, role) in ColorRole::iter().enumerate() {
			assert_eq!(role as usize, i);
		}
	}

	#[test]
	fn role_sets_are_disjoint() {
		for role in StyleRole::iter() {
			assert!(ColorRole::from_str(role.name()).is_err(), "{} is both", role.name());
		}
	}

	#[test]
	fn role_counts() {
		assert_eq!(StyleRole::COUNT, 19);
		assert_eq!(ColorRole::COUNT, 37);
	}
}
