//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. They are looked
//! up by name from a fixed set of built-ins.

mod builtins;
mod theme;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use theme::{Theme, ThemeDescriptor, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
