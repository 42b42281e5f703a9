use ratatui::style::{Color, Modifier, Style};

use super::builtins::{BUILT_IN_DEFINITIONS, SLATE};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the header bar and table headings.
	pub header: Style,
	/// Style for the selected table row.
	pub row_highlight: Style,
	/// Style for the search prompt.
	pub prompt: Style,
	/// Style for empty states and placeholders.
	pub empty: Style,
	/// Style for emphasised values such as pending edits.
	pub highlight: Style,
	/// Style for error reports.
	pub error: Style,
	/// Style for modal borders.
	pub border: Style,
}

impl Theme {
	/// Style applied to a modal while its close animation runs.
	#[must_use]
	pub fn fading_style(&self) -> Style {
		Style::new()
			.fg(self.empty.fg.unwrap_or(Color::DarkGray))
			.add_modifier(Modifier::DIM)
	}

	/// Style for the focused field inside a modal.
	#[must_use]
	pub fn focus_style(&self) -> Style {
		self.row_highlight.add_modifier(Modifier::BOLD)
	}

	/// Style for the backdrop behind an open modal.
	#[must_use]
	pub fn backdrop_style(&self) -> Style {
		Style::new().add_modifier(Modifier::DIM)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Static description of a built-in theme.
#[derive(Debug, Clone, Copy)]
pub(super) struct ThemeDefinition {
	pub(super) name: &'static str,
	pub(super) aliases: &'static [&'static str],
	pub(super) theme: Theme,
}

/// Snapshot of a built-in theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}

impl From<&ThemeDefinition> for ThemeDescriptor {
	fn from(definition: &ThemeDefinition) -> Self {
		Self {
			name: definition.name.to_string(),
			aliases: definition.aliases.iter().map(|alias| alias.to_string()).collect(),
			theme: definition.theme,
		}
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			definition.name == normalized
				|| definition
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == normalized)
		})
		.map(|definition| definition.theme)
}

/// Return the canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name.to_string())
		.collect();
	names.sort_unstable();
	names
}

/// Return every built-in theme with its aliases, sorted by name.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeDescriptor> {
	let mut descriptors: Vec<ThemeDescriptor> =
		BUILT_IN_DEFINITIONS.iter().map(ThemeDescriptor::from).collect();
	descriptors.sort_unstable_by(|a, b| a.name.cmp(&b.name));
	descriptors
}
