use std::time::Duration;

use serde::Deserialize;
use stockr_tui::UiSettings;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) currency: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) open_animation_ms: Option<u64>,
	pub(super) close_animation_ms: Option<u64>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(currency) = cli.currency.clone() {
			self.currency = Some(currency);
		}
	}

	pub(super) fn theme_name(&self) -> String {
		self.theme
			.clone()
			.unwrap_or_else(|| DEFAULT_THEME.to_string())
	}

	pub(super) fn finalize(self) -> UiSettings {
		let mut ui = UiSettings::default();
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(currency) = self.currency {
			ui.currency = currency;
		}
		if let Some(query) = self.initial_query {
			ui.initial_query = query;
		}
		if let Some(ms) = self.open_animation_ms {
			ui.timings.open = Duration::from_millis(ms);
		}
		if let Some(ms) = self.close_animation_ms {
			ui.timings.close = Duration::from_millis(ms);
		}
		ui
	}
}
