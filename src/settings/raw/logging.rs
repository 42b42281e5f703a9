use std::path::PathBuf;

use serde::Deserialize;
use stockr::logging::LogSettings;

use crate::cli::CliArgs;

/// Log destination and filter prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_log {
			self.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn finalize(self) -> LogSettings {
		let defaults = LogSettings::default();
		LogSettings {
			enabled: self.enabled.unwrap_or(defaults.enabled),
			level: self.level.unwrap_or(defaults.level),
			file: self.file,
		}
	}
}
