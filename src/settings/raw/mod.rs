use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod logging;
mod ui;

use backend::BackendSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	backend: BackendSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.backend.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.backend.base_url.is_some(),
				"STOCKR__BACKEND__BASE_URL",
				"--base-url",
				"backend.base_url",
			),
			timeout_ms: detect_source(
				cli.timeout_ms.is_some(),
				self.backend.timeout_ms.is_some(),
				"STOCKR__BACKEND__TIMEOUT_MS",
				"--timeout-ms",
				"backend.timeout_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"STOCKR__UI__THEME",
				"--theme",
				"ui.theme",
			),
			open_animation_ms: detect_source(
				false,
				self.ui.open_animation_ms.is_some(),
				"STOCKR__UI__OPEN_ANIMATION_MS",
				"",
				"ui.open_animation_ms",
			),
			close_animation_ms: detect_source(
				false,
				self.ui.close_animation_ms.is_some(),
				"STOCKR__UI__CLOSE_ANIMATION_MS",
				"",
				"ui.close_animation_ms",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"STOCKR__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let config = ResolvedConfig {
			backend: self.backend.finalize(),
			theme: self.ui.theme_name(),
			ui: self.ui.finalize(),
			logging: self.logging.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
