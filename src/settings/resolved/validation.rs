use std::time::Duration;

use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted modal animation.
const MAX_ANIMATION: Duration = Duration::from_secs(5);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let base_url = config.backend.base_url.trim();
	if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"backend.base_url",
			base_url,
			ConfigSources::source_or_key(&sources.base_url, "backend.base_url"),
			"must start with http:// or https://",
		));
	}

	if let Some(timeout) = config.backend.timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"backend.timeout_ms",
			"0",
			ConfigSources::source_or_key(&sources.timeout_ms, "backend.timeout_ms"),
			"must be greater than zero",
		));
	}

	if stockr_tui::style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			ConfigSources::source_or_key(&sources.theme, "ui.theme"),
			format!(
				"unknown theme; expected one of {}",
				stockr_tui::style::names().join(", ")
			),
		));
	}

	let animations = [
		(
			"ui.open_animation_ms",
			config.ui.timings.open,
			&sources.open_animation_ms,
		),
		(
			"ui.close_animation_ms",
			config.ui.timings.close,
			&sources.close_animation_ms,
		),
	];
	for (key, duration, source) in animations {
		if duration > MAX_ANIMATION {
			return Err(ConfigError::invalid(
				key,
				duration.as_millis().to_string(),
				ConfigSources::source_or_key(source, key),
				format!("must be at most {} ms", MAX_ANIMATION.as_millis()),
			));
		}
	}

	if config.logging.enabled
		&& let Err(err) = EnvFilter::try_new(&config.logging.level)
	{
		return Err(ConfigError::invalid(
			"logging.level",
			config.logging.level.clone(),
			ConfigSources::source_or_key(&sources.log_level, "logging.level"),
			err.to_string(),
		));
	}

	Ok(())
}
