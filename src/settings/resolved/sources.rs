use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) timeout_ms: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) open_animation_ms: Option<SettingSource>,
	pub(crate) close_animation_ms: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	/// The recorded origin, or the configuration key when none was detected.
	pub(crate) fn source_or_key(
		source: &Option<SettingSource>,
		key: &'static str,
	) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
