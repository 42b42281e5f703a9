//! File-based `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines always go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "STOCKR_LOG";
pub const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "stockr.log";

/// Resolved logging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	pub enabled: bool,
	/// An `EnvFilter` directive such as `info` or `stockr_api=debug`.
	pub level: String,
	/// Destination file; `None` means `<data dir>/stockr.log`.
	pub file: Option<PathBuf>,
}

impl Default for LogSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			level: DEFAULT_LEVEL.to_string(),
			file: None,
		}
	}
}

impl LogSettings {
	/// The file log lines are appended to.
	pub fn resolve_file(&self) -> Result<PathBuf> {
		match &self.file {
			Some(path) => Ok(path.clone()),
			None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		}
	}

	fn filter(&self) -> Result<EnvFilter> {
		match std::env::var(LOG_ENV) {
			Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
				.with_context(|| format!("invalid filter in {LOG_ENV}")),
			_ => EnvFilter::try_new(&self.level)
				.with_context(|| format!("invalid log level `{}`", self.level)),
		}
	}
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn initialize(settings: &LogSettings) -> Result<Option<PathBuf>> {
	if !settings.enabled {
		return Ok(None);
	}

	let path = settings.resolve_file()?;
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(settings.filter()?)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_thread_names(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(Some(path))
}
