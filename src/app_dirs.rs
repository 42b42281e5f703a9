//! Where `stockr` looks for `config.toml` and writes `stockr.log`.
//!
//! `STOCKR_CONFIG_DIR` and `STOCKR_DATA_DIR` take precedence over the
//! per-user directories of the `dev.stockr.stockr` project.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "stockr";
const APPLICATION: &str = "stockr";

pub const CONFIG_DIR_ENV: &str = "STOCKR_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "STOCKR_DATA_DIR";

/// Per-user directories of the `dev.stockr.stockr` project.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for stockr"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory; the default log file lives here.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}
