use std::time::Duration;

use serde::Deserialize;
use stockr_api::BackendConfig;

use crate::cli::CliArgs;

/// Backend location and routes prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
	pub(super) base_url: Option<String>,
	pub(super) search_param: Option<String>,
	pub(super) products_path: Option<String>,
	pub(super) search_path: Option<String>,
	pub(super) ordered_path: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

impl BackendSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(param) = cli.search_param.clone() {
			self.search_param = Some(param);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.timeout_ms = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> BackendConfig {
		let defaults = BackendConfig::default();
		BackendConfig {
			base_url: self.base_url.unwrap_or(defaults.base_url),
			products_path: self.products_path.unwrap_or(defaults.products_path),
			search_path: self.search_path.unwrap_or(defaults.search_path),
			ordered_path: self.ordered_path.unwrap_or(defaults.ordered_path),
			search_param: self.search_param.unwrap_or(defaults.search_param),
			timeout: self.timeout_ms.map(Duration::from_millis),
		}
	}
}
