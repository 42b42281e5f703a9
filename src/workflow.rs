use anyhow::{Context, Result};
use stockr_api::{BackendConfig, HttpProductsApi};
use stockr_tui::{SessionOutcome, Theme, UiSettings};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building the backend client and running the inventory UI.
pub(crate) struct InventoryWorkflow {
	api: HttpProductsApi,
	ui: UiSettings,
	theme: Theme,
}

impl InventoryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			backend, ui, theme, ..
		} = config;

		let api = Self::connect(backend)?;
		let theme = stockr_tui::style::by_name(&theme).unwrap_or_else(stockr_tui::default_theme);
		Ok(Self { api, ui, theme })
	}

	fn connect(backend: BackendConfig) -> Result<HttpProductsApi> {
		let base_url = backend.base_url.clone();
		let api = HttpProductsApi::new(backend)
			.with_context(|| format!("failed to build HTTP client for {base_url}"))?;
		info!(%base_url, "backend client ready");
		Ok(api)
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		stockr_tui::run(Box::new(self.api), self.ui, self.theme)
	}
}
