use stockr_api::ProductsApi;
use throbber_widgets_tui::ThrobberState;

use crate::config::UiSettings;
use crate::outcome::SessionOutcome;
use crate::requests::{self, RequestRuntime};
use crate::store::ProductStore;
use crate::style::{StyleConfig, Theme};
use crate::view::ViewState;

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.requests.shutdown();
	}
}

/// Controller state shared across the terminal UI.
///
/// Product data lives in [`ProductStore`] and is only written when a request
/// result arrives. Everything else the screen needs lives in [`ViewState`].
pub struct App<'a> {
	/// Last product snapshot returned by the backend.
	pub store: ProductStore,
	/// UI-only state: loading flag, error report, input, modals.
	pub view: ViewState<'a>,
	pub settings: UiSettings,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) requests: RequestRuntime,
}

impl App<'_> {
	/// Construct an [`App`] that talks to `api` from a background worker.
	pub fn new(api: Box<dyn ProductsApi>, settings: UiSettings) -> Self {
		let (tx, rx, latest_query_id) = requests::spawn(api);
		let mut view = ViewState::new(&settings.initial_query);
		let style = StyleConfig::default();
		view.search_input.set_placeholder_style(style.theme.empty);

		Self {
			store: ProductStore::default(),
			view,
			settings,
			style,
			throbber_state: ThrobberState::default(),
			requests: RequestRuntime::new(tx, rx, latest_query_id),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
		self.view.search_input.set_placeholder_style(theme.empty);
	}

	/// Whether any request is still waiting for the backend.
	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.requests.is_busy()
	}

	/// Summarise the session for reporting after the UI exits.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			products_shown: self.store.len(),
			ordered: self.store.is_ordered(),
			query: self.view.search_input.text().to_string(),
			last_error: self.view.error.as_ref().map(|report| report.message.clone()),
		}
	}
}
