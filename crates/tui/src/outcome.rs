use serde::Serialize;

/// Summary of an interactive session, reported once the UI exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Number of products listed when the session ended.
	pub products_shown: usize,
	/// Whether the list was in quantity order.
	pub ordered: bool,
	/// Contents of the search box.
	pub query: String,
	/// The error report still on screen, if any.
	pub last_error: Option<String>,
}
