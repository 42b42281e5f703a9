use crate::view::ModalTimings;

/// Presentation settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
	/// Title rendered above the product table.
	pub title: String,
	/// Symbol prefixed to prices.
	pub currency: String,
	/// Text placed in the search box and searched for at startup.
	pub initial_query: String,
	pub timings: ModalTimings,
}

impl Default for UiSettings {
	fn default() -> Self {
		Self {
			title: "Inventory".to_string(),
			currency: "$".to_string(),
			initial_query: String::new(),
			timings: ModalTimings::default(),
		}
	}
}
