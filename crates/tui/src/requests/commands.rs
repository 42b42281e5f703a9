use stockr_api::{ApiError, NewProduct, Product, ProductPatch, coerce};

use crate::view::ModalKind;

/// Read-only requests that replace the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryKind {
	All,
	ById(String),
	ByName(String),
	OrderedByQuantity,
}

impl QueryKind {
	/// Classify the search box contents.
	///
	/// Blank text lists everything, all-digit text is an id lookup, anything
	/// else is a name search.
	pub(crate) fn from_search_text(text: &str) -> Self {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			QueryKind::All
		} else if coerce::is_id_term(trimmed) {
			QueryKind::ById(trimmed.to_string())
		} else {
			QueryKind::ByName(trimmed.to_string())
		}
	}

	/// Message shown when the request fails.
	pub(crate) fn failure_message(&self) -> &'static str {
		match self {
			QueryKind::All => "Failed to fetch products",
			QueryKind::ById(_) => "Failed to fetch product by id",
			QueryKind::ByName(_) => "Failed to search products by name",
			QueryKind::OrderedByQuantity => "Failed to fetch ordered products",
		}
	}
}

/// Requests that change backend data.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mutation {
	Create(NewProduct),
	Update { id: String, patch: ProductPatch },
	Delete { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MutationKind {
	Create,
	Update,
	Delete,
}

impl MutationKind {
	pub(crate) fn modal(self) -> ModalKind {
		match self {
			MutationKind::Create => ModalKind::Add,
			MutationKind::Update => ModalKind::Update,
			MutationKind::Delete => ModalKind::Delete,
		}
	}

	pub(crate) fn failure_message(self) -> &'static str {
		match self {
			MutationKind::Create => "Failed to add product",
			MutationKind::Update => "Failed to update product",
			MutationKind::Delete => "Failed to delete product",
		}
	}
}

impl Mutation {
	pub(crate) fn kind(&self) -> MutationKind {
		match self {
			Mutation::Create(_) => MutationKind::Create,
			Mutation::Update { .. } => MutationKind::Update,
			Mutation::Delete { .. } => MutationKind::Delete,
		}
	}
}

/// Commands understood by the background request worker.
#[derive(Debug)]
pub(crate) enum RequestCommand {
	Query {
		/// Identifier that lets the UI correlate responses with the originating query.
		id: u64,
		kind: QueryKind,
	},
	Mutate(Mutation),
	/// Stop the background worker thread.
	Shutdown,
}

/// Successful query payloads.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryOutcome {
	Products(Vec<Product>),
	/// An id lookup answered 404.
	NotFound,
}

/// Responses emitted back to the UI thread.
#[derive(Debug)]
pub(crate) enum RequestResult {
	Query {
		id: u64,
		kind: QueryKind,
		outcome: Result<QueryOutcome, ApiError>,
	},
	Mutation {
		kind: MutationKind,
		outcome: Result<(), ApiError>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_text_is_classified() {
		assert_eq!(QueryKind::from_search_text("   "), QueryKind::All);
		assert_eq!(
			QueryKind::from_search_text(" 42 "),
			QueryKind::ById("42".into())
		);
		assert_eq!(
			QueryKind::from_search_text("widget 2"),
			QueryKind::ByName("widget 2".into())
		);
		assert_eq!(
			QueryKind::from_search_text("-3"),
			QueryKind::ByName("-3".into())
		);
	}

	#[test]
	fn mutations_map_to_their_forms() {
		let delete = Mutation::Delete { id: "7".into() };
		assert_eq!(delete.kind().modal(), ModalKind::Delete);
		assert_eq!(MutationKind::Create.modal(), ModalKind::Add);
	}
}
