//! Domain-data store holding the last product snapshot.
//!
//! The list is replaced wholesale on every successful fetch and cleared when
//! a fetch fails. Nothing outside the controller writes to it.

use stockr_api::Product;

#[derive(Debug, Default, Clone)]
pub struct ProductStore {
	products: Vec<Product>,
	ordered: bool,
}

impl ProductStore {
	#[must_use]
	pub fn products(&self) -> &[Product] {
		&self.products
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.products.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}

	/// Whether the listing was last requested in quantity order.
	#[must_use]
	pub fn is_ordered(&self) -> bool {
		self.ordered
	}

	/// Look a product up by the text of its id.
	///
	/// The comparison is on the rendered id, so `"01"` does not match id `1`.
	#[must_use]
	pub fn find_by_id_text(&self, text: &str) -> Option<&Product> {
		self.products
			.iter()
			.find(|product| product.id.to_string() == text)
	}

	pub(crate) fn replace(&mut self, products: Vec<Product>) {
		self.products = products;
	}

	pub(crate) fn clear(&mut self) {
		self.products.clear();
	}

	/// Flip the ordering flag and return the new value.
	pub(crate) fn toggle_ordered(&mut self) -> bool {
		self.ordered = !self.ordered;
		self.ordered
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn widget(id: i64) -> Product {
		Product {
			id,
			name: format!("Widget {id}"),
			price: 1.5,
			quantity: 3,
		}
	}

	#[test]
	fn lookup_compares_rendered_ids() {
		let mut store = ProductStore::default();
		store.replace(vec![widget(1), widget(12)]);

		assert_eq!(store.find_by_id_text("12").map(|p| p.id), Some(12));
		assert!(store.find_by_id_text("01").is_none());
		assert!(store.find_by_id_text(" 1").is_none());
		assert!(store.find_by_id_text("").is_none());
	}

	#[test]
	fn replace_discards_the_previous_snapshot() {
		let mut store = ProductStore::default();
		store.replace(vec![widget(1), widget(2)]);
		store.replace(vec![widget(3)]);
		assert_eq!(store.len(), 1);
		assert_eq!(store.products()[0].id, 3);

		store.clear();
		assert!(store.is_empty());
	}

	#[test]
	fn ordering_flag_toggles() {
		let mut store = ProductStore::default();
		assert!(!store.is_ordered());
		assert!(store.toggle_ordered());
		assert!(!store.toggle_ordered());
	}
}
