//! Unsaved form input for the add, delete and update modals.

use stockr_api::coerce::{parse_float, parse_int};
use stockr_api::{NewProduct, Product, ProductField, ProductPatch};

use crate::store::ProductStore;

/// Text buffers for the three editable product fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
	pub name: String,
	pub price: String,
	pub quantity: String,
}

impl FieldValues {
	#[must_use]
	pub fn get(&self, field: ProductField) -> &str {
		match field {
			ProductField::Name => &self.name,
			ProductField::Price => &self.price,
			ProductField::Quantity => &self.quantity,
		}
	}

	pub fn get_mut(&mut self, field: ProductField) -> &mut String {
		match field {
			ProductField::Name => &mut self.name,
			ProductField::Price => &mut self.price,
			ProductField::Quantity => &mut self.quantity,
		}
	}
}

impl From<&Product> for FieldValues {
	fn from(product: &Product) -> Self {
		Self {
			name: product.field_text(ProductField::Name),
			price: product.field_text(ProductField::Price),
			quantity: product.field_text(ProductField::Quantity),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDraft {
	pub values: FieldValues,
}

impl AddDraft {
	/// Build the create payload, coercing the numeric fields.
	#[must_use]
	pub fn to_payload(&self) -> NewProduct {
		NewProduct {
			name: self.values.name.clone(),
			price: parse_float(&self.values.price),
			quantity: parse_int(&self.values.quantity),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDraft {
	pub id: String,
}

/// What the delete modal shows under the id field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeletePreview<'a> {
	Empty,
	NotFound,
	Found(&'a Product),
}

impl DeleteDraft {
	#[must_use]
	pub fn preview<'a>(&self, store: &'a ProductStore) -> DeletePreview<'a> {
		match store.find_by_id_text(&self.id) {
			Some(product) => DeletePreview::Found(product),
			None if !self.id.trim().is_empty() => DeletePreview::NotFound,
			None => DeletePreview::Empty,
		}
	}
}

/// Which fields an update includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
	name: bool,
	price: bool,
	quantity: bool,
}

impl FieldSet {
	#[must_use]
	pub fn contains(&self, field: ProductField) -> bool {
		match field {
			ProductField::Name => self.name,
			ProductField::Price => self.price,
			ProductField::Quantity => self.quantity,
		}
	}

	fn flag_mut(&mut self, field: ProductField) -> &mut bool {
		match field {
			ProductField::Name => &mut self.name,
			ProductField::Price => &mut self.price,
			ProductField::Quantity => &mut self.quantity,
		}
	}

	/// Flip `field` and return its new state.
	pub fn toggle(&mut self, field: ProductField) -> bool {
		let flag = self.flag_mut(field);
		*flag = !*flag;
		*flag
	}
}

/// One row of the update modal's side-by-side preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPreview {
	pub field: ProductField,
	pub current: String,
	pub pending: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDraft {
	pub id: String,
	checked: FieldSet,
	values: FieldValues,
	loaded: Option<Product>,
}

impl UpdateDraft {
	#[must_use]
	pub fn is_checked(&self, field: ProductField) -> bool {
		self.checked.contains(field)
	}

	#[must_use]
	pub fn value(&self, field: ProductField) -> &str {
		self.values.get(field)
	}

	pub fn value_mut(&mut self, field: ProductField) -> &mut String {
		self.values.get_mut(field)
	}

	/// Reload the draft values whenever the product being edited changes.
	///
	/// A refetch that returns a different version of the same product counts
	/// as a change. Losing the product keeps the current values.
	pub fn sync(&mut self, original: Option<&Product>) {
		if self.loaded.as_ref() == original {
			return;
		}
		if let Some(product) = original {
			self.values = FieldValues::from(product);
		}
		self.loaded = original.cloned();
	}

	/// Flip the checkbox for `field`.
	///
	/// Unchecking resets the draft value to the original product's value so a
	/// later re-check starts from it. Checking leaves the value untouched.
	pub fn toggle(&mut self, field: ProductField, original: Option<&Product>) -> bool {
		let checked = self.checked.toggle(field);
		if !checked && let Some(product) = original {
			*self.values.get_mut(field) = product.field_text(field);
		}
		checked
	}

	/// Partial update holding exactly the checked fields.
	#[must_use]
	pub fn payload(&self) -> ProductPatch {
		ProductPatch {
			name: self
				.is_checked(ProductField::Name)
				.then(|| self.values.name.clone()),
			price: self
				.is_checked(ProductField::Price)
				.then(|| parse_float(&self.values.price)),
			quantity: self
				.is_checked(ProductField::Quantity)
				.then(|| parse_int(&self.values.quantity)),
		}
	}

	/// Current versus pending value for every field.
	#[must_use]
	pub fn preview(&self, original: &Product) -> Vec<FieldPreview> {
		ProductField::ALL
			.into_iter()
			.map(|field| {
				let current = original.field_text(field);
				let pending = if self.is_checked(field) {
					self.values.get(field).to_string()
				} else {
					current.clone()
				};
				FieldPreview {
					field,
					current,
					pending,
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn widget() -> Product {
		Product {
			id: 1,
			name: "Widget".into(),
			price: 9.99,
			quantity: 5,
		}
	}

	fn store_with(products: Vec<Product>) -> ProductStore {
		let mut store = ProductStore::default();
		store.replace(products);
		store
	}

	#[test]
	fn add_payload_coerces_numbers_without_validating() {
		let draft = AddDraft {
			values: FieldValues {
				name: "Gadget".into(),
				price: "-3.5".into(),
				quantity: "abc".into(),
			},
		};
		assert_eq!(
			draft.to_payload(),
			NewProduct {
				name: "Gadget".into(),
				price: Some(-3.5),
				quantity: None,
			}
		);
	}

	#[test]
	fn delete_preview_distinguishes_empty_and_missing() {
		let store = store_with(vec![widget()]);
		let mut draft = DeleteDraft::default();
		assert_eq!(draft.preview(&store), DeletePreview::Empty);

		draft.id = "  ".into();
		assert_eq!(draft.preview(&store), DeletePreview::Empty);

		draft.id = "2".into();
		assert_eq!(draft.preview(&store), DeletePreview::NotFound);

		draft.id = "1".into();
		assert!(matches!(draft.preview(&store), DeletePreview::Found(p) if p.id == 1));
	}

	#[test]
	fn sync_loads_values_from_the_selected_product() {
		let product = widget();
		let mut draft = UpdateDraft::default();
		draft.sync(Some(&product));
		assert_eq!(draft.value(ProductField::Name), "Widget");
		assert_eq!(draft.value(ProductField::Price), "9.99");
		assert_eq!(draft.value(ProductField::Quantity), "5");

		*draft.value_mut(ProductField::Name) = "Edited".into();
		draft.sync(Some(&product));
		assert_eq!(draft.value(ProductField::Name), "Edited");

		let refreshed = Product {
			quantity: 8,
			..product.clone()
		};
		draft.sync(Some(&refreshed));
		assert_eq!(draft.value(ProductField::Name), "Widget");
		assert_eq!(draft.value(ProductField::Quantity), "8");

		draft.sync(None);
		assert_eq!(draft.value(ProductField::Quantity), "8");
	}

	#[test]
	fn toggling_off_resets_to_the_original_value() {
		let product = widget();
		let mut draft = UpdateDraft::default();
		draft.sync(Some(&product));

		assert!(draft.toggle(ProductField::Price, Some(&product)));
		*draft.value_mut(ProductField::Price) = "12.50".into();

		assert!(!draft.toggle(ProductField::Price, Some(&product)));
		assert_eq!(draft.value(ProductField::Price), "9.99");

		// Re-checking starts from the reset value, not the earlier edit.
		assert!(draft.toggle(ProductField::Price, Some(&product)));
		assert_eq!(draft.value(ProductField::Price), "9.99");
	}

	#[test]
	fn toggling_on_keeps_the_draft_value() {
		let product = widget();
		let mut draft = UpdateDraft::default();
		draft.sync(Some(&product));
		*draft.value_mut(ProductField::Name) = "Typed early".into();

		draft.toggle(ProductField::Name, Some(&product));
		assert_eq!(draft.value(ProductField::Name), "Typed early");
	}

	#[test]
	fn payload_contains_exactly_the_checked_fields() {
		let product = widget();
		let mut draft = UpdateDraft::default();
		draft.sync(Some(&product));
		draft.toggle(ProductField::Price, Some(&product));
		draft.toggle(ProductField::Quantity, Some(&product));
		*draft.value_mut(ProductField::Price) = "12.5".into();
		*draft.value_mut(ProductField::Quantity) = "7.9".into();
		*draft.value_mut(ProductField::Name) = "Ignored".into();

		let patch = draft.payload();
		assert_eq!(patch.name, None);
		assert_eq!(patch.price, Some(Some(12.5)));
		assert_eq!(patch.quantity, Some(Some(7)));
		assert_eq!(
			patch.fields(),
			vec![ProductField::Price, ProductField::Quantity]
		);
	}

	#[test]
	fn preview_uses_draft_only_for_checked_fields() {
		let product = widget();
		let mut draft = UpdateDraft::default();
		draft.sync(Some(&product));
		draft.toggle(ProductField::Name, Some(&product));
		*draft.value_mut(ProductField::Name) = "Sprocket".into();
		*draft.value_mut(ProductField::Quantity) = "99".into();

		let preview = draft.preview(&product);
		assert_eq!(preview[0].current, "Widget");
		assert_eq!(preview[0].pending, "Sprocket");
		assert_eq!(preview[2].current, "5");
		assert_eq!(preview[2].pending, "5");
	}
}
