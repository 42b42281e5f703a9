use serde::{Deserialize, Serialize};

/// Inventory record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: i64,
	#[serde(default)]
	pub name: String,
	pub price: f64,
	pub quantity: i64,
}

impl Product {
	/// Render a single field the way forms and previews display it.
	#[must_use]
	pub fn field_text(&self, field: ProductField) -> String {
		match field {
			ProductField::Name => self.name.clone(),
			ProductField::Price => self.price.to_string(),
			ProductField::Quantity => self.quantity.to_string(),
		}
	}
}

/// Editable product attributes. The id is server-assigned and never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
	Name,
	Price,
	Quantity,
}

impl ProductField {
	pub const ALL: [ProductField; 3] = [
		ProductField::Name,
		ProductField::Price,
		ProductField::Quantity,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			ProductField::Name => "Name",
			ProductField::Price => "Price",
			ProductField::Quantity => "Quantity",
		}
	}

	/// Whether the field only accepts numeric input.
	#[must_use]
	pub fn is_numeric(self) -> bool {
		!matches!(self, ProductField::Name)
	}
}

/// Payload for `POST /products`.
///
/// Numeric inputs that fail coercion are kept as `None` and serialize to
/// `null`; the backend decides what to do with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
	pub name: String,
	pub price: Option<f64>,
	pub quantity: Option<i64>,
}

/// Partial payload for `PUT /products/{id}`.
///
/// Only fields that are `Some` are sent. A present numeric field holding
/// `None` is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<Option<f64>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity: Option<Option<i64>>,
}

impl ProductPatch {
	/// Fields carried by this patch, in display order.
	#[must_use]
	pub fn fields(&self) -> Vec<ProductField> {
		let mut fields = Vec::new();
		if self.name.is_some() {
			fields.push(ProductField::Name);
		}
		if self.price.is_some() {
			fields.push(ProductField::Price);
		}
		if self.quantity.is_some() {
			fields.push(ProductField::Quantity);
		}
		fields
	}
}
