//! In-memory stand-in for the REST backend.
//!
//! Behaves the way the client expects a backend to: sequential ids,
//! case-insensitive substring name search, ascending quantity ordering, 404
//! for unknown ids and 400 for a blank name. Updates are partial, so a patch
//! without a name keeps the stored one.

use std::sync::{Mutex, MutexGuard};

use crate::client::ProductsApi;
use crate::error::ApiError;
use crate::model::{NewProduct, Product, ProductPatch};

#[derive(Debug, Default)]
struct MemoryState {
	products: Vec<Product>,
	next_id: i64,
	failure: Option<u16>,
	requests: Vec<String>,
}

/// Thread-safe [`ProductsApi`] backed by a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryProductsApi {
	state: Mutex<MemoryState>,
}

impl MemoryProductsApi {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the backend with products, assigning ids in order.
	#[must_use]
	pub fn with_products<I>(products: I) -> Self
	where
		I: IntoIterator<Item = (&'static str, f64, i64)>,
	{
		let api = Self::new();
		{
			let mut state = api.lock();
			for (name, price, quantity) in products {
				state.next_id += 1;
				let id = state.next_id;
				state.products.push(Product {
					id,
					name: name.to_string(),
					price,
					quantity,
				});
			}
		}
		api
	}

	/// Make every following call fail with `status` until cleared with `None`.
	pub fn fail_with(&self, status: Option<u16>) {
		self.lock().failure = status;
	}

	/// Requests served so far, formatted as `METHOD path`.
	#[must_use]
	pub fn requests(&self) -> Vec<String> {
		self.lock().requests.clone()
	}

	#[must_use]
	pub fn snapshot(&self) -> Vec<Product> {
		self.lock().products.clone()
	}

	fn lock(&self) -> MutexGuard<'_, MemoryState> {
		self.state
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn begin(
		&self,
		method: &'static str,
		path: String,
	) -> Result<MutexGuard<'_, MemoryState>, ApiError> {
		let mut state = self.lock();
		state.requests.push(format!("{method} {path}"));
		if let Some(status) = state.failure {
			return Err(ApiError::Status {
				method,
				url: path,
				status,
			});
		}
		Ok(state)
	}
}

fn status(method: &'static str, path: String, status: u16) -> ApiError {
	ApiError::Status {
		method,
		url: path,
		status,
	}
}

fn parse_id(method: &'static str, path: &str, id: &str) -> Result<i64, ApiError> {
	id.trim()
		.parse()
		.map_err(|_| status(method, path.to_string(), 400))
}

impl ProductsApi for MemoryProductsApi {
	fn list_all(&self) -> Result<Vec<Product>, ApiError> {
		let state = self.begin("GET", "/products".into())?;
		Ok(state.products.clone())
	}

	fn get_by_id(&self, id: &str) -> Result<Option<Product>, ApiError> {
		let path = format!("/products/{id}");
		let state = self.begin("GET", path.clone())?;
		let id = parse_id("GET", &path, id)?;
		Ok(state.products.iter().find(|product| product.id == id).cloned())
	}

	fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ApiError> {
		let path = format!("/products/search?name={name}");
		let state = self.begin("GET", path.clone())?;
		let needle = name.trim().to_lowercase();
		if needle.is_empty() {
			return Err(status("GET", path, 400));
		}
		Ok(state
			.products
			.iter()
			.filter(|product| product.name.to_lowercase().contains(&needle))
			.cloned()
			.collect())
	}

	fn list_ordered_by_quantity(&self) -> Result<Vec<Product>, ApiError> {
		let state = self.begin("GET", "/products/ordered-by-quantity".into())?;
		let mut products = state.products.clone();
		products.sort_by_key(|product| product.quantity);
		Ok(products)
	}

	fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
		let mut state = self.begin("POST", "/products".into())?;
		if product.name.trim().is_empty() {
			return Err(status("POST", "/products".into(), 400));
		}
		state.next_id += 1;
		let created = Product {
			id: state.next_id,
			name: product.name.clone(),
			price: product.price.unwrap_or_default(),
			quantity: product.quantity.unwrap_or_default(),
		};
		state.products.push(created.clone());
		Ok(created)
	}

	fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, ApiError> {
		let path = format!("/products/{id}");
		let mut state = self.begin("PUT", path.clone())?;
		let id = parse_id("PUT", &path, id)?;
		if patch
			.name
			.as_deref()
			.is_some_and(|name| name.trim().is_empty())
		{
			return Err(status("PUT", path, 400));
		}

		let Some(product) = state.products.iter_mut().find(|product| product.id == id) else {
			return Err(status("PUT", path, 404));
		};
		if let Some(name) = &patch.name {
			product.name = name.clone();
		}
		if let Some(price) = patch.price {
			product.price = price.unwrap_or_default();
		}
		if let Some(quantity) = patch.quantity {
			product.quantity = quantity.unwrap_or_default();
		}
		Ok(product.clone())
	}

	fn delete(&self, id: &str) -> Result<(), ApiError> {
		let path = format!("/products/{id}");
		let mut state = self.begin("DELETE", path.clone())?;
		let id = parse_id("DELETE", &path, id)?;
		let before = state.products.len();
		state.products.retain(|product| product.id != id);
		if state.products.len() == before {
			return Err(status("DELETE", path, 404));
		}
		Ok(())
	}
}
