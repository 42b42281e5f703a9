//! Product data types and backend access for `stockr`.
//!
//! The crate defines the wire representation of inventory records, the
//! [`ProductsApi`] contract the terminal UI talks to, and a blocking HTTP
//! implementation of that contract. An in-memory backend is available for
//! tests behind the `testing` feature.

mod client;
pub mod coerce;
mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod model;

pub use client::{BackendConfig, DEFAULT_BASE_URL, HttpProductsApi, ProductsApi};
pub use error::ApiError;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryProductsApi;
pub use model::{NewProduct, Product, ProductField, ProductPatch};
