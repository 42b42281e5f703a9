use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::model::{NewProduct, Product, ProductPatch};

/// Backend operations the terminal UI relies on.
///
/// Every call blocks until the backend answers. Implementations must be safe
/// to move onto the request worker thread.
pub trait ProductsApi: Send + Sync {
	fn list_all(&self) -> Result<Vec<Product>, ApiError>;

	/// Fetch one product. `Ok(None)` means the backend answered 404.
	fn get_by_id(&self, id: &str) -> Result<Option<Product>, ApiError>;

	/// Name matching rules (case, substring) belong to the backend.
	fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ApiError>;

	fn list_ordered_by_quantity(&self) -> Result<Vec<Product>, ApiError>;

	fn create(&self, product: &NewProduct) -> Result<Product, ApiError>;

	fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, ApiError>;

	fn delete(&self, id: &str) -> Result<(), ApiError>;
}

impl<T: ProductsApi + ?Sized> ProductsApi for Arc<T> {
	fn list_all(&self) -> Result<Vec<Product>, ApiError> {
		(**self).list_all()
	}

	fn get_by_id(&self, id: &str) -> Result<Option<Product>, ApiError> {
		(**self).get_by_id(id)
	}

	fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ApiError> {
		(**self).search_by_name(name)
	}

	fn list_ordered_by_quantity(&self) -> Result<Vec<Product>, ApiError> {
		(**self).list_ordered_by_quantity()
	}

	fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
		(**self).create(product)
	}

	fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, ApiError> {
		(**self).update(id, patch)
	}

	fn delete(&self, id: &str) -> Result<(), ApiError> {
		(**self).delete(id)
	}
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Location and route layout of the REST backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
	pub base_url: String,
	pub products_path: String,
	pub search_path: String,
	pub ordered_path: String,
	/// Query parameter carrying the name filter.
	pub search_param: String,
	/// `None` waits for the backend indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			products_path: "/products".to_string(),
			search_path: "/products/search".to_string(),
			ordered_path: "/products/ordered-by-quantity".to_string(),
			search_param: "name".to_string(),
			timeout: None,
		}
	}
}

impl BackendConfig {
	#[must_use]
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Self::default()
		}
	}

	fn url_for(&self, path: &str) -> String {
		let base = self.base_url.trim_end_matches('/');
		let path = path.trim_start_matches('/');
		format!("{base}/{path}")
	}

	pub(crate) fn products_url(&self) -> String {
		self.url_for(&self.products_path)
	}

	pub(crate) fn product_url(&self, id: &str) -> String {
		format!("{}/{}", self.products_url().trim_end_matches('/'), id.trim())
	}

	pub(crate) fn search_url(&self) -> String {
		self.url_for(&self.search_path)
	}

	pub(crate) fn ordered_url(&self) -> String {
		self.url_for(&self.ordered_path)
	}
}

/// [`ProductsApi`] over blocking HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
	http: Client,
	config: BackendConfig,
}

impl HttpProductsApi {
	pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
		let parsed = reqwest::Url::parse(&config.base_url).map_err(|err| ApiError::InvalidUrl {
			url: config.base_url.clone(),
			reason: err.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ApiError::InvalidUrl {
				url: config.base_url.clone(),
				reason: format!("unsupported scheme '{}'", parsed.scheme()),
			});
		}

		let http = Client::builder()
			.timeout(config.timeout)
			.build()
			.map_err(|source| ApiError::Transport {
				url: config.base_url.clone(),
				source,
			})?;

		Ok(Self { http, config })
	}

	fn execute(
		&self,
		request: RequestBuilder,
		method: &'static str,
		url: &str,
	) -> Result<Response, ApiError> {
		debug!(method, url, "sending backend request");
		let response = request.send().map_err(|source| ApiError::Transport {
			url: url.to_string(),
			source,
		})?;

		let status = response.status();
		if !status.is_success() {
			debug!(method, url, status = status.as_u16(), "backend rejected request");
			return Err(ApiError::Status {
				method,
				url: url.to_string(),
				status: status.as_u16(),
			});
		}
		Ok(response)
	}

	fn fetch<T: DeserializeOwned>(
		&self,
		request: RequestBuilder,
		method: &'static str,
		url: &str,
	) -> Result<T, ApiError> {
		let response = self.execute(request, method, url)?;
		response.json().map_err(|source| {
			warn!(method, url, "backend response body did not decode");
			ApiError::Decode {
				url: url.to_string(),
				source,
			}
		})
	}

	fn get_list(&self, url: &str) -> Result<Vec<Product>, ApiError> {
		self.fetch(self.http.get(url), "GET", url)
	}
}

impl ProductsApi for HttpProductsApi {
	fn list_all(&self) -> Result<Vec<Product>, ApiError> {
		self.get_list(&self.config.products_url())
	}

	fn get_by_id(&self, id: &str) -> Result<Option<Product>, ApiError> {
		let url = self.config.product_url(id);
		match self.fetch(self.http.get(&url), "GET", &url) {
			Ok(product) => Ok(Some(product)),
			Err(err) if err.is_not_found() => Ok(None),
			Err(err) => Err(err),
		}
	}

	fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ApiError> {
		let url = self.config.search_url();
		let request = self
			.http
			.get(&url)
			.query(&[(self.config.search_param.as_str(), name.trim())]);
		self.fetch(request, "GET", &url)
	}

	fn list_ordered_by_quantity(&self) -> Result<Vec<Product>, ApiError> {
		self.get_list(&self.config.ordered_url())
	}

	fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
		let url = self.config.products_url();
		self.fetch(self.http.post(&url).json(product), "POST", &url)
	}

	fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, ApiError> {
		let url = self.config.product_url(id);
		self.fetch(self.http.put(&url).json(patch), "PUT", &url)
	}

	fn delete(&self, id: &str) -> Result<(), ApiError> {
		let url = self.config.product_url(id);
		self.execute(self.http.delete(&url), "DELETE", &url)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Read, Write};
	use std::net::TcpListener;
	use std::sync::mpsc;
	use std::thread;

	use super::*;

	/// Request line and body captured by the throwaway server.
	struct Captured {
		request_line: String,
		body: String,
	}

	/// Serve exactly one HTTP response and report what the client sent.
	fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let (tx, rx) = mpsc::channel();

		thread::spawn(move || {
			let (stream, _) = listener.accept().unwrap();
			let mut reader = BufReader::new(stream.try_clone().unwrap());

			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();

			let mut content_length = 0usize;
			loop {
				let mut header = String::new();
				reader.read_line(&mut header).unwrap();
				let header = header.trim_end();
				if header.is_empty() {
					break;
				}
				if let Some((name, value)) = header.split_once(':')
					&& name.eq_ignore_ascii_case("content-length")
				{
					content_length = value.trim().parse().unwrap();
				}
			}

			let mut body_bytes = vec![0; content_length];
			reader.read_exact(&mut body_bytes).unwrap();

			let mut stream = stream;
			let response = format!(
				"HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).unwrap();
			stream.flush().unwrap();

			tx.send(Captured {
				request_line: request_line.trim_end().to_string(),
				body: String::from_utf8(body_bytes).unwrap(),
			})
			.unwrap();
		});

		(format!("http://{addr}"), rx)
	}

	fn api(base_url: String) -> HttpProductsApi {
		HttpProductsApi::new(BackendConfig::with_base_url(base_url)).unwrap()
	}

	#[test]
	fn urls_join_base_and_routes() {
		let config = BackendConfig::with_base_url("http://inventory.local:9000/");
		assert_eq!(config.products_url(), "http://inventory.local:9000/products");
		assert_eq!(config.product_url("7"), "http://inventory.local:9000/products/7");
		assert_eq!(config.search_url(), "http://inventory.local:9000/products/search");
		assert_eq!(
			config.ordered_url(),
			"http://inventory.local:9000/products/ordered-by-quantity"
		);
	}

	#[test]
	fn rejects_non_http_base_urls() {
		let err = HttpProductsApi::new(BackendConfig::with_base_url("ftp://example.com")).unwrap_err();
		assert!(matches!(err, ApiError::InvalidUrl { .. }));

		let err = HttpProductsApi::new(BackendConfig::with_base_url("not a url")).unwrap_err();
		assert!(matches!(err, ApiError::InvalidUrl { .. }));
	}

	#[test]
	fn list_all_decodes_products() {
		let (base, rx) = serve_once("200 OK", r#"[{"id":1,"name":"Widget","price":9.99,"quantity":5}]"#);
		let products = api(base).list_all().unwrap();
		assert_eq!(products.len(), 1);
		assert_eq!(products[0].name, "Widget");
		assert_eq!(rx.recv().unwrap().request_line, "GET /products HTTP/1.1");
	}

	#[test]
	fn get_by_id_maps_404_to_none() {
		let (base, rx) = serve_once("404 Not Found", "");
		assert_eq!(api(base).get_by_id("42").unwrap(), None);
		assert_eq!(rx.recv().unwrap().request_line, "GET /products/42 HTTP/1.1");
	}

	#[test]
	fn get_by_id_surfaces_other_failures() {
		let (base, _rx) = serve_once("500 Internal Server Error", "");
		let err = api(base).get_by_id("1").unwrap_err();
		assert_eq!(err.status(), Some(500));
	}

	#[test]
	fn search_encodes_the_configured_parameter() {
		let (base, rx) = serve_once("200 OK", "[]");
		let products = api(base).search_by_name("blue widget").unwrap();
		assert!(products.is_empty());
		assert_eq!(
			rx.recv().unwrap().request_line,
			"GET /products/search?name=blue+widget HTTP/1.1"
		);
	}

	#[test]
	fn update_sends_partial_body() {
		let (base, rx) = serve_once("200 OK", r#"{"id":1,"name":"Widget","price":12.5,"quantity":5}"#);
		let patch = ProductPatch {
			price: Some(Some(12.5)),
			..ProductPatch::default()
		};
		let updated = api(base).update("1", &patch).unwrap();
		assert_eq!(updated.price, 12.5);

		let captured = rx.recv().unwrap();
		assert_eq!(captured.request_line, "PUT /products/1 HTTP/1.1");
		assert_eq!(captured.body, r#"{"price":12.5}"#);
	}

	#[test]
	fn delete_ignores_the_response_body() {
		let (base, rx) = serve_once("200 OK", "\"deleted\"");
		api(base).delete("3").unwrap();
		assert_eq!(rx.recv().unwrap().request_line, "DELETE /products/3 HTTP/1.1");
	}

	#[test]
	fn malformed_bodies_are_decode_errors() {
		let (base, _rx) = serve_once("200 OK", "{not json");
		let err = api(base).list_all().unwrap_err();
		assert!(matches!(err, ApiError::Decode { .. }));
	}

	#[test]
	fn unreachable_backend_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let err = api(format!("http://{addr}")).list_all().unwrap_err();
		assert!(matches!(err, ApiError::Transport { .. }));
	}
}
