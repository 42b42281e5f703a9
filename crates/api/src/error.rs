use thiserror::Error;

/// Failure talking to the inventory backend.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("invalid backend url '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{method} {url} returned HTTP {status}")]
	Status {
		method: &'static str,
		url: String,
		status: u16,
	},
	#[error("failed to decode response from {url}: {source}")]
	Decode {
		url: String,
		#[source]
		source: reqwest::Error,
	},
}

impl ApiError {
	/// HTTP status reported by the backend, if the request got that far.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}
