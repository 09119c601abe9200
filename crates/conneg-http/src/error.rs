//! Error types for header-level negotiation.

use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Result type for negotiation operations.
pub type NegotiationResult<T> = Result<T, NegotiationError>;

/// Configuration errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
	/// The TOML source could not be deserialized.
	#[error("invalid accepts configuration: {0}")]
	Toml(#[from] toml::de::Error),

	/// A default value was left empty.
	#[error("`{0}` must not be empty")]
	Empty(&'static str),

	/// A default value cannot be sent as an HTTP header value.
	#[error("`{field}` is not a valid header value: {value:?}")]
	InvalidHeaderValue {
		/// Configuration field name.
		field: &'static str,
		/// Rejected value.
		value: String,
	},
}

/// Negotiation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NegotiationError {
	/// The client's `Accept` header excludes every content type on offer.
	#[error("client does not accept any available content types")]
	NotAcceptable {
		/// Content types the server could have produced.
		available_types: Vec<String>,
	},

	/// The negotiator was built from an invalid configuration.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl NegotiationError {
	/// HTTP status to answer with.
	pub fn status(&self) -> StatusCode {
		match self {
			Self::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
			Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// JSON error body.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::NegotiationError;
	///
	/// let err = NegotiationError::NotAcceptable {
	///     available_types: vec!["application/json".to_string()],
	/// };
	/// let body = err.to_json();
	/// assert_eq!(body["error"], "Not Acceptable");
	/// assert_eq!(body["available_types"][0], "application/json");
	/// ```
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::NotAcceptable { available_types } => json!({
				"error": "Not Acceptable",
				"message": self.to_string(),
				"available_types": available_types,
			}),
			Self::Config(_) => json!({
				"error": "Internal Server Error",
				"message": self.to_string(),
			}),
		}
	}

	/// Converts the error into a JSON response.
	pub fn into_response(self) -> http::Response<String> {
		let mut response = http::Response::new(self.to_json().to_string());
		*response.status_mut() = self.status();
		response.headers_mut().insert(
			http::header::CONTENT_TYPE,
			http::HeaderValue::from_static("application/json"),
		);
		response
	}
}
