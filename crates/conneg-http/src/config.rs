//! Negotiation settings

use crate::error::ConfigError;
use http::HeaderValue;
use serde::{Deserialize, Serialize};

fn default_content_type() -> String {
	"application/json".to_string()
}

fn default_language() -> String {
	"en".to_string()
}

fn default_charset() -> String {
	"utf-8".to_string()
}

fn default_true() -> bool {
	true
}

/// Settings shared by [`ContentNegotiator`](crate::ContentNegotiator) and
/// [`StrictNegotiator`](crate::StrictNegotiator)
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```
/// use conneg_http::AcceptsConfig;
///
/// let config = AcceptsConfig::from_toml_str(r#"
///     default_language = "ja"
///     set_vary_header = false
/// "#).unwrap();
///
/// assert_eq!(config.default_language, "ja");
/// assert_eq!(config.default_content_type, "application/json");
/// assert!(!config.set_vary_header);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptsConfig {
	/// Content type used when the client expresses no usable preference
	#[serde(default = "default_content_type")]
	pub default_content_type: String,
	/// Language used when the client expresses no usable preference
	#[serde(default = "default_language")]
	pub default_language: String,
	/// Charset used by [`ContentNegotiator::negotiate_charset`](crate::ContentNegotiator::negotiate_charset)
	/// when the client expresses no usable preference
	#[serde(default = "default_charset")]
	pub default_charset: String,
	/// Add the negotiable headers a request carried to the response `Vary`
	#[serde(default = "default_true")]
	pub set_vary_header: bool,
	/// Keep the parsed [`Accepts`](crate::Accepts) in the per-request result
	#[serde(default = "default_true")]
	pub store_accepts_info: bool,
}

impl Default for AcceptsConfig {
	fn default() -> Self {
		Self {
			default_content_type: default_content_type(),
			default_language: default_language(),
			default_charset: default_charset(),
			set_vary_header: true,
			store_accepts_info: true,
		}
	}
}

impl AcceptsConfig {
	/// Creates the default configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads and validates a configuration from TOML
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn with_default_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.default_content_type = content_type.into();
		self
	}

	pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
		self.default_language = language.into();
		self
	}

	pub fn with_default_charset(mut self, charset: impl Into<String>) -> Self {
		self.default_charset = charset.into();
		self
	}

	pub fn with_vary_header(mut self, enabled: bool) -> Self {
		self.set_vary_header = enabled;
		self
	}

	pub fn with_accepts_info(mut self, enabled: bool) -> Self {
		self.store_accepts_info = enabled;
		self
	}

	/// Checks that every default is non-empty and the content type can be
	/// written as a header value
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::AcceptsConfig;
	///
	/// assert!(AcceptsConfig::default().validate().is_ok());
	/// assert!(AcceptsConfig::default().with_default_charset("").validate().is_err());
	/// ```
	pub fn validate(&self) -> Result<(), ConfigError> {
		let fields = [
			("default_content_type", &self.default_content_type),
			("default_language", &self.default_language),
			("default_charset", &self.default_charset),
		];
		for (field, value) in fields {
			if value.trim().is_empty() {
				return Err(ConfigError::Empty(field));
			}
		}

		if HeaderValue::from_str(&self.default_content_type).is_err() {
			return Err(ConfigError::InvalidHeaderValue {
				field: "default_content_type",
				value: self.default_content_type.clone(),
			});
		}

		Ok(())
	}
}
