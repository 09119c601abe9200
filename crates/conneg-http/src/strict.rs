//! Negotiation that rejects unacceptable requests

use crate::accepts::header_value;
use crate::config::AcceptsConfig;
use crate::error::{NegotiationError, NegotiationResult};
use crate::negotiator::ContentNegotiator;
use conneg_core::negotiate_content_type;
use http::HeaderMap;
use http::header::ACCEPT;
use serde::Serialize;

/// Outcome of a successful strict negotiation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Negotiated {
	pub content_type: String,
	pub language: String,
}

/// Negotiator that answers `406 Not Acceptable` instead of silently falling
/// back when the client's `Accept` header excludes every served type
///
/// # Examples
///
/// ```
/// use conneg_http::{AcceptsConfig, StrictNegotiator};
/// use http::{HeaderMap, StatusCode};
/// use http::header::ACCEPT;
///
/// let negotiator = StrictNegotiator::new(
///     AcceptsConfig::default(),
///     ["application/json", "text/html"],
/// ).unwrap();
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, "text/html".parse().unwrap());
/// assert_eq!(negotiator.negotiate(&headers).unwrap().content_type, "text/html");
///
/// headers.insert(ACCEPT, "application/xml".parse().unwrap());
/// let err = negotiator.negotiate(&headers).unwrap_err();
/// assert_eq!(err.status(), StatusCode::NOT_ACCEPTABLE);
/// ```
#[derive(Debug, Clone)]
pub struct StrictNegotiator {
	negotiator: ContentNegotiator,
	available_types: Vec<String>,
	available_languages: Vec<String>,
}

impl StrictNegotiator {
	/// Creates a strict negotiator serving `available_types`, with `en` as
	/// the only language
	pub fn new<I, S>(config: AcceptsConfig, available_types: I) -> NegotiationResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		config.validate()?;
		Ok(Self {
			negotiator: ContentNegotiator::new(config),
			available_types: available_types.into_iter().map(Into::into).collect(),
			available_languages: vec!["en".to_string()],
		})
	}

	/// Replaces the served languages
	pub fn with_languages<I, S>(mut self, languages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.available_languages = languages.into_iter().map(Into::into).collect();
		self
	}

	pub fn available_types(&self) -> &[String] {
		&self.available_types
	}

	pub fn available_languages(&self) -> &[String] {
		&self.available_languages
	}

	/// The wrapped negotiator, for the `Vary`/`Content-Type` response hooks
	pub fn negotiator(&self) -> &ContentNegotiator {
		&self.negotiator
	}

	/// Picks the content type and language for a request
	///
	/// Without an `Accept` header the configured default content type is
	/// used even if it is not among the served types; only an explicit
	/// header that rules out every served type is rejected.
	///
	/// A served default content type does not turn an explicit mismatch
	/// into a success, unlike negotiators that fall back before rejecting.
	pub fn negotiate(&self, headers: &HeaderMap) -> NegotiationResult<Negotiated> {
		let config = self.negotiator.config();
		let accept = header_value(headers, &ACCEPT);

		let content_type = if accept.is_empty() {
			config.default_content_type.clone()
		} else {
			match negotiate_content_type(&accept, &self.available_types) {
				Some(content_type) => content_type,
				None => {
					tracing::debug!(
						accept = %accept,
						available = ?self.available_types,
						"rejecting request with 406"
					);
					return Err(NegotiationError::NotAcceptable {
						available_types: self.available_types.clone(),
					});
				}
			}
		};

		let language = self.negotiator.negotiate_language(
			headers,
			&self.available_languages,
			Some(&config.default_language),
		);

		Ok(Negotiated {
			content_type,
			language,
		})
	}
}
