//! Request/response negotiation hooks
//!
//! [`ContentNegotiator`] is split into a request half, which parses the
//! negotiation headers, and a response half, which writes `Vary` and a default
//! `Content-Type`. The state between the two lives in a [`Negotiation`]
//! value owned by the request, never in the negotiator.

use crate::accepts::{Accepts, header_value};
use crate::config::AcceptsConfig;
use conneg_core::build_vary_value;
use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_LANGUAGE, CONTENT_TYPE, VARY};
use http::{HeaderMap, HeaderValue};

/// Per-request output of [`ContentNegotiator::process_request`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Negotiation {
	accepts: Option<Accepts>,
	vary: Vec<&'static str>,
}

impl Negotiation {
	/// Parsed headers, when the negotiator is configured to keep them
	pub fn accepts(&self) -> Option<&Accepts> {
		self.accepts.as_ref()
	}

	/// Takes ownership of the parsed headers
	pub fn into_accepts(self) -> Option<Accepts> {
		self.accepts
	}

	/// Fields that [`ContentNegotiator::process_response`] adds to `Vary`
	pub fn vary_fields(&self) -> &[&'static str] {
		&self.vary
	}
}

/// Content negotiation with configured fallbacks
///
/// Immutable once built; share it across request tasks behind an `Arc`.
///
/// # Examples
///
/// ```
/// use conneg_http::{AcceptsConfig, ContentNegotiator};
/// use http::HeaderMap;
/// use http::header::{ACCEPT, CONTENT_TYPE, VARY};
///
/// let negotiator = ContentNegotiator::new(AcceptsConfig::default());
///
/// let mut request = HeaderMap::new();
/// request.insert(ACCEPT, "application/*".parse().unwrap());
///
/// let negotiation = negotiator.process_request(&request);
/// let accepts = negotiation.accepts().unwrap();
/// assert_eq!(accepts.accepted_types(), vec!["application/*"]);
///
/// let mut response = HeaderMap::new();
/// negotiator.process_response(&negotiation, &request, &mut response);
/// assert_eq!(response.get(VARY).unwrap(), "Accept");
/// assert_eq!(response.get(CONTENT_TYPE).unwrap(), "application/json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentNegotiator {
	config: AcceptsConfig,
}

impl ContentNegotiator {
	pub fn new(config: AcceptsConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &AcceptsConfig {
		&self.config
	}

	/// Parses the request's negotiation headers
	pub fn process_request(&self, headers: &HeaderMap) -> Negotiation {
		let accepts = Accepts::from_headers(headers);
		let vary = if self.config.set_vary_header {
			accepts.present_fields()
		} else {
			Vec::new()
		};

		tracing::debug!(
			accept = accepts.raw_accept(),
			accept_language = accepts.raw_accept_language(),
			vary = ?vary,
			"parsed negotiation headers"
		);

		Negotiation {
			accepts: self.config.store_accepts_info.then_some(accepts),
			vary,
		}
	}

	/// Writes `Vary` and, when the handler left it unset, `Content-Type`
	///
	/// The default content type is written when the request had no `Accept`
	/// header, or when its `Accept` header admits the default. A request that
	/// excludes the default gets no `Content-Type` from here.
	pub fn process_response(
		&self,
		negotiation: &Negotiation,
		request: &HeaderMap,
		response: &mut HeaderMap,
	) {
		if !negotiation.vary.is_empty() {
			self.merge_vary(&negotiation.vary, response);
		}

		if response.contains_key(CONTENT_TYPE) {
			return;
		}

		let default = &self.config.default_content_type;
		let accept = header_value(request, &ACCEPT);
		let content_type = if accept.is_empty() {
			Some(default.clone())
		} else {
			conneg_core::negotiate_content_type(&accept, std::slice::from_ref(default))
		};

		match content_type.as_deref().map(HeaderValue::from_str) {
			Some(Ok(value)) => {
				response.insert(CONTENT_TYPE, value);
			}
			Some(Err(_)) => {
				tracing::warn!(content_type = %default, "default content type is not a valid header value");
			}
			None => {
				tracing::debug!(accept = %accept, "request does not accept the default content type");
			}
		}
	}

	fn merge_vary(&self, fields: &[&'static str], response: &mut HeaderMap) {
		let existing = header_value(response, &VARY);
		let existing = (!existing.is_empty()).then_some(existing.as_str());
		let merged = build_vary_value(existing, fields);

		match HeaderValue::from_str(&merged) {
			Ok(value) => {
				response.insert(VARY, value);
			}
			Err(_) => tracing::warn!(vary = %merged, "merged Vary value is not a valid header value"),
		}
	}

	/// Best content type among `available`, falling back to `default` and
	/// then to the configured default content type
	///
	/// # Examples
	///
	/// ```
	/// use conneg_http::{AcceptsConfig, ContentNegotiator};
	/// use http::HeaderMap;
	/// use http::header::ACCEPT;
	///
	/// let negotiator = ContentNegotiator::new(AcceptsConfig::default());
	/// let mut headers = HeaderMap::new();
	/// headers.insert(ACCEPT, "text/html".parse().unwrap());
	///
	/// let available = ["application/json", "text/html"];
	/// assert_eq!(negotiator.negotiate_content_type(&headers, &available, None), "text/html");
	///
	/// headers.insert(ACCEPT, "image/png".parse().unwrap());
	/// assert_eq!(
	///     negotiator.negotiate_content_type(&headers, &available, Some("text/plain")),
	///     "text/plain"
	/// );
	/// ```
	pub fn negotiate_content_type<S: AsRef<str>>(
		&self,
		headers: &HeaderMap,
		available: &[S],
		default: Option<&str>,
	) -> String {
		let accept = header_value(headers, &ACCEPT);
		if !accept.is_empty()
			&& let Some(content_type) = conneg_core::negotiate_content_type(&accept, available)
		{
			return content_type;
		}
		default.unwrap_or(&self.config.default_content_type).to_string()
	}

	/// Best language among `available`, falling back to `default` and then
	/// to the configured default language
	pub fn negotiate_language<S: AsRef<str>>(
		&self,
		headers: &HeaderMap,
		available: &[S],
		default: Option<&str>,
	) -> String {
		let accept_language = header_value(headers, &ACCEPT_LANGUAGE);
		if !accept_language.is_empty()
			&& let Some(language) = conneg_core::negotiate_language(&accept_language, available)
		{
			return language;
		}
		default.unwrap_or(&self.config.default_language).to_string()
	}

	/// Best charset among `available`, falling back to `default` and then
	/// to the configured default charset
	pub fn negotiate_charset<S: AsRef<str>>(
		&self,
		headers: &HeaderMap,
		available: &[S],
		default: Option<&str>,
	) -> String {
		let accept_charset = header_value(headers, &ACCEPT_CHARSET);
		if !accept_charset.is_empty()
			&& let Some(charset) = conneg_core::negotiate_charset(&accept_charset, available)
		{
			return charset;
		}
		default.unwrap_or(&self.config.default_charset).to_string()
	}
}
