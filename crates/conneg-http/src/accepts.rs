//! Parsed negotiation headers of a single request

use conneg_core::{
	PreferenceList, negotiate_charset, negotiate_content_type, negotiate_encoding,
	negotiate_language, parse_header,
};
use http::HeaderMap;
use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HeaderName};
use serde::Serialize;

/// The negotiable request headers, with the spelling used in `Vary`
pub static NEGOTIABLE_HEADERS: [(&str, HeaderName); 4] = [
	("Accept", ACCEPT),
	("Accept-Language", ACCEPT_LANGUAGE),
	("Accept-Charset", ACCEPT_CHARSET),
	("Accept-Encoding", ACCEPT_ENCODING),
];

/// Reads a header as one string, joining repeated fields with `", "`.
/// Values that are not visible ASCII are skipped.
pub(crate) fn header_value(headers: &HeaderMap, name: &HeaderName) -> String {
	let mut values = Vec::new();
	for value in headers.get_all(name) {
		match value.to_str() {
			Ok(value) => values.push(value.trim()),
			Err(_) => tracing::debug!(header = %name, "skipping non-ASCII header value"),
		}
	}
	values.retain(|value| !value.is_empty());
	values.join(", ")
}

/// Raw and parsed form of one negotiation header
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderPreferences {
	raw: String,
	parsed: PreferenceList,
}

impl HeaderPreferences {
	fn new(raw: String) -> Self {
		let parsed = parse_header(&raw);
		Self { raw, parsed }
	}

	/// Header value as received; empty when the header was absent
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Parsed items, most preferred first
	pub fn parsed(&self) -> &PreferenceList {
		&self.parsed
	}

	/// Whether the request carried a non-empty value
	pub fn is_present(&self) -> bool {
		!self.raw.is_empty()
	}
}

/// Typed view of a request's `Accept*` headers
///
/// Built once per request and handed to handlers explicitly, so handlers
/// receive everything they need to negotiate without reaching back into the
/// request.
///
/// # Examples
///
/// ```
/// use conneg_http::Accepts;
/// use http::HeaderMap;
/// use http::header::{ACCEPT, ACCEPT_LANGUAGE};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, "text/html, application/json;q=0.9".parse().unwrap());
/// headers.insert(ACCEPT_LANGUAGE, "fr-CH, fr;q=0.9, en;q=0.8".parse().unwrap());
///
/// let accepts = Accepts::from_headers(&headers);
/// assert_eq!(accepts.accepted_types(), vec!["text/html", "application/json"]);
/// assert_eq!(accepts.best_language(&["en", "fr"]).as_deref(), Some("fr"));
/// assert_eq!(accepts.present_fields(), vec!["Accept", "Accept-Language"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Accepts {
	accept: HeaderPreferences,
	accept_language: HeaderPreferences,
	accept_charset: HeaderPreferences,
	accept_encoding: HeaderPreferences,
}

impl Accepts {
	/// Parses the negotiation headers out of a header map
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self {
			accept: HeaderPreferences::new(header_value(headers, &ACCEPT)),
			accept_language: HeaderPreferences::new(header_value(headers, &ACCEPT_LANGUAGE)),
			accept_charset: HeaderPreferences::new(header_value(headers, &ACCEPT_CHARSET)),
			accept_encoding: HeaderPreferences::new(header_value(headers, &ACCEPT_ENCODING)),
		}
	}

	/// Parses the negotiation headers of a request
	pub fn from_request<B>(request: &http::Request<B>) -> Self {
		Self::from_headers(request.headers())
	}

	pub fn accept(&self) -> &PreferenceList {
		self.accept.parsed()
	}

	pub fn accept_language(&self) -> &PreferenceList {
		self.accept_language.parsed()
	}

	pub fn accept_charset(&self) -> &PreferenceList {
		self.accept_charset.parsed()
	}

	pub fn accept_encoding(&self) -> &PreferenceList {
		self.accept_encoding.parsed()
	}

	pub fn raw_accept(&self) -> &str {
		self.accept.raw()
	}

	pub fn raw_accept_language(&self) -> &str {
		self.accept_language.raw()
	}

	pub fn raw_accept_charset(&self) -> &str {
		self.accept_charset.raw()
	}

	pub fn raw_accept_encoding(&self) -> &str {
		self.accept_encoding.raw()
	}

	/// Media ranges the client accepts (q > 0), most preferred first
	pub fn accepted_types(&self) -> Vec<&str> {
		self.accept().accepted_values()
	}

	/// Language tags the client accepts (q > 0), most preferred first
	pub fn accepted_languages(&self) -> Vec<&str> {
		self.accept_language().accepted_values()
	}

	/// Charsets the client accepts (q > 0), most preferred first
	pub fn accepted_charsets(&self) -> Vec<&str> {
		self.accept_charset().accepted_values()
	}

	/// Content codings the client accepts (q > 0), most preferred first
	pub fn accepted_encodings(&self) -> Vec<&str> {
		self.accept_encoding().accepted_values()
	}

	/// See [`conneg_core::negotiate_content_type`]
	pub fn best_content_type<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		negotiate_content_type(self.raw_accept(), available)
	}

	/// See [`conneg_core::negotiate_language`]
	pub fn best_language<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		negotiate_language(self.raw_accept_language(), available)
	}

	/// See [`conneg_core::negotiate_charset`]
	pub fn best_charset<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		negotiate_charset(self.raw_accept_charset(), available)
	}

	/// See [`conneg_core::negotiate_encoding`]
	pub fn encodings<S: AsRef<str>>(&self, available: &[S]) -> Vec<String> {
		negotiate_encoding(self.raw_accept_encoding(), available)
	}

	/// `Vary` names of the negotiation headers present on the request
	pub fn present_fields(&self) -> Vec<&'static str> {
		let headers = [
			&self.accept,
			&self.accept_language,
			&self.accept_charset,
			&self.accept_encoding,
		];
		NEGOTIABLE_HEADERS
			.iter()
			.zip(headers)
			.filter(|(_, prefs)| prefs.is_present())
			.map(|((field, _), _)| *field)
			.collect()
	}
}

impl From<&HeaderMap> for Accepts {
	fn from(headers: &HeaderMap) -> Self {
		Self::from_headers(headers)
	}
}
