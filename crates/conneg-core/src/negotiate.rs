//! Per-header negotiation
//!
//! Each header has its own policy for the "nothing matched" case, and the
//! functions are kept separate so those policies stay visible:
//! content types can fail, languages and charsets fall back to the first
//! available option, encodings accumulate into a list.

use crate::header::{PreferenceList, parse_header};
use crate::media_type::{matches_media_type, top_level_type};

fn first<S: AsRef<str>>(options: &[S]) -> Option<String> {
	options.first().map(|option| option.as_ref().to_string())
}

/// Two-pass media range selection shared by content type and best-match
/// negotiation.
fn select_media_type<S: AsRef<str>>(prefs: &PreferenceList, available: &[S]) -> Option<String> {
	for item in prefs.acceptable() {
		if let Some(found) = available
			.iter()
			.map(AsRef::as_ref)
			.find(|candidate| matches_media_type(&item.value, candidate))
		{
			return Some(found.to_string());
		}
	}

	for item in prefs.acceptable() {
		if item.value == "*/*" {
			return first(available);
		}
		if item.value.ends_with("/*") {
			let range_type = top_level_type(&item.value);
			if let Some(found) = available
				.iter()
				.map(AsRef::as_ref)
				.find(|candidate| top_level_type(candidate) == range_type)
			{
				return Some(found.to_string());
			}
		}
	}

	None
}

/// Picks the media type to serve for an `Accept` header
///
/// With no header (or no options) the first option is the default. When the
/// client sent a header and none of the options satisfy it, the result is
/// `None`, which callers typically turn into `406 Not Acceptable`.
///
/// # Examples
///
/// ```
/// use conneg_core::negotiate_content_type;
///
/// let available = ["application/json", "text/html"];
///
/// assert_eq!(negotiate_content_type("text/*", &available).as_deref(), Some("text/html"));
/// assert_eq!(negotiate_content_type("*/*", &available).as_deref(), Some("application/json"));
/// assert_eq!(negotiate_content_type("", &available).as_deref(), Some("application/json"));
/// assert_eq!(negotiate_content_type("application/xml", &available), None);
/// ```
pub fn negotiate_content_type<S: AsRef<str>>(raw: &str, available: &[S]) -> Option<String> {
	if raw.is_empty() || available.is_empty() {
		return first(available);
	}

	let prefs = parse_header(raw);
	let selected = select_media_type(&prefs, available);
	tracing::trace!(accept = raw, selected = ?selected, "content type negotiated");
	selected
}

/// Picks the language to serve for an `Accept-Language` header
///
/// Exact tags win. A regional tag such as `en-GB` also matches an option
/// equal to its primary subtag (`en`) or sharing it (`en-US`). When nothing
/// matches, the first option is returned: language negotiation never fails.
///
/// # Examples
///
/// ```
/// use conneg_core::negotiate_language;
///
/// let available = ["en-US", "en-GB", "es"];
///
/// assert_eq!(negotiate_language("es", &available).as_deref(), Some("es"));
/// assert_eq!(negotiate_language("en-AU", &available).as_deref(), Some("en-US"));
/// assert_eq!(negotiate_language("de", &available).as_deref(), Some("en-US"));
/// ```
pub fn negotiate_language<S: AsRef<str>>(raw: &str, available: &[S]) -> Option<String> {
	if raw.is_empty() || available.is_empty() {
		return first(available);
	}

	let prefs = parse_header(raw);
	for item in prefs.acceptable() {
		if let Some(found) = available.iter().map(AsRef::as_ref).find(|lang| *lang == item.value) {
			return Some(found.to_string());
		}

		if let Some((primary, _)) = item.value.split_once('-') {
			let found = available.iter().map(AsRef::as_ref).find(|lang| {
				*lang == primary
					|| lang
						.strip_prefix(primary)
						.is_some_and(|rest| rest.starts_with('-'))
			});
			if let Some(found) = found {
				return Some(found.to_string());
			}
		}
	}

	tracing::trace!(accept_language = raw, "no language matched, using first available");
	first(available)
}

/// Picks the charset to serve for an `Accept-Charset` header
///
/// Exact names win, `*` selects the first option, and when nothing matches
/// the first option is returned anyway.
///
/// # Examples
///
/// ```
/// use conneg_core::negotiate_charset;
///
/// let available = ["utf-8", "iso-8859-1"];
///
/// assert_eq!(negotiate_charset("iso-8859-1", &available).as_deref(), Some("iso-8859-1"));
/// assert_eq!(negotiate_charset("*", &available).as_deref(), Some("utf-8"));
/// assert_eq!(negotiate_charset("koi8-r", &available).as_deref(), Some("utf-8"));
/// ```
pub fn negotiate_charset<S: AsRef<str>>(raw: &str, available: &[S]) -> Option<String> {
	if raw.is_empty() || available.is_empty() {
		return first(available);
	}

	let prefs = parse_header(raw);
	for item in prefs.acceptable() {
		if let Some(found) = available
			.iter()
			.map(AsRef::as_ref)
			.find(|charset| *charset == item.value)
		{
			return Some(found.to_string());
		}
		if item.value == "*" {
			return first(available);
		}
	}

	first(available)
}

/// Collects the encodings a response may apply for an `Accept-Encoding` header
///
/// Items are visited in preference order. `identity` and `*` expand to every
/// option other than `identity`; other items add the matching option. The
/// result is not deduplicated, so `gzip, *` lists `gzip` twice.
///
/// # Examples
///
/// ```
/// use conneg_core::negotiate_encoding;
///
/// let encodings = negotiate_encoding("gzip, deflate;q=0.9", &["gzip", "deflate", "br"]);
/// assert_eq!(encodings, vec!["gzip", "deflate"]);
///
/// let encodings = negotiate_encoding("identity", &["gzip", "deflate"]);
/// assert_eq!(encodings, vec!["gzip", "deflate"]);
///
/// assert!(negotiate_encoding("", &["gzip"]).is_empty());
/// ```
pub fn negotiate_encoding<S: AsRef<str>>(raw: &str, available: &[S]) -> Vec<String> {
	let mut accepted = Vec::new();
	if raw.is_empty() || available.is_empty() {
		return accepted;
	}

	let prefs = parse_header(raw);
	for item in prefs.acceptable() {
		if item.value == "identity" || item.value == "*" {
			accepted.extend(
				available
					.iter()
					.map(AsRef::as_ref)
					.filter(|encoding| *encoding != "identity")
					.map(str::to_string),
			);
			continue;
		}

		if let Some(found) = available
			.iter()
			.map(AsRef::as_ref)
			.find(|encoding| *encoding == item.value)
		{
			accepted.push(found.to_string());
		}
	}

	accepted
}

/// Picks the best option for an arbitrary `Accept`-style header
///
/// Same matching as [`negotiate_content_type`], except that a header which
/// matches nothing still yields the first option.
///
/// # Examples
///
/// ```
/// use conneg_core::get_best_match;
///
/// let options = ["application/json", "text/html"];
///
/// assert_eq!(get_best_match("text/html", &options).as_deref(), Some("text/html"));
/// assert_eq!(get_best_match("image/png", &options).as_deref(), Some("application/json"));
/// assert_eq!(get_best_match::<&str>("text/html", &[]), None);
/// ```
pub fn get_best_match<S: AsRef<str>>(raw: &str, options: &[S]) -> Option<String> {
	if raw.is_empty() || options.is_empty() {
		return first(options);
	}

	let prefs = parse_header(raw);
	select_media_type(&prefs, options).or_else(|| first(options))
}
