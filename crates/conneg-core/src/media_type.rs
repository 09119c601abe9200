//! Media range matching

/// Checks whether a media range from an `Accept` header covers a candidate
///
/// Only three forms match: identical strings, `*/*`, and `type/*` against a
/// candidate of that type. Parameters are not interpreted, so
/// `application/json;version=2` only matches itself.
///
/// # Examples
///
/// ```
/// use conneg_core::matches_media_type;
///
/// assert!(matches_media_type("text/html", "text/html"));
/// assert!(matches_media_type("*/*", "application/json"));
/// assert!(matches_media_type("text/*", "text/plain"));
/// assert!(!matches_media_type("text/*", "application/json"));
/// assert!(!matches_media_type("application/json", "application/json;version=2"));
/// ```
pub fn matches_media_type(pattern: &str, candidate: &str) -> bool {
	if pattern == candidate || pattern == "*/*" {
		return true;
	}

	match pattern.strip_suffix("/*") {
		Some(range_type) => candidate
			.strip_prefix(range_type)
			.is_some_and(|rest| rest.starts_with('/')),
		None => false,
	}
}

/// The part of a media type before the first `/`
pub(crate) fn top_level_type(media_type: &str) -> Option<&str> {
	media_type.split_once('/').map(|(top, _)| top)
}
