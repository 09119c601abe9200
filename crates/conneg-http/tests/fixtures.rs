//! Shared helpers for conneg-http integration tests

#![allow(dead_code)]

use http::{HeaderMap, HeaderName, HeaderValue, Request};

/// Builds a header map from `(name, value)` pairs, appending repeated names
pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
	let mut map = HeaderMap::new();
	for (name, value) in pairs {
		map.append(
			HeaderName::from_bytes(name.as_bytes()).unwrap(),
			HeaderValue::from_str(value).unwrap(),
		);
	}
	map
}

/// Builds a bodiless GET request with the given headers
pub fn create_request_with_headers(path: &str, pairs: &[(&str, &str)]) -> Request<()> {
	let mut request = Request::builder().uri(path).body(()).unwrap();
	*request.headers_mut() = header_map(pairs);
	request
}

/// Header sent by a current desktop browser on navigation
pub const BROWSER_ACCEPT: &str =
	"text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
