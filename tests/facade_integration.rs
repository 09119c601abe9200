//! Facade Integration Tests
//!
//! Checks that the default feature set exposes both layers through the
//! `conneg` facade and that they agree with each other.

use conneg::prelude::*;
use http::HeaderMap;
use http::header::{ACCEPT, ACCEPT_CHARSET};
use rstest::rstest;

#[rstest]
fn test_core_and_http_layers_agree() {
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, "text/html;q=0.5, application/json".parse().unwrap());
	headers.insert(ACCEPT_CHARSET, "latin1, *;q=0.1".parse().unwrap());

	let accepts = Accepts::from_headers(&headers);
	let available = ["text/html", "application/json"];

	assert_eq!(
		accepts.best_content_type(&available),
		negotiate_content_type(accepts.raw_accept(), &available)
	);
	assert_eq!(
		accepts.best_charset(&["utf-8", "latin1"]).as_deref(),
		Some("latin1")
	);
}

#[rstest]
fn test_module_reexports() {
	let prefs = conneg::core::parse_header("gzip;q=0.3, br");
	assert_eq!(prefs.accepted_values(), vec!["br", "gzip"]);

	let config = conneg::http::AcceptsConfig::default();
	assert_eq!(config.default_charset, "utf-8");
}
