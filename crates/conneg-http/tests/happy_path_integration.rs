//! Happy Path Integration Tests
//!
//! Drives the negotiators the way a server would: one shared negotiator,
//! a request hook, a handler that consumes the typed `Accepts`, and a
//! response hook.

mod fixtures;

use conneg_http::{AcceptsConfig, ContentNegotiator, NegotiationError, StrictNegotiator};
use fixtures::{BROWSER_ACCEPT, create_request_with_headers, header_map};
use http::header::{CONTENT_TYPE, VARY};
use http::{HeaderMap, StatusCode};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

const SERVED_TYPES: [&str; 2] = ["application/json", "text/html"];

/// A handler that renders in whatever format the client prefers
fn render(accepts: &conneg_http::Accepts, response: &mut HeaderMap) -> String {
	let content_type = accepts
		.best_content_type(&SERVED_TYPES)
		.unwrap_or_else(|| SERVED_TYPES[0].to_string());
	response.insert(CONTENT_TYPE, content_type.parse().unwrap());
	content_type
}

#[rstest]
fn test_browser_request_round_trip() {
	let negotiator = ContentNegotiator::new(AcceptsConfig::default());
	let request = create_request_with_headers(
		"/articles/1",
		&[
			("Accept", BROWSER_ACCEPT),
			("Accept-Language", "en-GB,en;q=0.9"),
			("Accept-Encoding", "gzip, deflate, br"),
		],
	);

	let negotiation = negotiator.process_request(request.headers());
	let accepts = negotiation.accepts().unwrap();
	let mut response = HeaderMap::new();
	let rendered = render(accepts, &mut response);
	negotiator.process_response(&negotiation, request.headers(), &mut response);

	assert_eq!(rendered, "text/html");
	assert_eq!(response.get(CONTENT_TYPE).unwrap(), "text/html");
	assert_eq!(
		response.get(VARY).unwrap(),
		"Accept, Accept-Language, Accept-Encoding"
	);
	assert_eq!(
		accepts.encodings(&["br", "gzip", "identity"]),
		vec!["gzip", "br"]
	);
}

#[rstest]
fn test_api_client_without_negotiation_headers() {
	let negotiator = ContentNegotiator::new(AcceptsConfig::default());
	let request = create_request_with_headers("/api/items", &[]);

	let negotiation = negotiator.process_request(request.headers());
	let mut response = HeaderMap::new();
	negotiator.process_response(&negotiation, request.headers(), &mut response);

	assert_eq!(response.get(CONTENT_TYPE).unwrap(), "application/json");
	assert!(response.get(VARY).is_none());
}

#[rstest]
fn test_config_from_toml_drives_defaults() {
	let config = AcceptsConfig::from_toml_str(
		r#"
		default_content_type = "text/plain"
		default_language = "de"
		"#,
	)
	.unwrap();
	let negotiator = ContentNegotiator::new(config);
	let request = header_map(&[("Accept-Language", "it")]);

	let negotiation = negotiator.process_request(&request);
	let mut response = HeaderMap::new();
	negotiator.process_response(&negotiation, &request, &mut response);

	assert_eq!(response.get(CONTENT_TYPE).unwrap(), "text/plain");
	assert_eq!(
		negotiator.negotiate_language(&request, &[] as &[&str], None),
		"de"
	);
	assert_eq!(negotiator.negotiate_language(&request, &["fr", "it"], None), "it");
}

#[rstest]
fn test_strict_negotiator_rejects_with_json_body() {
	let strict = StrictNegotiator::new(AcceptsConfig::default(), SERVED_TYPES).unwrap();
	let request = header_map(&[("Accept", "application/xml, text/csv;q=0.5")]);

	let response = match strict.negotiate(&request) {
		Err(err @ NegotiationError::NotAcceptable { .. }) => err.into_response(),
		other => panic!("expected NotAcceptable, got {other:?}"),
	};

	assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
	let body: serde_json::Value = serde_json::from_str(response.body()).unwrap();
	assert_eq!(body["available_types"][1], "text/html");
}

#[rstest]
fn test_negotiator_is_shared_across_threads() {
	let negotiator = Arc::new(ContentNegotiator::new(AcceptsConfig::default()));
	let headers = [
		("Accept", "text/html", "Accept"),
		("Accept-Language", "fr", "Accept-Language"),
		("Accept-Charset", "utf-8", "Accept-Charset"),
		("Accept-Encoding", "br", "Accept-Encoding"),
	];

	let handles: Vec<_> = headers
		.into_iter()
		.map(|(name, value, expected_vary)| {
			let negotiator = Arc::clone(&negotiator);
			thread::spawn(move || {
				for _ in 0..100 {
					let request = header_map(&[(name, value)]);
					let negotiation = negotiator.process_request(&request);
					let mut response = HeaderMap::new();
					negotiator.process_response(&negotiation, &request, &mut response);
					assert_eq!(response.get(VARY).unwrap(), expected_vary);
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().unwrap();
	}
}
