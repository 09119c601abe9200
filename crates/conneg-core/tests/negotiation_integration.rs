//! Negotiation Integration Tests
//!
//! End-to-end checks of the public API against realistic browser and API
//! client headers, covering both the "fallback" and the "no match" branches
//! of each header policy.

use conneg_core::{
	build_vary_value, get_best_match, negotiate_charset, negotiate_content_type,
	negotiate_encoding, negotiate_language, parse_header,
};
use rstest::rstest;

const BROWSER_ACCEPT: &str =
	"text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

// =============================================================================
// Parsing
// =============================================================================

#[rstest]
fn test_parse_browser_accept() {
	let prefs = parse_header(BROWSER_ACCEPT);
	let values: Vec<&str> = prefs.iter().map(|i| i.value.as_str()).collect();

	assert_eq!(
		values,
		vec![
			"application/xhtml+xml",
			"image/avif",
			"image/webp",
			"text/html",
			"application/xml",
			"*/*",
		]
	);
	assert_eq!(prefs[4].quality, 0.9);
	assert_eq!(prefs[5].quality, 0.8);
}

#[rstest]
fn test_parse_is_deterministic() {
	let header = "en-US,en;q=0.9,fr;q=0.8,*;q=0.1";
	assert_eq!(parse_header(header), parse_header(header));
}

#[rstest]
fn test_parse_keeps_parameters() {
	let prefs = parse_header("text/html;level=1;q=0.7, text/html;level=2;q=0.4");

	assert_eq!(prefs[0].parameters.get("level").map(String::as_str), Some("1"));
	assert_eq!(prefs[1].parameters.get("level").map(String::as_str), Some("2"));
}

// =============================================================================
// Content type
// =============================================================================

#[rstest]
fn test_browser_gets_html_over_json() {
	let served = negotiate_content_type(BROWSER_ACCEPT, &["application/json", "text/html"]);
	assert_eq!(served.as_deref(), Some("text/html"));
}

#[rstest]
fn test_browser_wildcard_serves_first_option() {
	let served = negotiate_content_type(BROWSER_ACCEPT, &["application/json", "text/csv"]);
	assert_eq!(served.as_deref(), Some("application/json"));
}

#[rstest]
fn test_content_type_distinguishes_fallback_from_no_match() {
	let available = ["application/json", "text/html"];

	// no header: server default
	assert_eq!(
		negotiate_content_type("", &available).as_deref(),
		Some("application/json")
	);
	// header present, nothing acceptable: explicit no match
	assert_eq!(negotiate_content_type("application/xml", &available), None);
	// everything rejected with q=0 is also no match
	assert_eq!(negotiate_content_type("*/*;q=0", &available), None);
}

#[rstest]
fn test_get_best_match_never_reports_no_match() {
	let options = ["application/json", "text/html"];
	assert_eq!(
		get_best_match("application/xml", &options).as_deref(),
		Some("application/json")
	);
}

// =============================================================================
// Language / charset
// =============================================================================

#[rstest]
#[case("en", &["en-US", "en-GB", "es"], "en-US")]
#[case("de", &["en-US", "fr-FR"], "en-US")]
#[case("fr-CA,fr;q=0.9,en;q=0.5", &["en", "fr"], "fr")]
#[case("pt-BR;q=0.2, es;q=0.9", &["pt", "es-ES"], "pt")]
fn test_language_never_fails(
	#[case] raw: &str,
	#[case] available: &[&str],
	#[case] expected: &str,
) {
	assert_eq!(negotiate_language(raw, available).as_deref(), Some(expected));
}

#[rstest]
fn test_charset_never_fails() {
	assert_eq!(
		negotiate_charset("shift_jis", &["utf-8", "latin1"]).as_deref(),
		Some("utf-8")
	);
	assert_eq!(negotiate_charset("latin1;q=0.1", &["utf-8", "latin1"]).as_deref(), Some("latin1"));
}

// =============================================================================
// Encoding / Vary
// =============================================================================

#[rstest]
fn test_encoding_accumulates() {
	assert_eq!(
		negotiate_encoding("gzip, deflate;q=0.9", &["gzip", "deflate", "br"]),
		vec!["gzip", "deflate"]
	);
	assert_eq!(
		negotiate_encoding("identity", &["gzip", "deflate"]),
		vec!["gzip", "deflate"]
	);
	assert!(negotiate_encoding("gzip", &[] as &[&str]).is_empty());
}

#[rstest]
fn test_vary_merge() {
	assert_eq!(
		build_vary_value(Some("Accept"), &["Accept", "Accept-Language"]),
		"Accept, Accept-Language"
	);
}
