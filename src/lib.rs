//! # Conneg
//!
//! HTTP content negotiation for Rust web services.
//!
//! This facade re-exports the workspace crates behind feature flags:
//!
//! ## Feature Flags
//!
//! - `core` - Header parsing and option matching ([`conneg_core`])
//! - `http` - Typed request/response integration on top of the `http` crate
//!   ([`conneg_http`])
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```
//! use conneg::prelude::*;
//! use http::HeaderMap;
//! use http::header::ACCEPT;
//!
//! assert_eq!(
//!     negotiate_content_type("text/*", &["application/json", "text/html"]).as_deref(),
//!     Some("text/html")
//! );
//!
//! let strict = StrictNegotiator::new(AcceptsConfig::default(), ["application/json"]).unwrap();
//! let mut headers = HeaderMap::new();
//! headers.insert(ACCEPT, "text/csv".parse().unwrap());
//! assert!(strict.negotiate(&headers).is_err());
//! ```

#[cfg(feature = "core")]
pub use conneg_core as core;

#[cfg(feature = "http")]
pub use conneg_http as http;

#[cfg(feature = "core")]
pub use conneg_core::{
	PreferenceItem, PreferenceList, build_vary_value, get_best_match, matches_media_type,
	negotiate_charset, negotiate_content_type, negotiate_encoding, negotiate_language,
	parse_header,
};

#[cfg(feature = "http")]
pub use conneg_http::{
	Accepts, AcceptsConfig, ConfigError, ContentNegotiator, Negotiated, Negotiation,
	NegotiationError, NegotiationResult, StrictNegotiator,
};

/// Commonly used items
pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::{
		PreferenceItem, PreferenceList, build_vary_value, get_best_match, negotiate_charset,
		negotiate_content_type, negotiate_encoding, negotiate_language, parse_header,
	};

	#[cfg(feature = "http")]
	pub use crate::{
		Accepts, AcceptsConfig, ContentNegotiator, Negotiated, Negotiation, NegotiationError,
		StrictNegotiator,
	};
}
