//! # Conneg HTTP
//!
//! Content negotiation for services built on the [`http`] crate's types.
//!
//! The crate wraps [`conneg_core`] with the per-request plumbing a server
//! needs:
//!
//! - [`Accepts`]: the parsed `Accept*` headers of one request, passed to
//!   handlers as an explicit value
//! - [`ContentNegotiator`]: request and response hooks that keep `Vary`
//!   correct and fill a default `Content-Type`
//! - [`StrictNegotiator`]: answers `406 Not Acceptable` when the client's
//!   `Accept` header rules out everything on offer
//! - [`AcceptsConfig`]: defaults and switches, loadable from TOML
//!
//! ## Example
//!
//! ```
//! use conneg_http::{AcceptsConfig, ContentNegotiator};
//! use http::{HeaderMap, HeaderValue};
//! use http::header::{ACCEPT, ACCEPT_LANGUAGE, VARY};
//!
//! let negotiator = ContentNegotiator::new(AcceptsConfig::default());
//!
//! let mut request = HeaderMap::new();
//! request.insert(ACCEPT, HeaderValue::from_static("text/html;q=0.9, application/json"));
//! request.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ja, en;q=0.5"));
//!
//! let negotiation = negotiator.process_request(&request);
//! let accepts = negotiation.accepts().unwrap();
//! assert_eq!(accepts.best_content_type(&["text/html", "application/json"]).as_deref(), Some("application/json"));
//! assert_eq!(accepts.best_language(&["en", "ja"]).as_deref(), Some("ja"));
//!
//! let mut response = HeaderMap::new();
//! response.insert(VARY, HeaderValue::from_static("Cookie"));
//! negotiator.process_response(&negotiation, &request, &mut response);
//! assert_eq!(response.get(VARY).unwrap(), "Cookie, Accept, Accept-Language");
//! ```

pub mod accepts;
pub mod config;
pub mod error;
pub mod negotiator;
pub mod strict;

pub use accepts::{Accepts, HeaderPreferences, NEGOTIABLE_HEADERS};
pub use config::AcceptsConfig;
pub use error::{ConfigError, NegotiationError, NegotiationResult};
pub use negotiator::{ContentNegotiator, Negotiation};
pub use strict::{Negotiated, StrictNegotiator};
