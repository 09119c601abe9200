//! # Conneg Core
//!
//! Header parsing and option matching for HTTP content negotiation.
//!
//! The crate turns the raw values of the four negotiable request headers
//! (`Accept`, `Accept-Language`, `Accept-Charset`, `Accept-Encoding`) into
//! quality-ordered [`PreferenceList`]s and resolves them against the options a
//! server can actually produce.
//!
//! Every function here is a pure computation over its arguments: nothing
//! blocks, nothing is cached, and malformed input never produces an error.
//! Bad quality values degrade to `q=0`, stray parameter fragments are folded
//! back into the value, and "nothing matched" is reported through the return
//! value according to a per-header policy:
//!
//! | Header            | No header / no options     | Nothing matched          |
//! |-------------------|----------------------------|--------------------------|
//! | `Accept`          | first available, or `None` | `None`                   |
//! | `Accept-Language` | first available, or `None` | first available          |
//! | `Accept-Charset`  | first available, or `None` | first available          |
//! | `Accept-Encoding` | empty list                 | empty list               |
//!
//! ## Example
//!
//! ```
//! use conneg_core::{negotiate_content_type, negotiate_language, parse_header};
//!
//! let prefs = parse_header("text/html, application/json;q=0.9");
//! assert_eq!(prefs.len(), 2);
//! assert_eq!(prefs[0].value, "text/html");
//!
//! let served = negotiate_content_type("text/*", &["application/json", "text/html"]);
//! assert_eq!(served.as_deref(), Some("text/html"));
//!
//! // Language negotiation never fails, it degrades to the first option.
//! let lang = negotiate_language("de", &["en-US", "fr-FR"]);
//! assert_eq!(lang.as_deref(), Some("en-US"));
//! ```

pub mod header;
pub mod media_type;
pub mod negotiate;
pub mod vary;

pub use header::{
	PreferenceItem, PreferenceList, parse_accept, parse_accept_charset, parse_accept_encoding,
	parse_accept_language, parse_header,
};
pub use media_type::matches_media_type;
pub use negotiate::{
	get_best_match, negotiate_charset, negotiate_content_type, negotiate_encoding,
	negotiate_language,
};
pub use vary::build_vary_value;
