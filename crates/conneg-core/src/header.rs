//! Negotiation header parsing
//!
//! All four `Accept*` headers share one grammar: a comma separated list of
//! values, each optionally followed by `;key=value` parameters, one of which
//! may be the `q` quality weight.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Deref;

/// One clause of a negotiation header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceItem {
	/// Raw token, e.g. `text/html`, `en-US`, `gzip`.
	///
	/// Parameter fragments without an `=` are kept here, so
	/// `text/html;level` parses to the value `text/html;level`.
	pub value: String,
	/// Quality weight, always within `0.0..=1.0`
	pub quality: f32,
	/// Non-`q` parameters, keyed by lower-cased name
	pub parameters: BTreeMap<String, String>,
}

impl PreferenceItem {
	/// Creates an item with the implicit quality of 1.0
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::PreferenceItem;
	///
	/// let item = PreferenceItem::new("text/html");
	/// assert_eq!(item.value, "text/html");
	/// assert_eq!(item.quality, 1.0);
	/// assert!(item.parameters.is_empty());
	/// ```
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			quality: 1.0,
			parameters: BTreeMap::new(),
		}
	}

	/// Sets the quality, clamped into `0.0..=1.0`
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::PreferenceItem;
	///
	/// assert_eq!(PreferenceItem::new("gzip").with_quality(0.5).quality, 0.5);
	/// assert_eq!(PreferenceItem::new("gzip").with_quality(7.0).quality, 1.0);
	/// assert_eq!(PreferenceItem::new("gzip").with_quality(-1.0).quality, 0.0);
	/// ```
	pub fn with_quality(mut self, quality: f32) -> Self {
		self.quality = clamp_quality(quality);
		self
	}

	/// Parses a single comma-free header segment
	///
	/// Returns `None` for blank segments, which appear when a header has
	/// stray commas.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::PreferenceItem;
	///
	/// let item = PreferenceItem::parse("text/html; charset=UTF-8; q=0.8").unwrap();
	/// assert_eq!(item.value, "text/html");
	/// assert_eq!(item.quality, 0.8);
	/// assert_eq!(item.parameters.get("charset").map(String::as_str), Some("UTF-8"));
	///
	/// let folded = PreferenceItem::parse("text/html;level").unwrap();
	/// assert_eq!(folded.value, "text/html;level");
	///
	/// assert!(PreferenceItem::parse("   ").is_none());
	/// ```
	pub fn parse(segment: &str) -> Option<Self> {
		let segment = segment.trim();
		if segment.is_empty() {
			return None;
		}

		let Some((primary, params)) = segment.split_once(';') else {
			return Some(Self::new(segment));
		};

		let mut value = primary.trim().to_string();
		let mut quality = 1.0;
		let mut parameters = BTreeMap::new();

		for param in params.split(';') {
			let param = param.trim();
			match param.split_once('=') {
				Some((key, raw)) => {
					let key = key.trim().to_lowercase();
					let raw = raw.trim();
					if key == "q" {
						quality = parse_quality(raw);
					} else {
						parameters.insert(key, raw.to_string());
					}
				}
				None => {
					value.push(';');
					value.push_str(param);
				}
			}
		}

		Some(Self {
			value,
			quality,
			parameters,
		})
	}

	/// Returns true when the client did not reject this item with `q=0`
	pub fn is_acceptable(&self) -> bool {
		self.quality > 0.0
	}

	/// Number of `/` separators in the value; `*/*` and `text/html` both
	/// count one, a bare `gzip` counts zero.
	pub fn specificity(&self) -> usize {
		self.value.matches('/').count()
	}
}

fn parse_quality(raw: &str) -> f32 {
	match raw.parse::<f32>() {
		Ok(q) if !q.is_nan() => clamp_quality(q),
		_ => {
			tracing::trace!(value = raw, "unparseable quality value, treating as q=0");
			0.0
		}
	}
}

fn clamp_quality(quality: f32) -> f32 {
	if quality.is_nan() {
		0.0
	} else {
		// `+ 0.0` normalises `-0.0`, which `total_cmp` orders below `0.0`
		quality.clamp(0.0, 1.0) + 0.0
	}
}

/// Quality descending, then specificity descending, then longer value first
fn compare_preference(a: &PreferenceItem, b: &PreferenceItem) -> Ordering {
	b.quality
		.total_cmp(&a.quality)
		.then_with(|| b.specificity().cmp(&a.specificity()))
		.then_with(|| b.value.chars().count().cmp(&a.value.chars().count()))
}

/// A parsed negotiation header, ordered from most to least preferred
///
/// The list is built once by [`parse_header`] and never reordered afterwards.
/// Items rejected with `q=0` stay in the list so callers can inspect them;
/// the negotiation functions skip them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PreferenceList {
	items: Vec<PreferenceItem>,
}

impl PreferenceList {
	/// Creates an empty list
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a list from arbitrary items, applying the preference ordering
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::{PreferenceItem, PreferenceList};
	///
	/// let list = PreferenceList::from_items(vec![
	///     PreferenceItem::new("*/*").with_quality(0.1),
	///     PreferenceItem::new("text/html"),
	/// ]);
	/// assert_eq!(list[0].value, "text/html");
	/// ```
	pub fn from_items(mut items: Vec<PreferenceItem>) -> Self {
		// sort_by is stable: equal keys keep header order
		items.sort_by(compare_preference);
		Self { items }
	}

	/// Items whose quality is above zero, in preference order
	pub fn acceptable(&self) -> impl Iterator<Item = &PreferenceItem> {
		self.items.iter().filter(|item| item.is_acceptable())
	}

	/// Values of the acceptable items, in preference order
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::parse_header;
	///
	/// let prefs = parse_header("en;q=0.5, fr, de;q=0");
	/// assert_eq!(prefs.accepted_values(), vec!["fr", "en"]);
	/// ```
	pub fn accepted_values(&self) -> Vec<&str> {
		self.acceptable().map(|item| item.value.as_str()).collect()
	}

	/// Consumes the list, returning the ordered items
	pub fn into_items(self) -> Vec<PreferenceItem> {
		self.items
	}
}

impl Deref for PreferenceList {
	type Target = [PreferenceItem];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}

impl<'a> IntoIterator for &'a PreferenceList {
	type Item = &'a PreferenceItem;
	type IntoIter = std::slice::Iter<'a, PreferenceItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// Parses a negotiation header value into a [`PreferenceList`]
///
/// An empty header yields an empty list. Parsing never fails.
///
/// # Examples
///
/// ```
/// use conneg_core::parse_header;
///
/// let prefs = parse_header("text/html, application/json;q=0.9");
/// assert_eq!(prefs.len(), 2);
/// assert_eq!(prefs[0].value, "text/html");
/// assert_eq!(prefs[0].quality, 1.0);
/// assert_eq!(prefs[1].value, "application/json");
/// assert_eq!(prefs[1].quality, 0.9);
///
/// assert!(parse_header("").is_empty());
/// ```
pub fn parse_header(raw: &str) -> PreferenceList {
	if raw.is_empty() {
		return PreferenceList::empty();
	}
	PreferenceList::from_items(raw.split(',').filter_map(PreferenceItem::parse).collect())
}

/// Parses an `Accept` header value
pub fn parse_accept(raw: &str) -> PreferenceList {
	parse_header(raw)
}

/// Parses an `Accept-Language` header value
pub fn parse_accept_language(raw: &str) -> PreferenceList {
	parse_header(raw)
}

/// Parses an `Accept-Charset` header value
pub fn parse_accept_charset(raw: &str) -> PreferenceList {
	parse_header(raw)
}

/// Parses an `Accept-Encoding` header value
pub fn parse_accept_encoding(raw: &str) -> PreferenceList {
	parse_header(raw)
}
