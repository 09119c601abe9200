//! `Vary` header merging

/// Merges field names into an existing `Vary` header value
///
/// Existing fields keep their order, and new fields are appended in the
/// given order unless already present. Blank entries are dropped from both. The
/// comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use conneg_core::build_vary_value;
///
/// assert_eq!(
///     build_vary_value(Some("Accept"), &["Accept", "Accept-Language"]),
///     "Accept, Accept-Language"
/// );
/// assert_eq!(build_vary_value(None, &["Accept-Encoding"]), "Accept-Encoding");
/// assert_eq!(build_vary_value(Some("Cookie"), &[] as &[&str]), "Cookie");
/// ```
pub fn build_vary_value<S: AsRef<str>>(existing: Option<&str>, fields: &[S]) -> String {
	let mut merged: Vec<&str> = existing
		.unwrap_or_default()
		.split(',')
		.map(str::trim)
		.filter(|field| !field.is_empty())
		.collect();

	for field in fields.iter().map(|field| field.as_ref().trim()) {
		if !field.is_empty() && !merged.contains(&field) {
			merged.push(field);
		}
	}

	merged.join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, &["Accept"], "Accept")]
	#[case(Some(""), &["Accept", "Accept-Language"], "Accept, Accept-Language")]
	#[case(Some("Accept"), &["Accept", "Accept-Language"], "Accept, Accept-Language")]
	#[case(Some("Cookie,Origin"), &["Accept"], "Cookie, Origin, Accept")]
	#[case(Some(" Cookie , , Accept "), &["Accept"], "Cookie, Accept")]
	#[case(Some("accept"), &["Accept"], "accept, Accept")]
	#[case(None, &["Accept", "Accept"], "Accept")]
	#[case(None, &[], "")]
	#[case(Some("Cookie"), &["", "Accept"], "Cookie, Accept")]
	#[case(None, &[" ", "Accept-Encoding "], "Accept-Encoding")]
	fn test_build_vary_value(
		#[case] existing: Option<&str>,
		#[case] fields: &[&str],
		#[case] expected: &str,
	) {
		assert_eq!(build_vary_value(existing, fields), expected);
	}
}
