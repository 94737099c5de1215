//! Query and form parameter encoding.
//!
//! [`ParamBuilder`] accumulates form-encoded `name=value` pairs and renders
//! them as a standalone string or appended to an existing URL.
//!
//! # Example
//!
//! ```
//! use paypal_https::ParamBuilder;
//!
//! let url = ParamBuilder::new()
//!     .add("count", 10)
//!     .add("sort_by", "create_time")
//!     .create_url("https://api.sandbox.paypal.com/v1/payments/payment");
//!
//! assert_eq!(
//!     url,
//!     "https://api.sandbox.paypal.com/v1/payments/payment?count=10&sort_by=create_time"
//! );
//! ```

use std::fmt::Display;

use url::form_urlencoded;

/// Accumulates form-encoded `name=value` pairs, preserving insertion order.
///
/// Pairs with an absent or empty value are dropped silently; this is the
/// filtering policy for optional API parameters, not an error. Duplicate
/// names are kept in order, producing multi-valued query parameters.
///
/// A builder is meant to be filled once per request and consumed by
/// [`ParamBuilder::create_url`] or [`ParamBuilder::as_str`].
#[derive(Debug, Clone, Default)]
pub struct ParamBuilder {
    encoded: String,
}

impl ParamBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `name=value` pair.
    ///
    /// The value is stringified first; an empty string drops the pair.
    /// Name and value are form-encoded independently (UTF-8), so values
    /// containing `&`, `=`, `?`, whitespace, or non-ASCII survive a decode
    /// round trip.
    #[must_use]
    pub fn add(mut self, name: &str, value: impl Display) -> Self {
        let value = value.to_string();
        if value.is_empty() {
            return self;
        }
        if !self.encoded.is_empty() {
            self.encoded.push('&');
        }
        self.encoded
            .extend(form_urlencoded::byte_serialize(name.as_bytes()));
        self.encoded.push('=');
        self.encoded
            .extend(form_urlencoded::byte_serialize(value.as_bytes()));
        self
    }

    /// Appends one pair with an optional value; `None` drops the pair.
    #[must_use]
    pub fn add_opt(self, name: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.add(name, value),
            None => self,
        }
    }

    /// `true` while no pair has been kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// The accumulated encoded string, usable as an
    /// `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Appends the accumulated pairs to `base_url`.
    ///
    /// Returns `base_url` unchanged when nothing was accumulated. Uses `&`
    /// as the separator when the URL already carries a `?` anywhere in it,
    /// `?` otherwise.
    #[must_use]
    pub fn create_url(&self, base_url: &str) -> String {
        if self.encoded.is_empty() {
            return base_url.to_string();
        }
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}{}", self.encoded)
    }
}

impl Display for ParamBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_leaves_url_unchanged() {
        let builder = ParamBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.create_url("https://x/y"), "https://x/y");
        assert_eq!(builder.as_str(), "");
    }

    #[test]
    fn empty_value_is_dropped() {
        let builder = ParamBuilder::new().add("a", "");
        assert!(builder.is_empty());
        assert_eq!(builder.create_url("https://x/y"), "https://x/y");
    }

    #[test]
    fn absent_value_is_dropped() {
        let builder = ParamBuilder::new()
            .add_opt("a", None::<&str>)
            .add_opt("b", Some("2"));
        assert_eq!(builder.as_str(), "b=2");
    }

    #[test]
    fn pairs_join_with_ampersand() {
        let builder = ParamBuilder::new().add("a", "1").add("b", "2");
        assert_eq!(builder.create_url("https://x/y"), "https://x/y?a=1&b=2");
    }

    #[test]
    fn single_pair_uses_question_mark() {
        let builder = ParamBuilder::new().add("a", "1");
        assert_eq!(builder.create_url("https://x/y"), "https://x/y?a=1");
    }

    #[test]
    fn existing_query_marker_uses_ampersand() {
        let builder = ParamBuilder::new().add("a", "1");
        assert_eq!(
            builder.create_url("https://x/y?already=1"),
            "https://x/y?already=1&a=1"
        );
    }

    #[test]
    fn stringifiable_values() {
        let builder = ParamBuilder::new().add("count", 10).add("index", 2u64);
        assert_eq!(builder.as_str(), "count=10&index=2");
    }

    #[test]
    fn duplicate_names_are_kept_in_order() {
        let builder = ParamBuilder::new().add("tag", "a").add("tag", "b");
        assert_eq!(builder.as_str(), "tag=a&tag=b");
    }

    #[test]
    fn reserved_characters_round_trip() {
        let builder = ParamBuilder::new()
            .add("q", "a&b=c?d")
            .add("note", "white space")
            .add("city", "Kassel Münchén");

        let decoded: Vec<(String, String)> = form_urlencoded::parse(builder.as_str().as_bytes())
            .into_owned()
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("q".to_string(), "a&b=c?d".to_string()),
                ("note".to_string(), "white space".to_string()),
                ("city".to_string(), "Kassel Münchén".to_string()),
            ]
        );
    }

    #[test]
    fn encoded_name_round_trips() {
        let builder = ParamBuilder::new().add("a b", "1");

        let decoded: Vec<(String, String)> = form_urlencoded::parse(builder.as_str().as_bytes())
            .into_owned()
            .collect();

        assert_eq!(decoded, vec![("a b".to_string(), "1".to_string())]);
    }
}
