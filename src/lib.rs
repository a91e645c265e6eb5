//! Parse and stringify URL query strings.
//!
//! A querystring is the `&`-separated list of `key=value` pairs following
//! the `?` in a URL. This crate converts between that wire form and an
//! ordered mapping ([`ParsedQuery`]), in both directions, with pluggable
//! conventions for representing repeated keys ([`ArrayFormat`]).
//!
//! Parsing is deliberately forgiving: malformed percent-encoding never
//! produces an error. The decoder substitutes what it can and leaves the
//! rest of the input untouched (see [`decode_component`]).
//!
//! ## Usage
//!
//! ```
//! use query_string::{parse, stringify, Value};
//!
//! let query = parse("?foo=bar&ids=1&ids=2");
//! assert_eq!(query["foo"], Value::from("bar"));
//! assert_eq!(query["ids"], Value::from(vec!["1", "2"]));
//!
//! assert_eq!(stringify(&query), "foo=bar&ids=1&ids=2");
//! ```
//!
//! Array formats are selected through [`ParseConfig`] and
//! [`StringifyConfig`]:
//!
//! ```
//! use query_string::{ArrayFormat, ParseConfig, Value};
//!
//! let config = ParseConfig::new().array_format(ArrayFormat::Comma);
//! let query = config.parse("foo=1,2,3");
//! assert_eq!(query["foo"], Value::from(vec!["1", "2", "3"]));
//! ```

mod config;
mod decode;
mod encode;
mod format;
mod parse;
mod stringify;
mod utils;
mod value;

#[doc(inline)]
pub use config::{ArrayFormat, KeySort, ParseConfig, StringifyConfig};
#[doc(inline)]
pub use decode::decode_component;
#[doc(inline)]
pub use encode::strict_uri_encode;
#[doc(inline)]
pub use parse::{ParsedUrl, extract};
#[doc(inline)]
pub use utils::split_on_first;
#[doc(inline)]
pub use value::{ParsedQuery, Value};

/// Parses a querystring into an ordered mapping, with default options.
///
/// Leading whitespace and a single leading `?`, `#`, or `&` are ignored, so
/// the raw search or hash portion of a URL can be passed directly. Keys in
/// the result are always in ascending lexicographic order.
///
/// ```
/// use query_string::{parse, Value};
///
/// let query = parse("b=2&a=1&flag");
/// assert_eq!(query["a"], Value::from("1"));
/// assert_eq!(query["b"], Value::from("2"));
/// assert!(query["flag"].is_null());
/// let keys: Vec<&str> = query.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["a", "b", "flag"]);
/// ```
///
/// Use [`ParseConfig`] to control decoding and the array format.
pub fn parse(input: &str) -> ParsedQuery {
    ParseConfig::new().parse(input)
}

/// Stringifies a mapping into a querystring, with default options.
///
/// Keys are sorted lexicographically, values are strictly percent-encoded,
/// and `Null` values emit the bare key. The empty mapping stringifies to
/// the empty string.
///
/// ```
/// use query_string::{ParsedQuery, Value, stringify};
///
/// let mut query = ParsedQuery::new();
/// query.insert("foo".to_owned(), Value::from("hello world"));
/// query.insert("flag".to_owned(), Value::Null);
/// assert_eq!(stringify(&query), "flag&foo=hello%20world");
/// ```
///
/// Use [`StringifyConfig`] to control encoding, key order, and the array
/// format.
pub fn stringify(data: &ParsedQuery) -> String {
    StringifyConfig::new().stringify(data)
}

/// Splits a URL into its base and parsed query, with default options.
///
/// The fragment is discarded; the `url` field is everything before the
/// first `?`.
///
/// ```
/// use query_string::{parse_url, Value};
///
/// let result = parse_url("https://foo.bar?id=42#hash");
/// assert_eq!(result.url, "https://foo.bar");
/// assert_eq!(result.query["id"], Value::from("42"));
/// ```
pub fn parse_url(input: &str) -> ParsedUrl {
    ParseConfig::new().parse_url(input)
}
