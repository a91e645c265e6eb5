use std::cmp::Ordering;

use crate::parse::ParsedUrl;
use crate::value::ParsedQuery;

/// How a key with multiple values is represented on the wire.
///
/// The same format must be used for parsing and stringifying if the result
/// is expected to round-trip; parsing one format's output with another
/// format's parser is lossy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Repeat the bare key: `a=1&a=2`. The default.
    #[default]
    Unindexed,
    /// Use empty brackets: `a[]=1&a[]=2`.
    EmptyIndexed,
    /// Use explicit indices: `a[0]=1&a[1]=2`.
    Indexed,
    /// Join values with commas into a single pair: `a=1,2`.
    Comma,
}

/// Key ordering applied by [`StringifyConfig::stringify`].
#[derive(Clone, Copy, Debug)]
pub enum KeySort {
    /// Ascending lexicographic order. The default.
    Lexicographic,
    /// Keep the input map's insertion order.
    Unsorted,
    /// Order keys with a caller-supplied comparator.
    Comparator(fn(&str, &str) -> Ordering),
}

/// Configuration for parsing querystrings.
///
/// ```
/// use query_string::{ArrayFormat, ParseConfig, Value};
///
/// let config = ParseConfig::new().array_format(ArrayFormat::EmptyIndexed);
/// let query = config.parse("foo[]=1&foo[]=2");
/// assert_eq!(query["foo"], Value::from(vec!["1", "2"]));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParseConfig {
    pub(crate) decode: bool,
    pub(crate) array_format: ArrayFormat,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            decode: true,
            array_format: ArrayFormat::Unindexed,
        }
    }

    /// Whether keys and values are percent-decoded. Default is `true`.
    pub const fn decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Selects the array representation to parse. Default is
    /// [`ArrayFormat::Unindexed`].
    pub const fn array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Parses a querystring using this configuration.
    pub fn parse(&self, input: &str) -> ParsedQuery {
        crate::parse::parse_with(input, self)
    }

    /// Splits a URL into its base and parsed query using this configuration.
    pub fn parse_url(&self, input: &str) -> ParsedUrl {
        crate::parse::parse_url_with(input, self)
    }
}

/// Configuration for stringifying querystrings.
///
/// ```
/// use query_string::{ArrayFormat, ParsedQuery, StringifyConfig, Value};
///
/// let mut query = ParsedQuery::new();
/// query.insert("foo".to_owned(), Value::from(vec![1i64, 2, 3]));
///
/// let config = StringifyConfig::new().array_format(ArrayFormat::Comma);
/// assert_eq!(config.stringify(&query), "foo=1,2,3");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StringifyConfig {
    pub(crate) encode: bool,
    pub(crate) strict: bool,
    pub(crate) array_format: ArrayFormat,
    pub(crate) sort: KeySort,
}

impl Default for StringifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StringifyConfig {
    pub const fn new() -> Self {
        Self {
            encode: true,
            strict: true,
            array_format: ArrayFormat::Unindexed,
            sort: KeySort::Lexicographic,
        }
    }

    /// Whether keys and values are percent-encoded. Default is `true`.
    pub const fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Whether encoding also escapes the RFC 3986 reserved characters
    /// `! ' ( ) *`. Default is `true`.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Selects the array representation to emit. Default is
    /// [`ArrayFormat::Unindexed`].
    pub const fn array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Selects the key ordering of the output. Default is
    /// [`KeySort::Lexicographic`].
    pub const fn sort(mut self, sort: KeySort) -> Self {
        self.sort = sort;
        self
    }

    /// Stringifies a query mapping using this configuration.
    pub fn stringify(&self, data: &ParsedQuery) -> String {
        crate::stringify::stringify_with(data, self)
    }
}
