//! Parsing querystrings into ordered mappings.

use crate::config::ParseConfig;
use crate::decode::decode_component;
use crate::format::{Accumulator, Slot};
use crate::utils::split_on_first;
use crate::value::{ParsedQuery, Value};

/// A URL split into its base and parsed query, as returned by
/// [`parse_url`](crate::parse_url).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The portion of the input before `?` and before `#`.
    pub url: String,
    /// The parsed querystring.
    pub query: ParsedQuery,
}

/// Extracts the querystring from a URL.
///
/// Returns the substring after the first `?`, or the empty string if there
/// is none. The result can be passed straight to [`parse`](crate::parse).
///
/// ```
/// use query_string::extract;
///
/// assert_eq!(extract("https://foo.bar/?abc=def&hij=klm"), "abc=def&hij=klm");
/// assert_eq!(extract("https://foo.bar"), "");
/// ```
pub fn extract(input: &str) -> &str {
    match input.find('?') {
        Some(index) => &input[index + 1..],
        None => "",
    }
}

fn decode_with(input: &str, config: &ParseConfig) -> String {
    if config.decode {
        decode_component(input)
    } else {
        input.to_owned()
    }
}

pub(crate) fn parse_with(input: &str, config: &ParseConfig) -> ParsedQuery {
    let input = input.trim();
    let input = input.strip_prefix(['?', '#', '&']).unwrap_or(input);
    if input.is_empty() {
        return ParsedQuery::new();
    }

    let mut accumulator = Accumulator::default();
    for token in input.split('&') {
        let token = token.replace('+', " ");
        let (key, value) = split_on_first(&token, "=");
        // missing `=` means Null, distinct from the empty string of `key=`
        let value = match value {
            Some(value) => Value::String(decode_with(value, config)),
            None => Value::Null,
        };
        let key = decode_with(key, config);
        config.array_format.accumulate(key, value, &mut accumulator);
    }

    // output keys are always in ascending lexicographic order, regardless
    // of input order
    let mut entries: Vec<(String, Slot)> = accumulator.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = ParsedQuery::with_capacity(entries.len());
    for (key, slot) in entries {
        output.insert(key, slot.into_value());
    }
    output
}

pub(crate) fn parse_url_with(input: &str, config: &ParseConfig) -> ParsedUrl {
    let without_fragment = match input.find('#') {
        Some(index) => &input[..index],
        None => input,
    };
    let base = match without_fragment.find('?') {
        Some(index) => &without_fragment[..index],
        None => without_fragment,
    };
    ParsedUrl {
        url: base.to_owned(),
        query: parse_with(extract(without_fragment), config),
    }
}
