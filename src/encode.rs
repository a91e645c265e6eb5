//! Percent-encoding of keys and values.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::StringifyConfig;

/// The characters left unescaped by a standard URI-component encoder:
/// ASCII alphanumerics plus `- . _ ~ ! ' ( ) *`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// The RFC 3986 set: like [`COMPONENT_ENCODE_SET`] but `! ' ( ) *` are
/// escaped as well.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a string, escaping the full RFC 3986 reserved set.
///
/// This is stricter than a standard URI-component encoder: `!`, `'`, `(`,
/// `)` and `*` are escaped too.
///
/// ```
/// use query_string::strict_uri_encode;
///
/// assert_eq!(strict_uri_encode("unicorn*foobar"), "unicorn%2Afoobar");
/// ```
pub fn strict_uri_encode(input: &str) -> String {
    utf8_percent_encode(input, STRICT_ENCODE_SET).to_string()
}

/// Encodes one key or value token according to the stringify configuration.
pub(crate) fn encode<'a>(value: &'a str, config: &StringifyConfig) -> Cow<'a, str> {
    if !config.encode {
        return Cow::Borrowed(value);
    }
    let set = if config.strict {
        STRICT_ENCODE_SET
    } else {
        COMPONENT_ENCODE_SET
    };
    utf8_percent_encode(value, set).into()
}
