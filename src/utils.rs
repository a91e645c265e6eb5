//! Small string utilities shared by the parser.

/// Splits a string at the first occurrence of `separator`.
///
/// Returns the text before the separator, and the text after it if the
/// separator was found. Unlike `str::split`, only the first occurrence
/// counts; an empty separator never matches.
///
/// ```
/// use query_string::split_on_first;
///
/// assert_eq!(split_on_first("a-b-c", "-"), ("a", Some("b-c")));
/// assert_eq!(split_on_first("a-b-c", "+"), ("a-b-c", None));
/// assert_eq!(split_on_first("abc", ""), ("abc", None));
/// ```
pub fn split_on_first<'a>(input: &'a str, separator: &str) -> (&'a str, Option<&'a str>) {
    if separator.is_empty() {
        return (input, None);
    }
    match input.find(separator) {
        Some(index) => (&input[..index], Some(&input[index + separator.len()..])),
        None => (input, None),
    }
}
