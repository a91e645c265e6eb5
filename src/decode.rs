//! Fault-tolerant percent-decoding.
//!
//! Standard percent-decoding rejects malformed escape sequences (truncated
//! tokens, bytes that do not form valid UTF-8). Query strings found in the
//! wild contain plenty of those, so [`decode_component`] never fails:
//! it decodes as much of the input as possible and leaves the rest alone.

/// Percent-decodes a string without ever failing.
///
/// - Replaces `+` with a space.
/// - Decodes valid `%XX` sequences, including multi-byte UTF-8 sequences.
/// - Maps the UTF-16 byte-order-mark halves `%FE%FF` / `%FF%FE` and a lone
///   `%C2` lead byte to replacement characters (`U+FFFD`).
/// - Leaves undecodable escape sequences in place rather than erroring.
///
/// ```
/// use query_string::decode_component;
///
/// assert_eq!(decode_component("st%C3%A5le"), "ståle");
/// assert_eq!(decode_component("a+b"), "a b");
/// // malformed input comes back as-is
/// assert_eq!(decode_component("%ab"), "%ab");
/// ```
pub fn decode_component(input: &str) -> String {
    let input = input.replace('+', " ");
    match try_decode(&input) {
        Some(decoded) => decoded,
        None => decode_chunked(&input),
    }
}

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Strict whole-string percent-decoding.
///
/// Returns `None` if any `%` is not followed by two hex digits, or if the
/// decoded bytes are not valid UTF-8.
fn try_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    if !bytes.contains(&b'%') {
        return Some(input.to_owned());
    }

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let h = char_to_digit(*bytes.get(i + 1)?)?;
            let l = char_to_digit(*bytes.get(i + 2)?)?;
            decoded.push(h * 0x10 + l);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).ok()
}

/// Returns true if a complete `%XX` token starts at byte offset `i`.
fn is_token_at(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'%'
        && i + 2 < bytes.len()
        && bytes[i + 1].is_ascii_hexdigit()
        && bytes[i + 2].is_ascii_hexdigit()
}

/// Scans for maximal runs of one-or-more consecutive `%XX` tokens.
///
/// The cursor is local to the call, so concurrent decodes never share
/// matcher state.
fn token_runs(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if is_token_at(bytes, i) {
            let start = i;
            while i < bytes.len() && is_token_at(bytes, i) {
                i += 3;
            }
            runs.push(&input[start..i]);
        } else {
            i += 1;
        }
    }
    runs
}

/// Scans for individual `%XX` tokens, run-adjacent or not.
fn scan_tokens(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if is_token_at(bytes, i) {
            tokens.push(&input[i..i + 3]);
            i += 3;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Recursively decodes a list of `%XX` tokens, bisecting at `split`.
///
/// If the whole list decodes, it comes back as one piece. Otherwise the list
/// is split in two and each half is decoded independently, leaving single
/// undecodable tokens untouched.
fn decode_components(components: &[&str], split: usize) -> Vec<String> {
    if let Some(decoded) = try_decode(&components.concat()) {
        return vec![decoded];
    }
    if components.len() == 1 {
        return vec![components[0].to_owned()];
    }

    let split = split.clamp(1, components.len() - 1);
    let (left, right) = components.split_at(split);
    let mut pieces = decode_components(left, 1);
    pieces.extend(decode_components(right, 1));
    pieces
}

/// Best-effort decoding of a run that failed strict decoding, trying every
/// split point until no further progress is possible.
fn repair_run(run: &str) -> String {
    let mut current = run.to_owned();
    let mut split = 1;
    loop {
        let next = {
            let tokens = scan_tokens(&current);
            if split >= tokens.len() {
                break;
            }
            decode_components(&tokens, split).concat()
        };
        current = next;
        split += 1;
    }
    current
}

/// The fallback decoder for inputs that fail strict whole-string decoding.
///
/// Builds a substitution table from each maximal `%XX` run to its decoded
/// (or best-effort repaired) form, then applies every entry as a literal
/// global replacement in table order. The byte-order-mark halves are seeded
/// first; the lone `%C2` entry goes last so it cannot preempt longer
/// sequences that legitimately start with `%C2`.
fn decode_chunked(input: &str) -> String {
    let mut replacements: Vec<(String, String)> = vec![
        ("%FE%FF".to_owned(), "\u{FFFD}\u{FFFD}".to_owned()),
        ("%FF%FE".to_owned(), "\u{FFFD}\u{FFFD}".to_owned()),
    ];

    for run in token_runs(input) {
        if replacements.iter().any(|(pattern, _)| pattern == run) {
            continue;
        }
        match try_decode(run) {
            Some(decoded) => replacements.push((run.to_owned(), decoded)),
            None => {
                let repaired = repair_run(run);
                if repaired != run {
                    replacements.push((run.to_owned(), repaired));
                }
            }
        }
    }

    replacements.push(("%C2".to_owned(), "\u{FFFD}".to_owned()));

    let mut output = input.to_owned();
    for (pattern, replacement) in &replacements {
        output = output.replace(pattern, replacement);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_are_maximal() {
        assert_eq!(token_runs("%7B%ab%7C"), vec!["%7B%ab%7C"]);
        assert_eq!(token_runs("a%20b%20c"), vec!["%20", "%20"]);
        assert_eq!(token_runs("%%25%%"), vec!["%25"]);
        assert!(token_runs("%7 B").is_empty());
        assert!(token_runs("%").is_empty());
    }

    #[test]
    fn strict_decode_rejects_invalid_utf8() {
        assert_eq!(try_decode("%C2%B5"), Some("µ".to_owned()));
        assert_eq!(try_decode("%C2"), None);
        assert_eq!(try_decode("%"), None);
    }
}
