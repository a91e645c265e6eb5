//! Stringifying ordered mappings into querystrings.

use crate::config::{KeySort, StringifyConfig};
use crate::encode::encode;
use crate::value::{ParsedQuery, Value};

pub(crate) fn stringify_with(data: &ParsedQuery, config: &StringifyConfig) -> String {
    let mut keys: Vec<&str> = data.keys().map(String::as_str).collect();
    match config.sort {
        KeySort::Lexicographic => keys.sort_unstable(),
        KeySort::Unsorted => {}
        KeySort::Comparator(comparator) => keys.sort_by(|a, b| comparator(a, b)),
    }

    let mut segments: Vec<String> = Vec::with_capacity(keys.len());
    for key in keys {
        let segment = match &data[key] {
            Value::Undefined => continue,
            Value::Null => encode(key, config).into_owned(),
            Value::Array(items) => {
                let expanded = config.array_format.expand(key, items, config);
                if expanded.is_empty() {
                    continue;
                }
                expanded.join("&")
            }
            Value::String(s) => {
                format!("{}={}", encode(key, config), encode(s, config))
            }
        };
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
    segments.join("&")
}
