//! The array-format strategies.
//!
//! Each [`ArrayFormat`] variant implements two operations: `accumulate`,
//! which folds one decoded `key=value` token into the parse accumulator,
//! and `expand`, which turns one key's sequence of values back into wire
//! segments. Parsing and stringifying with the same format round-trip;
//! mixing formats is lossy.

use std::borrow::Cow;
use std::mem;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::config::{ArrayFormat, StringifyConfig};
use crate::encode::encode;
use crate::value::Value;

/// The transient mapping built up over one parse call, discarded after the
/// final reordering pass.
pub(crate) type Accumulator = IndexMap<String, Slot>;

/// One accumulator entry.
///
/// `Indexed` is the intermediate per-key table used by
/// [`ArrayFormat::Indexed`]: sub-keys are the captured index digits, and
/// materialization sorts them numerically (see [`Slot::into_value`]).
pub(crate) enum Slot {
    Value(Value),
    Indexed(IndexMap<String, Value>),
}

impl Slot {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Slot::Value(value) => value,
            Slot::Indexed(entries) => {
                let mut entries: Vec<(String, Value)> = entries.into_iter().collect();
                // numeric ascending, lexicographic tie-break; out-of-sequence
                // indices are silently reordered (`foo[5]=x&foo[1]=y` -> [y, x])
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                entries.sort_by_key(|(index, _)| numeric_index(index));
                Value::Array(entries.into_iter().map(|(_, value)| value).collect())
            }
        }
    }
}

fn numeric_index(digits: &str) -> u128 {
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u128::MAX)
    }
}

/// Splits a trailing `[<digits>]` suffix off a key, capturing the digit
/// string (possibly empty) as the sub-key.
fn split_index_suffix(key: &str) -> Option<(&str, &str)> {
    let rest = key.strip_suffix(']')?;
    let open = rest.rfind('[')?;
    let digits = &rest[open + 1..];
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((&rest[..open], digits))
    } else {
        None
    }
}

/// Repeated-key concatenation: a scalar coerces into a sequence, a sequence
/// extends.
fn append(slot: &mut Slot, value: Value) {
    match slot {
        Slot::Value(Value::Array(items)) => items.push(value),
        Slot::Value(existing) => {
            let first = mem::take(existing);
            *existing = Value::Array(vec![first, value]);
        }
        // cannot occur: each parse call uses exactly one format
        Slot::Indexed(_) => *slot = Slot::Value(value),
    }
}

/// JS-style scalar coercion for array elements during stringification.
fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(items) => {
            Cow::Owned(items.iter().map(scalar_text).collect::<Vec<_>>().join(","))
        }
        Value::Null | Value::Undefined => Cow::Borrowed(""),
    }
}

impl ArrayFormat {
    /// The decode step: folds one `key=value` token into the accumulator.
    pub(crate) fn accumulate(self, key: String, value: Value, accumulator: &mut Accumulator) {
        match self {
            ArrayFormat::Unindexed => match accumulator.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(Slot::Value(value));
                }
                Entry::Occupied(mut slot) => append(slot.get_mut(), value),
            },
            ArrayFormat::EmptyIndexed => match key.strip_suffix("[]") {
                None => {
                    accumulator.insert(key, Slot::Value(value));
                }
                Some(stripped) => match accumulator.entry(stripped.to_owned()) {
                    Entry::Vacant(slot) => {
                        slot.insert(Slot::Value(Value::Array(vec![value])));
                    }
                    Entry::Occupied(mut slot) => append(slot.get_mut(), value),
                },
            },
            ArrayFormat::Indexed => match split_index_suffix(&key) {
                None => {
                    accumulator.insert(key, Slot::Value(value));
                }
                Some((base, index)) => {
                    let slot = accumulator
                        .entry(base.to_owned())
                        .or_insert_with(|| Slot::Indexed(IndexMap::new()));
                    // a scalar already stored under the base key wins; the
                    // indexed token is dropped
                    if let Slot::Indexed(entries) = slot {
                        entries.insert(index.to_owned(), value);
                    }
                }
            },
            ArrayFormat::Comma => {
                // last instance of the key wins, no merging
                let value = match value {
                    Value::String(s) if s.contains(',') => {
                        Value::Array(s.split(',').map(Value::from).collect())
                    }
                    other => other,
                };
                accumulator.insert(key, Slot::Value(value));
            }
        }
    }

    /// The encode step: turns one key's values into wire segments, to be
    /// joined with `&` by the stringifier.
    pub(crate) fn expand(
        self,
        key: &str,
        values: &[Value],
        config: &StringifyConfig,
    ) -> Vec<String> {
        let mut segments: Vec<String> = Vec::new();
        match self {
            ArrayFormat::Unindexed => {
                for value in values {
                    match value {
                        Value::Undefined => {}
                        Value::Null => segments.push(encode(key, config).into_owned()),
                        other => segments.push(format!(
                            "{}={}",
                            encode(key, config),
                            encode(&scalar_text(other), config)
                        )),
                    }
                }
            }
            ArrayFormat::EmptyIndexed => {
                for value in values {
                    match value {
                        Value::Undefined => {}
                        Value::Null => segments.push(format!("{}[]", encode(key, config))),
                        other => segments.push(format!(
                            "{}[]={}",
                            encode(key, config),
                            encode(&scalar_text(other), config)
                        )),
                    }
                }
            }
            ArrayFormat::Indexed => {
                let mut index_buffer = itoa::Buffer::new();
                for value in values {
                    if value.is_undefined() {
                        continue;
                    }
                    // indices count emitted elements, not source positions
                    let index = index_buffer.format(segments.len());
                    match value {
                        Value::Null => {
                            segments.push(format!("{}[{}]", encode(key, config), index));
                        }
                        other => segments.push(format!(
                            "{}[{}]={}",
                            encode(key, config),
                            index,
                            encode(&scalar_text(other), config)
                        )),
                    }
                }
            }
            ArrayFormat::Comma => {
                // the whole array collapses into a single segment; falsy
                // elements (missing, null, empty) are dropped entirely,
                // unlike the other formats
                let mut segment = String::new();
                for value in values {
                    let text = match value {
                        Value::Undefined | Value::Null => continue,
                        Value::String(s) if s.is_empty() => continue,
                        other => scalar_text(other),
                    };
                    if segment.is_empty() {
                        segment = format!(
                            "{}={}",
                            encode(key, config),
                            encode(&text, config)
                        );
                    } else {
                        segment.push(',');
                        segment.push_str(&encode(&text, config));
                    }
                }
                if !segment.is_empty() {
                    segments.push(segment);
                }
            }
        }
        segments
    }
}
