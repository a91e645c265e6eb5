use indexmap::IndexMap;

/// An ordered mapping from query keys to values.
///
/// This is what [`parse`](crate::parse) produces and what
/// [`stringify`](crate::stringify) consumes. Keys are unique; iteration
/// order is insertion order, and `parse` always inserts in ascending
/// lexicographic key order. There are no inherited members: lookups only
/// ever see keys that were explicitly inserted.
pub type ParsedQuery = IndexMap<String, Value>;

/// A single value in a parsed query.
///
/// Querystrings distinguish between a key with a value (`key=value`, possibly
/// empty: `key=`), a bare key with no `=` at all (`key`), and a key that
/// appears multiple times or uses an array notation. These map to `String`,
/// `Null`, and `Array` respectively.
///
/// `Undefined` never comes out of [`parse`](crate::parse); it exists so
/// callers of [`stringify`](crate::stringify) can mark keys or array
/// elements to be skipped entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// Skipped entirely during stringification.
    #[default]
    Undefined,
    /// A key with no value at all, e.g. `"key"` with no `=`.
    Null,
    /// A single scalar value. Empty for `key=`.
    String(String),
    /// An ordered sequence of values for one key.
    Array(Vec<Value>),
}

impl Value {
    /// Returns the scalar string, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is an `Array` value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::String(if v { "true" } else { "false" }.to_owned())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::String(itoa::Buffer::new().format(v).to_owned())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::String(itoa::Buffer::new().format(v).to_owned())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::String(ryu::Buffer::new().format(v).to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> serde::de::Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string, scalar, null, or sequence")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::String(v))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                serde::Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
