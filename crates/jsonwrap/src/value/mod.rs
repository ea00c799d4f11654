mod from;
mod index;
mod partial_eq;

use std::{collections::hash_map, fmt, slice};

use ahash::AHashMap;
use compact_str::CompactString;

pub use index::Index;

/// Keyed entries of a [`Value::Map`].
///
/// Iteration order is unspecified and may differ between two maps holding the same entries.
pub type Map = AHashMap<CompactString, Value>;

/// An immutable representation of JSON-like data.
///
/// Nested values are owned by their container, so a `Value` is always a tree. No API hands
/// out mutable access to the payload of an existing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(CompactString),
    Array(Box<[Value]>),
    Map(Map),
}

/// The variant of a [`Value`] without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Map,
}

impl Kind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Number of elements for arrays, number of entries for maps and `1` for every scalar,
    /// including `Null`.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => 1,
            Value::Array(items) => items.len(),
            Value::Map(map) => map.len(),
        }
    }

    /// The first element of an array, or the value itself for scalars.
    ///
    /// For maps this is the value of an arbitrary entry.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                Some(self)
            }
            Value::Array(items) => items.first(),
            Value::Map(map) => map.values().next(),
        }
    }

    /// The last element of an array, or the value itself for scalars.
    ///
    /// For maps this is the value of an arbitrary entry and it is not guaranteed to be
    /// distinct from the one returned by [`Value::first`].
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                Some(self)
            }
            Value::Array(items) => items.last(),
            Value::Map(map) => map.values().last(),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(string) = self {
            Some(string.as_str())
        } else {
            None
        }
    }

    /// Payload of a `Float`. Integers are not converted.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Value::Float(number) = self {
            Some(*number)
        } else {
            None
        }
    }

    /// Payload of an `Int`. Floats are not converted.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Int(number) = self {
            Some(*number)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Look up an array element by position or a map entry by key.
    ///
    /// Returns `None` if the index is out of range, the key is absent, or `self` is not a
    /// container of the matching kind. See [`std::ops::Index`] on `Value` for the form that
    /// falls back to [`Value::Null`].
    ///
    /// ```
    /// use jsonwrap::wrap;
    ///
    /// let value = wrap!({"response": [1, 2, 3]});
    /// assert_eq!(value.get("response").and_then(|v| v.get(2)), Some(&wrap!(3)));
    /// assert_eq!(value.get(0), None);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Property-style lookup, same as `self.get(name)`.
    #[must_use]
    pub fn get_member(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    /// Property-style lookup, same as `&self[name]`.
    #[must_use]
    pub fn member(&self, name: &str) -> &Value {
        &self[name]
    }

    /// Iterate over array elements or map values. Scalars yield nothing.
    pub fn values(&self) -> Values<'_> {
        match self {
            Value::Array(items) => Values::Array(items.iter()),
            Value::Map(map) => Values::Map(map.values()),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                Values::Empty
            }
        }
    }

    /// Iterate over map entries. Anything other than a map yields nothing.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.as_map().map(|map| map.iter()),
        }
    }
}

/// Iterator returned by [`Value::values`].
#[derive(Debug)]
pub enum Values<'a> {
    Empty,
    Array(slice::Iter<'a, Value>),
    Map(hash_map::Values<'a, CompactString, Value>),
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Values::Empty => None,
            Values::Array(iter) => iter.next(),
            Values::Map(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Values::Empty => (0, Some(0)),
            Values::Array(iter) => iter.size_hint(),
            Values::Map(iter) => iter.size_hint(),
        }
    }
}

/// Iterator returned by [`Value::entries`].
#[derive(Debug)]
pub struct Entries<'a> {
    inner: Option<hash_map::Iter<'a, CompactString, Value>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }
}
