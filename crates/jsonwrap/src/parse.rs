//! Conversion of loosely-typed native input into [`Value`].
//!
//! The input is classified by a fixed sequence of steps and the first step that recognizes it
//! wins:
//!
//! 1. text
//! 2. booleans stored in the JSON scalar slot (`serde_json::Value::Bool`)
//! 3. integers that fit into `i64`
//! 4. floats and integers that do not fit into `i64`
//! 5. native `bool`
//! 6. string-keyed maps
//! 7. sequences
//!
//! Anything else is rejected. `null` is never recognized, so a top-level `null` is rejected
//! and `null` entries of collections are dropped.
use std::{
    any::Any,
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use compact_str::CompactString;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

#[cfg(feature = "tracing")]
use crate::trace;
use crate::{Map, Value};

/// Native input recognized by one of the classification steps.
enum Native<'a> {
    Text(&'a str),
    Bool(bool),
    Int(i64),
    Float(f64),
    Keyed(Entries<'a>),
    Ordered(Elements<'a>),
}

type Entries<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Any)> + 'a>;
type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Any> + 'a>;

type Step = for<'a> fn(&'a dyn Any) -> Option<Native<'a>>;

const STEPS: [Step; 7] = [
    text,
    tagged_bool,
    integral,
    non_integral,
    boolean,
    keyed,
    ordered,
];

impl Native<'_> {
    fn into_value(self) -> Value {
        match self {
            Native::Text(text) => Value::String(text.into()),
            Native::Bool(value) => Value::Bool(value),
            Native::Int(value) => Value::Int(value),
            Native::Float(value) => Value::Float(value),
            Native::Keyed(entries) => Value::Map(
                entries
                    .filter_map(|(key, value)| {
                        let Some(value) = Value::parse(value) else {
                            trace!(key = key, "Dropping map entry with an unsupported value");
                            return None;
                        };
                        Some((CompactString::from(key), value))
                    })
                    .collect(),
            ),
            Native::Ordered(elements) => Value::Array(
                elements
                    .filter_map(|element| {
                        let parsed = Value::parse(element);
                        if parsed.is_none() {
                            trace!("Dropping unsupported array element");
                        }
                        parsed
                    })
                    .collect(),
            ),
        }
    }
}

fn text(input: &dyn Any) -> Option<Native<'_>> {
    if let Some(text) = input.downcast_ref::<String>() {
        Some(Native::Text(text))
    } else if let Some(text) = input.downcast_ref::<&'static str>() {
        Some(Native::Text(text))
    } else if let Some(text) = input.downcast_ref::<Box<str>>() {
        Some(Native::Text(text))
    } else if let Some(text) = input.downcast_ref::<CompactString>() {
        Some(Native::Text(text))
    } else if let Some(text) = input.downcast_ref::<Cow<'static, str>>() {
        Some(Native::Text(text))
    } else if let Some(JsonValue::String(text)) = input.downcast_ref::<JsonValue>() {
        Some(Native::Text(text))
    } else {
        None
    }
}

fn tagged_bool(input: &dyn Any) -> Option<Native<'_>> {
    match input.downcast_ref::<JsonValue>() {
        Some(JsonValue::Bool(value)) => Some(Native::Bool(*value)),
        _ => None,
    }
}

/// A JSON number, either bare or inside of a `serde_json::Value`.
fn json_number(input: &dyn Any) -> Option<&Number> {
    match input.downcast_ref::<JsonValue>() {
        Some(JsonValue::Number(number)) => Some(number),
        _ => input.downcast_ref::<Number>(),
    }
}

macro_rules! downcast_integer {
    ($input:expr, $($ty:ident)*) => {
        $(
            if let Some(number) = $input.downcast_ref::<$ty>() {
                return i64::try_from(*number).ok().map(Native::Int);
            }
        )*
    };
}

fn integral(input: &dyn Any) -> Option<Native<'_>> {
    if let Some(number) = json_number(input) {
        return number.as_i64().map(Native::Int);
    }
    downcast_integer!(input, i64 i32 i16 i8 isize u64 u32 u16 u8 usize);
    None
}

#[allow(clippy::cast_precision_loss)]
fn non_integral(input: &dyn Any) -> Option<Native<'_>> {
    if let Some(number) = json_number(input) {
        number.as_f64().map(Native::Float)
    } else if let Some(number) = input.downcast_ref::<f64>() {
        Some(Native::Float(*number))
    } else if let Some(number) = input.downcast_ref::<f32>() {
        Some(Native::Float(f64::from(*number)))
    } else if let Some(number) = input.downcast_ref::<u64>() {
        Some(Native::Float(*number as f64))
    } else if let Some(number) = input.downcast_ref::<usize>() {
        Some(Native::Float(*number as f64))
    } else {
        None
    }
}

fn boolean(input: &dyn Any) -> Option<Native<'_>> {
    input.downcast_ref::<bool>().map(|value| Native::Bool(*value))
}

// Tries `$collection::<T>` for every supported element type `T`.
macro_rules! with_element_types {
    (@each $collection:ident($input:expr): $($ty:ty),+) => {{
        $(
            if let Some(found) = $collection::<$ty>($input) {
                return Some(found);
            }
        )+
        None
    }};
    ($collection:ident($input:expr)) => {
        with_element_types!(@each $collection($input):
            Box<dyn Any>, Value, JsonValue, String, &'static str, CompactString, bool, f64, f32,
            i64, i32, i16, i8, isize, u64, u32, u16, u8, usize
        )
    };
}

fn keyed(input: &dyn Any) -> Option<Native<'_>> {
    if let Some(map) = input.downcast_ref::<Map>() {
        Some(Native::Keyed(entries(map.iter())))
    } else if let Some(map) = input.downcast_ref::<JsonMap<String, JsonValue>>() {
        Some(Native::Keyed(entries(map.iter())))
    } else if let Some(JsonValue::Object(map)) = input.downcast_ref::<JsonValue>() {
        Some(Native::Keyed(entries(map.iter())))
    } else {
        string_keyed(input).map(Native::Keyed)
    }
}

fn string_keyed(input: &dyn Any) -> Option<Entries<'_>> {
    with_element_types!(string_keyed_of(input))
}

fn string_keyed_of<T: Any>(input: &dyn Any) -> Option<Entries<'_>> {
    if let Some(map) = input.downcast_ref::<HashMap<String, T>>() {
        Some(entries(map.iter()))
    } else {
        input
            .downcast_ref::<BTreeMap<String, T>>()
            .map(|map| entries(map.iter()))
    }
}

fn ordered(input: &dyn Any) -> Option<Native<'_>> {
    if let Some(JsonValue::Array(items)) = input.downcast_ref::<JsonValue>() {
        Some(Native::Ordered(elements(items)))
    } else {
        sequence(input).map(Native::Ordered)
    }
}

fn sequence(input: &dyn Any) -> Option<Elements<'_>> {
    with_element_types!(sequence_of(input))
}

fn sequence_of<T: Any>(input: &dyn Any) -> Option<Elements<'_>> {
    input
        .downcast_ref::<Vec<T>>()
        .map(|items| elements(items.as_slice()))
}

fn entries<'a, K, T, I>(iter: I) -> Entries<'a>
where
    I: Iterator<Item = (&'a K, &'a T)> + 'a,
    K: AsRef<str> + 'a,
    T: Any,
{
    Box::new(iter.map(|(key, value)| (key.as_ref(), value as &dyn Any)))
}

fn elements<T: Any>(items: &[T]) -> Elements<'_> {
    Box::new(items.iter().map(|item| item as &dyn Any))
}

impl Value {
    /// Convert a loosely-typed native value.
    ///
    /// Supported inputs are strings, integers, floats, booleans, `serde_json` values and
    /// numbers, vectors and string-keyed `HashMap`s / `BTreeMap`s of those (or of
    /// `Box<dyn Any>`), and [`Map`]. Collection entries that cannot be converted are dropped,
    /// while an unsupported top-level input yields `None`.
    ///
    /// A `Box<dyn Any>` is unwrapped and a `Value` is returned unchanged. Passing a
    /// [`Value::Null`] is the only way to get `Null` out of this function.
    ///
    /// ```
    /// use std::any::Any;
    /// use jsonwrap::Value;
    ///
    /// let items: Vec<Box<dyn Any>> = vec![Box::new(1), Box::new(()), Box::new("two")];
    /// let value = Value::parse(&items).expect("Vectors are supported");
    /// assert_eq!(value.count(), 2);
    /// assert_eq!(value[1], "two");
    /// assert_eq!(Value::parse(&vec![1.5, 2.5]), Some(jsonwrap::wrap!([1.5, 2.5])));
    /// assert_eq!(Value::parse(&()), None);
    /// ```
    #[must_use]
    pub fn parse(input: &dyn Any) -> Option<Value> {
        if let Some(boxed) = input.downcast_ref::<Box<dyn Any>>() {
            return Value::parse(&**boxed);
        }
        if let Some(value) = input.downcast_ref::<Value>() {
            return Some(value.clone());
        }
        STEPS
            .iter()
            .find_map(|step| step(input))
            .map(Native::into_value)
    }

    /// Build an array from native elements, dropping the ones that are not supported.
    #[must_use]
    pub fn from_any_slice(items: &[Box<dyn Any>]) -> Value {
        Native::Ordered(elements(items)).into_value()
    }

    /// Build a map from native entries, dropping the ones whose value is not supported.
    #[must_use]
    pub fn from_any_map<S>(map: &HashMap<String, Box<dyn Any>, S>) -> Value {
        Native::Keyed(entries(map.iter())).into_value()
    }
}
