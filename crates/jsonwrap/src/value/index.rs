use std::ops;

use super::Value;

static NULL: Value = Value::Null;

/// A type that can be used to look up a nested [`Value`].
///
/// Implemented for `usize` (array positions) and for `str` / `String` (map keys). This trait
/// is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Map(map) => map.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Lookup that falls back to [`Value::Null`] instead of panicking.
///
/// ```
/// use jsonwrap::{wrap, Value};
///
/// let value = wrap!(["y"]);
/// assert_eq!(value[0], "y");
/// assert_eq!(value[5], Value::Null);
/// assert_eq!(value["key"], Value::Null);
/// ```
impl<I> ops::Index<I> for Value
where
    I: Index,
{
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use crate::{wrap, Value};
    use test_case::test_case;

    #[test]
    fn nested_lookup() {
        let value = wrap!({"nested-dict": {"response": [1, 2, 3, 4]}});
        assert_eq!(
            value
                .get("nested-dict")
                .and_then(|v| v.get("response"))
                .and_then(|v| v.get(2))
                .and_then(Value::as_i64),
            Some(3)
        );
        assert_eq!(value["nested-dict"]["response"][2].as_i64(), Some(3));
    }

    #[test_case(wrap!(["x"]), 5; "out of range")]
    #[test_case(wrap!([]), 0; "empty array")]
    #[test_case(wrap!({"0": 1}), 0; "map")]
    #[test_case(wrap!("text"), 0; "string")]
    #[test_case(Value::Null, 0; "null")]
    fn absent_position(value: Value, position: usize) {
        assert_eq!(value.get(position), None);
        assert_eq!(value[position], Value::Null);
    }

    #[test_case(wrap!({"a": 1}), "b"; "missing key")]
    #[test_case(wrap!(["a"]), "a"; "array")]
    #[test_case(wrap!(1), "a"; "int")]
    #[test_case(wrap!(true), "a"; "bool")]
    #[test_case(Value::Null, "a"; "null")]
    fn absent_key(value: Value, key: &str) {
        assert_eq!(value.get(key), None);
        assert_eq!(value[key], Value::Null);
        assert_eq!(value.get_member(key), None);
        assert_eq!(*value.member(key), Value::Null);
    }

    #[test]
    fn key_types() {
        let value = wrap!({"name": "Sam"});
        let key = String::from("name");
        assert_eq!(value.get(&key), Some(&wrap!("Sam")));
        assert_eq!(value[&key], "Sam");
        assert_eq!(value[key.as_str()], "Sam");
        assert_eq!(*value.member("name"), "Sam");
    }

    #[test]
    fn chaining_through_missing_levels() {
        let value = wrap!({"a": [1]});
        assert_eq!(value["b"]["c"][3]["d"], Value::Null);
        assert_eq!(value["a"][0]["x"], Value::Null);
    }
}
