//! Comparisons between a [`Value`] and native Rust values.
//!
//! The native side is converted the same way construction converts it and then compared
//! structurally, so `Value::Int(1) == 1.0` and `Value::Int(1) == true` are both false.
use std::{borrow::Borrow, collections::HashMap, hash::BuildHasher};

use super::Value;

macro_rules! partial_eq_scalar {
    ($($ty:ident)*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    *self == Value::from(*other)
                }
            }

            impl PartialEq<$ty> for &Value {
                fn eq(&self, other: &$ty) -> bool {
                    **self == Value::from(*other)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    *other == Value::from(*self)
                }
            }
        )*
    };
}

partial_eq_scalar! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64 bool
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl<T> PartialEq<[T]> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        match self {
            Value::Array(items) => {
                items.len() == other.len() && items.iter().zip(other).all(|(lhs, rhs)| lhs == rhs)
            }
            _ => false,
        }
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        <Value as PartialEq<[T]>>::eq(self, other.as_slice())
    }
}

impl<T> PartialEq<Vec<T>> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        <Value as PartialEq<[T]>>::eq(self, other.as_slice())
    }
}

impl<K, V, S> PartialEq<HashMap<K, V, S>> for Value
where
    K: Borrow<str>,
    Value: PartialEq<V>,
    S: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S>) -> bool {
        match self {
            Value::Map(map) => {
                map.len() == other.len()
                    && other.iter().all(|(key, rhs)| {
                        let key: &str = key.borrow();
                        map.get(key).is_some_and(|lhs| *lhs == *rhs)
                    })
            }
            _ => false,
        }
    }
}
