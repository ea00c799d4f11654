/// Construct a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays and maps may mix element types. `null` produces [`Value::Null`](crate::Value::Null)
/// and any other leaf expression is converted with `Value::from`, so a leaf of an unsupported
/// type is a compile error rather than a runtime failure.
///
/// ```
/// use jsonwrap::{wrap, Value};
///
/// let array = wrap!([1, 2.0, "3", [4], {"D": 5.0}]);
/// assert_eq!(array[0], 1);
/// assert_eq!(array[1], 2.0);
/// assert_eq!(array[2], "3");
/// assert_eq!(array[3][0], 4);
/// assert_eq!(array[4]["D"], 5.0);
///
/// let retired = false;
/// let person = wrap!({
///     "name": "Sam Soffes",
///     "age": 20 + 4,
///     "retired": retired,
///     "spouse": null
/// });
/// assert_eq!(person["age"], 24);
/// assert_eq!(person["spouse"], Value::Null);
/// ```
#[macro_export]
macro_rules! wrap {
    ($($value:tt)+) => {
        $crate::__wrap_internal!($($value)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __wrap_internal {
    // Array elements are munched one at a time into `[$($elems,)*]`.
    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@array [$($elems:expr),*]) => {
        ::std::vec![$($elems),*]
    };
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::__wrap_internal!(@array [$($elems,)* $crate::__wrap_internal!(null)] $($rest)*)
    };
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::__wrap_internal!(@array [$($elems,)* $crate::__wrap_internal!([$($array)*])] $($rest)*)
    };
    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::__wrap_internal!(@array [$($elems,)* $crate::__wrap_internal!({$($map)*})] $($rest)*)
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::__wrap_internal!(@array [$($elems,)* $crate::__wrap_internal!($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::__wrap_internal!(@array [$($elems,)* $crate::__wrap_internal!($last)])
    };
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::__wrap_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Map entries: key tokens are collected into `($($key)*)`, then the value after `:` is
    // parsed and the entry inserted. `$copy` keeps the remaining input for error reporting.
    (@map $map:ident () () ()) => {};
    (@map $map:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        let _ = $map.insert(($($key)+).into(), $value);
        $crate::__wrap_internal!(@map $map () ($($rest)*) ($($rest)*));
    };
    (@map $map:ident [$($key:tt)+] ($value:expr)) => {
        let _ = $map.insert(($($key)+).into(), $value);
    };
    (@map $map:ident ($($key:tt)+) (: null $($rest:tt)*) $copy:tt) => {
        $crate::__wrap_internal!(@map $map [$($key)+] ($crate::__wrap_internal!(null)) $($rest)*);
    };
    (@map $map:ident ($($key:tt)+) (: [$($array:tt)*] $($rest:tt)*) $copy:tt) => {
        $crate::__wrap_internal!(@map $map [$($key)+] ($crate::__wrap_internal!([$($array)*])) $($rest)*);
    };
    (@map $map:ident ($($key:tt)+) (: {$($inner:tt)*} $($rest:tt)*) $copy:tt) => {
        $crate::__wrap_internal!(@map $map [$($key)+] ($crate::__wrap_internal!({$($inner)*})) $($rest)*);
    };
    (@map $map:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        $crate::__wrap_internal!(@map $map [$($key)+] ($crate::__wrap_internal!($value)) , $($rest)*);
    };
    (@map $map:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        $crate::__wrap_internal!(@map $map [$($key)+] ($crate::__wrap_internal!($value)));
    };
    (@map $map:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        $crate::__wrap_internal!(@map $map ($($key)* $tt) ($($rest)*) ($($rest)*));
    };

    (null) => {
        $crate::Value::Null
    };
    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new().into_boxed_slice())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::__wrap_internal!(@array [] $($tt)+).into_boxed_slice())
    };
    ({}) => {
        $crate::Value::Map($crate::Map::default())
    };
    ({ $($tt:tt)+ }) => {
        $crate::Value::Map({
            let mut map = $crate::Map::default();
            $crate::__wrap_internal!(@map map () ($($tt)+) ($($tt)+));
            map
        })
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
