//! # jsonwrap
//!
//! A dynamically-typed, immutable container for JSON-like data.
//!
//! [`Value`] is a closed enum over null, booleans, integers, floats, strings, arrays and maps.
//! It can be built from loosely-typed native input ([`Value::parse`]), from JSON text
//! ([`Value::from_json`]) or from literals ([`wrap!`]), and inspected with lookups that never
//! panic: the optional form ([`Value::get`]) returns `None` and the indexing form
//! (`value["key"]`, `value[0]`) returns [`Value::Null`] when nothing is found.
//!
//! ```
//! use jsonwrap::{wrap, Value};
//!
//! let value = wrap!({"nested": {"response": [1, 2, 3, 4]}});
//! assert_eq!(value["nested"]["response"][2], 3);
//! assert_eq!(value.get("missing"), None);
//! assert_eq!(value["missing"][0], Value::Null);
//! ```

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
/// Forwards to `tracing::trace` when the `tracing` feature is enabled.
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
/// Forwards to `tracing::debug` when the `tracing` feature is enabled.
macro_rules! debug {
    ($($tt:tt)*) => {};
}

mod error;
mod impls;
mod macros;
mod parse;
mod value;

pub use compact_str::CompactString;
pub use error::ParseError;
pub use value::{Entries, Index, Kind, Map, Value, Values};
