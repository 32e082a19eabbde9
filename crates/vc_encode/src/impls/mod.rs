//! `Encode` implementations for std and third-party types.
//!
//! ## Implemented Menu
//!
//! - natives (written as they are):
//!     - `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `&'static str`, `String`, `Cow<'static, str>`
//!     - `()` (null), `serde_json::Value`
//! - serde-backed: `char`, `i128`, `u128`
//! - transparent: `Option<T>` (`None` is null), `Box<T>`, `Rc<T>`, `Arc<T>`
//! - lists: `Vec<T>`, `[T; N]`, `VecDeque<T>`, tuples of up to 8 elements
//! - sets: `HashSet<T, S>`, `BTreeSet<T>`, `hashbrown::HashSet<T, S>`
//! - maps: `HashMap<K, V, S>`, `BTreeMap<K, V>`, `hashbrown::HashMap<K, V, S>`
//! - opaque, handled by the built-in table:
//!     - `PathBuf`, `Ipv4Addr`, `Ipv6Addr`, `IpAddr`, `core::time::Duration`
//!     - "chrono" feature: `NaiveDateTime`, `NaiveDate`, `NaiveTime`,
//!       `TimeDelta`, `DateTime<Utc | FixedOffset | Local>`
//!     - "uuid" feature: `Uuid`
//!     - "decimal" feature: `rust_decimal::Decimal`
//!     - "ipnet" feature: `IpNet`, `Ipv4Net`, `Ipv6Net`

// -----------------------------------------------------------------------------
// Modules

mod collections;
mod external;
mod native;
mod std_types;
mod tuple;

// -----------------------------------------------------------------------------
// Macros

/// Implements [`Encode`](crate::Encode) for types without structure.
///
/// The dispatcher cannot walk such a value. It must be claimed by a
/// registered encoder, else encoding fails with a type mismatch.
///
/// ```
/// use serde_json::Value;
/// use vc_encode::{EncodeOptions, impl_encode_opaque, registry::Encoders};
///
/// struct Celsius(f64);
/// impl_encode_opaque!(Celsius);
///
/// assert!(vc_encode::to_value(&Celsius(21.5)).is_err());
///
/// let options = EncodeOptions::new()
///     .encoders(Encoders::new().with::<Celsius>(|c| Ok(Value::from(format!("{}C", c.0)))));
/// assert_eq!(vc_encode::to_value_with(&Celsius(21.5), &options).unwrap(), "21.5C");
/// ```
#[macro_export]
macro_rules! impl_encode_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                #[inline]
                fn encode_ref(&self) -> $crate::ops::EncodeRef<'_> {
                    $crate::ops::EncodeRef::Opaque
                }
            }
        )+
    };
}
