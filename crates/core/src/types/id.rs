//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`, so the ID is stored
///   as a bare JSON number
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
/// - `FromStr` so IDs can be taken from command-line arguments
///
/// # Example
///
/// ```rust
/// # use luxe_core::define_id;
/// define_id!(ItemId);
/// define_id!(OrderId);
///
/// let item_id = ItemId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ItemId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Cart line items are keyed by a millisecond-derived number, so they get the
// wide integer type.
define_id!(LineItemId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_id_roundtrip_i64() {
        let id = LineItemId::new(1_700_000_000_123);
        assert_eq!(id.as_i64(), 1_700_000_000_123);
        assert_eq!(i64::from(id), 1_700_000_000_123);
        assert_eq!(LineItemId::from(42), LineItemId::new(42));
    }

    #[test]
    fn test_line_item_id_serializes_as_number() {
        let id = LineItemId::new(1_700_000_000_123);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1700000000123");
        let parsed: LineItemId = serde_json::from_str("1700000000123").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_line_item_id_from_str() {
        let id: LineItemId = " 17 ".parse().unwrap();
        assert_eq!(id, LineItemId::new(17));
        assert!("abc".parse::<LineItemId>().is_err());
    }

    #[test]
    fn test_line_item_id_ordering() {
        assert!(LineItemId::new(1) < LineItemId::new(2));
        assert_eq!(format!("{}", LineItemId::new(9)), "9");
    }
}
