//! Declarative macros for reducing numeric domain boilerplate.
//!
//! Every domain type shares the same accessors, formatting, serde glue and
//! raw-value interop; only the predicate differs. These macros generate the
//! shared parts so each domain module only spells out its constructor.

/// Generates accessors, `Debug`, `Display` and the optional serde impls.
///
/// The bracketed bounds are the ones the domain's `new` requires; they are
/// repeated on `Deserialize` so decoding can re-run the predicate.
///
/// # Usage
/// ```ignore
/// impl_domain!(Positive, "value > 0", [Number]);
/// impl_domain!(MinusOneToOne, "-1 <= value <= 1", [Number + Neg<Output = V>]);
/// ```
macro_rules! impl_domain {
    ($type:ident, $predicate:literal, [$($bound:tt)+]) => {
        impl<V: Copy> $type<V> {
            /// Returns the wrapped value.
            #[inline]
            pub fn value(&self) -> V {
                self.value
            }
        }

        impl<V> $type<V> {
            /// Consumes the wrapper and returns the raw value.
            #[inline]
            pub fn into_inner(self) -> V {
                self.value
            }
        }

        impl<V: ::std::fmt::Debug> ::std::fmt::Debug for $type<V> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({:?})", stringify!($type), self.value)
            }
        }

        impl<V: ::std::fmt::Display> ::std::fmt::Display for $type<V> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.value, f)
            }
        }

        #[cfg(feature = "serde")]
        impl<V: ::serde::Serialize> ::serde::Serialize for $type<V> {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&self.value, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, V> ::serde::Deserialize<'de> for $type<V>
        where
            V: $($bound)+ + ::serde::Deserialize<'de> + ::std::fmt::Display,
        {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = V::deserialize(deserializer)?;
                $type::new(value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(
                        $crate::error::DomainError::out_of_domain(
                            stringify!($type),
                            $predicate,
                            value,
                        ),
                    )
                })
            }
        }
    };
}

/// Generates symmetric comparisons with the raw type, `TryFrom` and the
/// unwrapping `From` for each listed primitive.
///
/// Written per primitive because `impl<V> PartialEq<Positive<V>> for V`
/// is rejected by the orphan rules.
macro_rules! impl_raw_interop {
    ($type:ident, $predicate:literal; $($t:ty),+) => {
        $(
            impl PartialEq<$t> for $type<$t> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.value == *other
                }
            }

            impl PartialEq<$type<$t>> for $t {
                #[inline]
                fn eq(&self, other: &$type<$t>) -> bool {
                    *self == other.value
                }
            }

            impl PartialOrd<$t> for $type<$t> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<::std::cmp::Ordering> {
                    self.value.partial_cmp(other)
                }
            }

            impl PartialOrd<$type<$t>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &$type<$t>) -> Option<::std::cmp::Ordering> {
                    self.partial_cmp(&other.value)
                }
            }

            impl TryFrom<$t> for $type<$t> {
                type Error = $crate::error::DomainError;

                fn try_from(value: $t) -> $crate::error::Result<Self> {
                    $type::new(value).ok_or_else(|| {
                        $crate::error::DomainError::out_of_domain(stringify!($type), $predicate, value)
                    })
                }
            }

            impl From<$type<$t>> for $t {
                #[inline]
                fn from(domain: $type<$t>) -> $t {
                    domain.value
                }
            }
        )+
    };
}

/// Invokes `$mac` with every supported numeric primitive appended.
macro_rules! for_each_number {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
        #[cfg(feature = "decimal")]
        $mac!($($args)*; rust_decimal::Decimal);
    };
}

/// Like [`for_each_number`], restricted to primitives that can be negated.
macro_rules! for_each_signed_number {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; i8, i16, i32, i64, i128, isize, f32, f64);
        #[cfg(feature = "decimal")]
        $mac!($($args)*; rust_decimal::Decimal);
    };
}

// Macros are used via #[macro_use] on the module declaration.
