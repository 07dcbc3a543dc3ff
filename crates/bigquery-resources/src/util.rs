#[inline]
pub fn is_false(value: &bool) -> bool {
    !*value
}

/// BigQuery encodes 64 bit integer fields as decimal strings on the wire.
/// These helper modules serialize them back out as strings, and accept either
/// representation when deserializing.
macro_rules! stringly_int_mod {
    ($name:ident => $int:ty) => {
        pub mod $name {
            use core::fmt;

            use serde::de;

            struct IntVisitor;

            impl<'de> de::Visitor<'de> for IntVisitor {
                type Value = $int;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(concat!(
                        stringify!($int),
                        " encoded as a number or a decimal string"
                    ))
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    v.parse()
                        .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                }

                fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    <$int>::try_from(v)
                        .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    <$int>::try_from(v)
                        .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
                }
            }

            pub mod optional {
                use core::fmt;

                use serde::de;

                struct OptionalIntVisitor;

                impl<'de> de::Visitor<'de> for OptionalIntVisitor {
                    type Value = Option<$int>;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str(concat!(
                            "an optional ",
                            stringify!($int),
                            " encoded as a number or a decimal string"
                        ))
                    }

                    #[inline]
                    fn visit_none<E>(self) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        Ok(None)
                    }

                    #[inline]
                    fn visit_unit<E>(self) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        Ok(None)
                    }

                    #[inline]
                    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                    where
                        D: de::Deserializer<'de>,
                    {
                        deserializer.deserialize_any(super::IntVisitor).map(Some)
                    }
                }

                pub fn serialize<S>(
                    value: &Option<$int>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    match value {
                        Some(int) => serializer.collect_str(itoa::Buffer::new().format(*int)),
                        None => serializer.serialize_none(),
                    }
                }

                pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<$int>, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserializer.deserialize_option(OptionalIntVisitor)
                }
            }
        }
    };
}

stringly_int_mod!(int64 => i64);
stringly_int_mod!(uint64 => u64);
