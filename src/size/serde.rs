//! Host applications keep sizes in their own serde-backed config structs.
//! These impls let a `ByteSize` field accept `"500 MB"` from TOML/JSON text
//! or a raw integer byte count, and emit the canonical form on the way out.

use super::ByteSize;
use crate::parse;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Serializes as the canonical string (`"2GB"`, `"1025B"`): exact,
/// round-trippable, and human-editable in config files.
impl Serialize for ByteSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ByteSizeVisitor;

        impl Visitor<'_> for ByteSizeVisitor {
            type Value = ByteSize;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a byte size string or an integer byte count")
            }

            fn visit_str<E>(self, v: &str) -> Result<ByteSize, E>
            where
                E: de::Error,
            {
                parse::parse_str(v).map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<ByteSize, E>
            where
                E: de::Error,
            {
                Ok(ByteSize::new(v))
            }

            // TOML hands integers over as i64
            fn visit_i64<E>(self, v: i64) -> Result<ByteSize, E>
            where
                E: de::Error,
            {
                u64::try_from(v)
                    .map(ByteSize::new)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(ByteSizeVisitor)
    }
}
