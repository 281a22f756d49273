use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Reddit sometimes sends its timestamps as floats and sometimes as integers, and relationship
/// listings omit them or send `null` for some entries, so we need some custom logic to parse
/// them.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where D: Deserializer<'de>
{
    deserializer.deserialize_any(TsVisitor)
}

/// Like `deserialize_timestamp`, but accepts `null`. Use with `#[serde(default)]` so that a
/// missing field is also `None`.
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where D: Deserializer<'de>
{
    deserializer.deserialize_option(OptionalTsVisitor)
}

struct TsVisitor;

impl<'de> Visitor<'de> for TsVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "A timestamp that's either a float or an integer")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where E: de::Error
    {
        i64::try_from(v).map_err(|_| E::custom("timestamp out of range"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(v as i64)
    }
}

struct OptionalTsVisitor;

impl<'de> Visitor<'de> for OptionalTsVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "A timestamp that's either a float, an integer or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where D: Deserializer<'de>
    {
        deserialize_timestamp(deserializer).map(Some)
    }
}
