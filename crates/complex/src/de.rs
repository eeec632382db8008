//! [`Complex`] deserialization.
//!
//! Accepts, from self describing formats:
//! - a `[re, im]` sequence (the format [`Serialize`](serde::Serialize) produces),
//! - a `{ "re": .., "im": .. }` map, where `im` is optional,
//! - a bare number, which becomes a purely real value,
//! - a string in the stream form (`"3 4 i"`), parsed with [`FromStr`](std::str::FromStr).
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};

use crate::Complex;

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ComplexVisitor)
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Field {
    Re,
    Im,
}

struct ComplexVisitor;

impl<'de> de::Visitor<'de> for ComplexVisitor {
    type Value = Complex;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a [re, im] pair, a map with 're' and 'im' fields, a real number, \
             or a '<re> <im> i' string",
        )
    }

    fn visit_seq<S>(self, mut seq_access: S) -> Result<Self::Value, S::Error>
    where
        S: de::SeqAccess<'de>,
    {
        let re: f64 = seq_access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let im: f64 = seq_access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        if seq_access.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }

        Ok(Complex::new(re, im))
    }

    fn visit_map<M>(self, mut map_access: M) -> Result<Self::Value, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        let mut re = None;
        let mut im = None;

        while let Some(field) = map_access.next_key::<Field>()? {
            match field {
                Field::Re if re.is_some() => return Err(de::Error::duplicate_field("re")),
                Field::Im if im.is_some() => return Err(de::Error::duplicate_field("im")),
                Field::Re => re = Some(map_access.next_value::<f64>()?),
                Field::Im => im = Some(map_access.next_value::<f64>()?),
            }
        }

        let re = re.ok_or_else(|| de::Error::missing_field("re"))?;
        Ok(Complex::new(re, im.unwrap_or(0.0)))
    }

    fn visit_i64<E>(self, int: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from(int))
    }

    fn visit_u64<E>(self, int: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from(int))
    }

    fn visit_i128<E>(self, int: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from(int))
    }

    fn visit_u128<E>(self, int: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from(int))
    }

    fn visit_f64<E>(self, float: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from_real(float))
    }

    fn visit_str<E>(self, string: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        string.parse().map_err(|err: crate::ReadError| err.into_de_error(string))
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        std::str::from_utf8(bytes)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Bytes(bytes), &self))
            .and_then(|string| self.visit_str(string))
    }
}
