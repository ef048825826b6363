//! Deserialization helpers for the loosely typed fields Sleeper returns.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

/// Sleeper sends the season year as a string ("2023"); older payloads and
/// fixtures sometimes carry a bare number.
pub fn season_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid season year '{s}'"))),
        StringOrNumber::Number(n) => {
            i32::try_from(n).map_err(|_| serde::de::Error::custom("season year out of range"))
        }
    }
}

/// Same as [`season_year`] for optional fields.
pub fn optional_season_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)?
        .map(|value| match value {
            StringOrNumber::String(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| serde::de::Error::custom(format!("invalid season year '{s}'"))),
            StringOrNumber::Number(n) => i32::try_from(n)
                .map_err(|_| serde::de::Error::custom("season year out of range")),
        })
        .transpose()
}

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
