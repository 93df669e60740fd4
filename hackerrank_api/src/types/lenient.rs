//! Per-field and per-entry tolerant decoding for list payloads.
//!
//! A single oddly typed value must not fail a whole page. Mistyped fields
//! read as `None`; entries that are not objects read as `T::default()`.
//! Callers then reject the incomplete record on their own terms.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a field as `Some(T)` when it has the expected type, `None` otherwise.
pub(crate) fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Reads a list of entries, replacing each undecodable entry by a default one.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| T::deserialize(value).unwrap_or_default())
            .collect()
    }))
}
