//! Deserialization helpers shared by the raw model

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// GraphQL field carrying the runtime type name
pub const TYPENAME: &str = "__typename";

/// Read `__typename` from an object, or the empty string
pub fn typename_of(value: &Value) -> String {
    value
        .get(TYPENAME)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Decode the payload of a recognised variant.
///
/// A payload that does not match its type is logged and yields `None`,
/// so the caller can keep it as an unrecognised variant.
pub fn decode<T: DeserializeOwned>(value: Value, typename: &str) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!("Malformed {typename} payload: {e}");
            None
        }
    }
}

/// Treat an explicit `null` as the type's default
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a list that may itself be null or contain null entries
pub fn non_null_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let nodes: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(nodes.unwrap_or_default().into_iter().flatten().collect())
}
