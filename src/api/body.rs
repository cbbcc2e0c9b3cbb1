//! Lenient JSON body decoding shared by the stub action handlers.
//!
//! Only the first JSON value in the body is read; anything after it is
//! ignored. A top-level `null` yields the default request, object keys
//! match field names case-insensitively, and unknown keys are ignored.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decode the first JSON value in `body` as `T`.
pub fn decode_first<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("EOF")))?;

    match value {
        Value::Null => Ok(T::default()),
        Value::Object(fields) => serde_json::from_value(Value::Object(fold_keys(fields))),
        Value::Array(_) => Err(serde_json::Error::invalid_type(
            Unexpected::Seq,
            &"a JSON object",
        )),
        other => serde_json::from_value(other),
    }
}

/// Lowercase object keys so `Node_Type` lands on `node_type`. On a folded
/// collision the exact lowercase spelling wins.
fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut exact = Vec::new();

    for (key, value) in fields {
        let lower = key.to_lowercase();
        if lower == key {
            exact.push((key, value));
        } else {
            folded.insert(lower, value);
        }
    }
    folded.extend(exact);
    folded
}

/// Treat an explicit JSON `null` string field as empty.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
