//! Metrics snapshot model.
//!
//! The dashboard treats metrics as an opaque JSON document. The only shape
//! check happens where a snapshot enters the system: it must be a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when validating a metrics payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsValidationError {
    /// The payload was valid JSON but not an object.
    #[error("Metrics payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// The latest metrics payload, replaced wholesale on every fetch.
///
/// # Example
///
/// ```
/// use shared::models::MetricsSnapshot;
/// use serde_json::json;
///
/// let snapshot = MetricsSnapshot::try_from(json!({"accuracy": 0.95})).unwrap();
/// assert_eq!(snapshot.get("accuracy"), Some(&json!(0.95)));
///
/// assert!(MetricsSnapshot::try_from(json!([1, 2, 3])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSnapshot(Map<String, Value>);

impl MetricsSnapshot {
    /// Creates a snapshot from an already-built JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts the snapshot back into a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for MetricsSnapshot {
    type Error = MetricsValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err(MetricsValidationError::NotAnObject("null")),
            Value::Bool(_) => Err(MetricsValidationError::NotAnObject("boolean")),
            Value::Number(_) => Err(MetricsValidationError::NotAnObject("number")),
            Value::String(_) => Err(MetricsValidationError::NotAnObject("string")),
            Value::Array(_) => Err(MetricsValidationError::NotAnObject("array")),
        }
    }
}
