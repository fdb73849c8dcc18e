//! Helper functions for safe JSON parsing
//!
//! These functions provide safe access to JSON values with proper error
//! handling, avoiding unwrap() and providing clear error messages.

use crate::error::{SceneError, SceneResult};
use serde_json::Value;

/// Safely get a string value from a JSON object
pub fn get_str<'a>(obj: &'a Value, key: &str) -> SceneResult<&'a str> {
    let value = obj
        .get(key)
        .ok_or_else(|| SceneError::MissingField(key.to_string()))?;
    value.as_str().ok_or_else(|| {
        SceneError::InvalidValue(key.to_string(), format!("Expected string, got: {:?}", value))
    })
}

/// Safely get a u64 value from a JSON object
pub fn get_u64(obj: &Value, key: &str) -> SceneResult<u64> {
    let value = obj
        .get(key)
        .ok_or_else(|| SceneError::MissingField(key.to_string()))?;
    value.as_u64().ok_or_else(|| {
        SceneError::InvalidValue(key.to_string(), format!("Expected u64, got: {:?}", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_str() {
        let obj = json!({"name": "Pasan"});
        assert_eq!(get_str(&obj, "name").unwrap(), "Pasan");
        assert!(matches!(
            get_str(&obj, "missing"),
            Err(SceneError::MissingField(_))
        ));
        let wrong = json!({"name": 4});
        assert!(matches!(
            get_str(&wrong, "name"),
            Err(SceneError::InvalidValue(_, _))
        ));
    }

    #[test]
    fn test_get_u64() {
        let obj = json!({"age": 30});
        assert_eq!(get_u64(&obj, "age").unwrap(), 30);
        assert!(get_u64(&json!({"age": "thirty"}), "age").is_err());
    }
}
