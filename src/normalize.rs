//! Capture-reply normalization — functional core.
//!
//! The backend's serialization convention is external and not statically
//! checked: depending on bridge generation and backend language, the reply
//! to `take_photo` arrives either as a `[bytes, mime]` tuple or as a record
//! with snake_case or camelCase field names. This module is the single
//! point of tolerance; everything past it works with one canonical shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A captured photo in canonical form: raw bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("unexpected take_photo reply shape: {0}")]
    Unrecognized(String),

    #[error("reply bytes are not a byte sequence: {0}")]
    BadBytes(String),

    #[error("reply MIME type is not a string: {0}")]
    BadMime(String),
}

/// Reduces a raw `take_photo` reply to the canonical bytes + MIME pair.
///
/// Shapes are tried in order: tuple-like array, then record. Anything else
/// fails with the offending value serialized into the message — the only
/// way to diagnose a drifted backend contract is to see what it sent.
/// Pure; the input is never mutated.
pub fn normalize_capture_result(raw: &Value) -> Result<CapturedImage, ShapeError> {
    match raw {
        Value::Array(items) if items.len() >= 2 => Ok(CapturedImage {
            bytes: decode_bytes(&items[0])?,
            mime_type: decode_mime(&items[1])?,
        }),
        Value::Object(map) => {
            // Positional keys cover backends that serialize a tuple as a
            // record with "0"/"1" indices.
            let bytes = map
                .get("bytes")
                .or_else(|| map.get("0"))
                .ok_or_else(|| ShapeError::Unrecognized(raw.to_string()))?;
            let mime = map
                .get("mime_type")
                .or_else(|| map.get("mimeType"))
                .or_else(|| map.get("1"))
                .ok_or_else(|| ShapeError::Unrecognized(raw.to_string()))?;
            Ok(CapturedImage {
                bytes: decode_bytes(bytes)?,
                mime_type: decode_mime(mime)?,
            })
        }
        other => Err(ShapeError::Unrecognized(other.to_string())),
    }
}

fn decode_bytes(value: &Value) -> Result<Vec<u8>, ShapeError> {
    serde_json::from_value(value.clone()).map_err(|_| ShapeError::BadBytes(value.to_string()))
}

fn decode_mime(value: &Value) -> Result<String, ShapeError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ShapeError::BadMime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tuple_shape() {
        let image = normalize_capture_result(&json!([[1, 2, 3], "image/png"])).unwrap();
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn record_shape_snake_case() {
        let image =
            normalize_capture_result(&json!({ "bytes": [1, 2, 3], "mime_type": "image/jpeg" }))
                .unwrap();
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn record_shape_camel_case() {
        let image =
            normalize_capture_result(&json!({ "bytes": [1, 2, 3], "mimeType": "image/jpeg" }))
                .unwrap();
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn record_shape_positional_fallback() {
        let image = normalize_capture_result(&json!({ "0": [9], "1": "image/png" })).unwrap();
        assert_eq!(image.bytes, vec![9]);
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn snake_case_field_wins_over_camel_case() {
        let image = normalize_capture_result(&json!({
            "bytes": [7],
            "mime_type": "image/png",
            "mimeType": "image/jpeg",
        }))
        .unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn scalar_fails_with_the_serialized_value() {
        let err = normalize_capture_result(&json!(42)).unwrap_err();
        assert!(matches!(err, ShapeError::Unrecognized(_)));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn short_array_is_unrecognized() {
        let err = normalize_capture_result(&json!([[1, 2, 3]])).unwrap_err();
        assert!(matches!(err, ShapeError::Unrecognized(_)));
    }

    #[test]
    fn non_byte_elements_fail() {
        let err = normalize_capture_result(&json!([[1, 999], "image/png"])).unwrap_err();
        assert!(matches!(err, ShapeError::BadBytes(_)));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn non_string_mime_fails() {
        let err = normalize_capture_result(&json!([[1], 17])).unwrap_err();
        assert!(matches!(err, ShapeError::BadMime(_)));
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn input_is_not_consumed() {
        let raw = json!([[1, 2], "image/png"]);
        let _ = normalize_capture_result(&raw).unwrap();
        assert_eq!(raw, json!([[1, 2], "image/png"]));
    }
}
