//! Error types for the picture cutter.
//!
//! Only construction can fail hard. Everything else guards on readiness and
//! quietly does nothing, so callers may invoke operations in any order.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutterError {
    /// Missing or unresolvable container.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The drawing surface could not be created or acquired.
    #[error("surface error: {0}")]
    Surface(String),
    /// An image source failed to load or decode.
    #[error("decode error: {0}")]
    Decode(String),
    /// The surface contents could not be encoded.
    #[error("export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, CutterError>;

/// Readable text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CutterError::Configuration("no element".to_string());
        assert_eq!(err.to_string(), "configuration error: no element");

        let err = CutterError::Decode("404".to_string());
        assert_eq!(err.to_string(), "decode error: 404");

        let err = CutterError::Export("tainted canvas".to_string());
        assert!(err.to_string().contains("tainted canvas"));
    }

    #[test]
    fn result_alias() {
        let ok: Result<u8> = Ok(1);
        assert!(ok.is_ok());
        let failed: Result<u8> = Err(CutterError::Surface("no 2d context".to_string()));
        assert_eq!(failed, Err(CutterError::Surface("no 2d context".to_string())));
    }
}
