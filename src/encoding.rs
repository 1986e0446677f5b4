//! Transport encoding for image payloads. The provider ships images as
//! standard base64 strings; everything downstream works on raw bytes.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, StudioError};

/// Decode one payload string into image bytes.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| StudioError::Decode(format!("invalid base64 payload: {e}")))
}

/// Encode raw bytes back into the transport form.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
