//! Standard base64 encoding of template content.
//!
//! Whole-file encoding, no compression, no chunking. Encoding never fails;
//! [`decode`] is the exact inverse and is what the emitted loader performs
//! at runtime.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode raw bytes as standard base64 (standard alphabet, padded).
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`encode`].
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text)
}
