//! Base64 helpers for the Judge0 `base64_encoded=true` mode

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a Judge0 base64 field into text.
///
/// Judge0 wraps encoded output every 60 columns, so whitespace is stripped
/// first. Invalid UTF-8 is replaced; undecodable input is returned verbatim.
pub fn decode_lossy(encoded: &str) -> String {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "Judge0 returned a field that is not valid base64");
            encoded.to_string()
        }
    }
}
