//! Wire segment encoding.
//!
//! Tokens travel as three unpadded base64url segments joined by `.`.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::error::TokenError;

/// Number of segments in a wire token.
pub const SEGMENT_COUNT: usize = 3;

/// Encode raw bytes as an unpadded base64url segment.
///
/// Accepts any byte string; the empty input encodes to the empty string.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment back to raw bytes.
pub fn decode(segment: &str) -> Result<Vec<u8>, TokenError> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}

/// Join segments with `.` separators. An empty list yields an empty string.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

/// Split wire text into exactly three segments.
///
/// Anything other than three dot-separated parts is rejected before any
/// base64 decoding happens.
pub fn split_token(wire: &str) -> Result<[&str; SEGMENT_COUNT], TokenError> {
    let parts: Vec<&str> = wire.split('.').collect();
    if parts.len() != SEGMENT_COUNT {
        return Err(TokenError::InvalidTokenShape {
            segments: parts.len(),
        });
    }
    Ok([parts[0], parts[1], parts[2]])
}
