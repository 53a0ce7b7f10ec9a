//! Error types for token encoding, signing, and verification.

use thiserror::Error;

/// Errors that can occur during token operations.
///
/// Every failure is a distinct variant so callers can tell a forged
/// signature apart from an expired token. Any error means the token
/// must be rejected.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Wire text did not split into exactly three segments.
    #[error("token must have 3 segments, found {segments}")]
    InvalidTokenShape { segments: usize },

    /// A segment was not valid unpadded base64url.
    #[error("malformed segment: {0}")]
    MalformedSegment(#[from] base64::DecodeError),

    /// Header or payload bytes were not the expected JSON shape.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// Payload could not be serialized to JSON.
    #[error("payload not serializable: {0}")]
    EncodingFailed(#[source] serde_json::Error),

    /// Signing was attempted with no private key configured.
    #[error("no private key configured")]
    NotConfigured,

    /// Key material is malformed or has the wrong length.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Header `typ` is not the expected token type.
    #[error("wrong token type {typ:?}, expected \"JWT\"")]
    WrongTokenType { typ: String },

    /// Header `alg` is not the verifier's algorithm.
    #[error("unsupported algorithm {alg:?}, expected \"EdDSA\"")]
    UnsupportedAlgorithm { alg: String },

    /// Signature does not match the signing input.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The `exp` claim is in the past.
    #[error("token has expired at {expired_at}")]
    Expired { expired_at: i64 },

    /// The `nbf` claim is in the future.
    #[error("token not valid before {valid_from}")]
    NotYetValid { valid_from: i64 },

    /// A claim required by the verifier's policy is absent.
    #[error("token missing required claim: {claim}")]
    MissingClaim { claim: String },

    /// Bad input to a header constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error (reading/writing keys).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
