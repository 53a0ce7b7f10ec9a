//! Token header.

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Value of the `typ` field on every token.
pub const TOKEN_TYPE: &str = "JWT";

/// The one signature algorithm this crate produces and accepts.
pub const ALGORITHM: &str = "EdDSA";

/// Header of a signed token.
///
/// `typ` and `alg` are always serialized, even when empty; `kid` and `jku`
/// appear only when set. Field order is the wire order. A header missing
/// `typ` or `alg` still parses (the fields come back empty) and is rejected
/// at verification instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub typ: String,
    #[serde(default)]
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jku: Option<String>,
}

impl Header {
    /// A plain header: `typ = "JWT"`, `alg = "EdDSA"`.
    pub fn new() -> Self {
        Self {
            typ: TOKEN_TYPE.to_string(),
            alg: ALGORITHM.to_string(),
            kid: None,
            jku: None,
        }
    }

    /// A header carrying a key identifier.
    pub fn with_key_id(kid: &str) -> Result<Self, TokenError> {
        if kid.is_empty() {
            return Err(TokenError::InvalidArgument(
                "key id must not be empty".to_string(),
            ));
        }
        let mut header = Self::new();
        header.kid = Some(kid.to_string());
        Ok(header)
    }

    /// A header carrying a key identifier plus the HTTPS URL it can be
    /// fetched from.
    pub fn with_key_url(kid: &str, jku: &str) -> Result<Self, TokenError> {
        let mut header = Self::with_key_id(kid)?;
        if !jku.starts_with("https://") || jku.len() <= "https://".len() {
            return Err(TokenError::InvalidArgument(format!(
                "key url must be an https URL, got {jku:?}"
            )));
        }
        header.jku = Some(jku.to_string());
        Ok(header)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
