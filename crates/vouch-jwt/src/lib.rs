//! # vouch-jwt
//!
//! Compact signed tokens: three unpadded base64url segments joined by `.`,
//! carrying a JSON header, an application-defined JSON payload, and an
//! Ed25519 signature over the first two segments.
//!
//! This crate provides functionality for:
//! - Generating Ed25519 keypairs and persisting them as hex files
//! - Signing a header/payload pair into wire text
//! - Parsing wire text back into header, payload, and signature
//! - Verifying signatures and the optional `exp`/`nbf` claims
//!
//! ## Wire format
//!
//! ```text
//! base64url(header-json) . base64url(payload-json) . base64url(signature)
//! ```
//!
//! The signature always covers the exact received bytes of the first two
//! segments. Verification uses one fixed algorithm (`EdDSA`); the header's
//! `alg` field is an assertion to check, never a dispatch key, so a token
//! cannot talk the verifier into a weaker scheme.

pub mod error;
pub mod header;
pub mod keys;
pub mod payload;
pub mod segment;
pub mod sign;
pub mod token;
pub mod verify;

pub use error::TokenError;
pub use header::{ALGORITHM, Header, TOKEN_TYPE};
pub use keys::{KeySource, Keypair, load_public_key_file, load_public_key_hex};
pub use payload::Payload;
pub use sign::TokenSigner;
pub use token::Token;
pub use verify::TokenVerifier;
