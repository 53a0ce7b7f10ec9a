//! Keypair management and startup key resolution.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SigningKey};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TokenError;

/// An Ed25519 keypair for signing and verifying tokens.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        rng.fill_bytes(&mut seed);
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Build a keypair from 32 private seed bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, TokenError> {
        let seed: [u8; SECRET_KEY_LENGTH] = seed.try_into().map_err(|_| {
            TokenError::InvalidKey(format!(
                "expected {SECRET_KEY_LENGTH} seed bytes, found {}",
                seed.len()
            ))
        })?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// Build a keypair from a hex-encoded private seed.
    pub fn from_seed_hex(hex_seed: &str) -> Result<Self, TokenError> {
        let bytes = hex::decode(hex_seed.trim())
            .map_err(|e| TokenError::InvalidKey(format!("bad hex seed: {e}")))?;
        Self::from_seed(&bytes)
    }

    /// The private seed as a hex string.
    pub fn seed_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// The 32 public key bytes.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The public key as a hex string.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Save the keypair as two hex files.
    pub fn save_to_files(
        &self,
        private_key_path: &Path,
        public_key_path: &Path,
    ) -> Result<(), TokenError> {
        std::fs::write(private_key_path, self.seed_hex())?;
        std::fs::write(public_key_path, self.public_key_hex())?;
        Ok(())
    }

    /// Load a keypair from a private key file.
    pub fn load_from_file(private_key_path: &Path) -> Result<Self, TokenError> {
        let hex_seed = std::fs::read_to_string(private_key_path)?;
        Self::from_seed_hex(&hex_seed)
    }

    /// Load the keypair from disk, generating and persisting one on first
    /// run.
    pub fn load_or_generate(
        private_key_path: &Path,
        public_key_path: &Path,
    ) -> Result<Self, TokenError> {
        if private_key_path.exists() {
            tracing::info!(
                "loading signing key from {}",
                private_key_path.display()
            );
            return Self::load_from_file(private_key_path);
        }

        let keypair = Self::generate();
        keypair.save_to_files(private_key_path, public_key_path)?;
        tracing::info!(
            "generated new signing key at {}",
            private_key_path.display()
        );
        Ok(keypair)
    }
}

/// Load a public key from a hex string (verification-only scenarios).
pub fn load_public_key_hex(hex_key: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], TokenError> {
    let bytes = hex::decode(hex_key.trim())
        .map_err(|e| TokenError::InvalidKey(format!("bad hex key: {e}")))?;
    bytes.as_slice().try_into().map_err(|_| {
        TokenError::InvalidKey(format!(
            "expected {PUBLIC_KEY_LENGTH} bytes, found {}",
            bytes.len()
        ))
    })
}

/// Load a public key from a file.
pub fn load_public_key_file(path: &Path) -> Result<[u8; PUBLIC_KEY_LENGTH], TokenError> {
    let hex_key = std::fs::read_to_string(path)?;
    load_public_key_hex(&hex_key)
}

/// Where key material comes from at startup.
///
/// Each key resolves environment-variable-first, then file. All fields are
/// optional; resolving a key with no configured source fails with
/// [`TokenError::NotConfigured`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeySource {
    /// Environment variable containing the private key (hex-encoded).
    #[serde(default)]
    pub private_key_env: Option<String>,

    /// Path to the private key file.
    #[serde(default)]
    pub private_key_file: Option<PathBuf>,

    /// Environment variable containing the public key (hex-encoded).
    #[serde(default)]
    pub public_key_env: Option<String>,

    /// Path to the public key file.
    #[serde(default)]
    pub public_key_file: Option<PathBuf>,
}

impl KeySource {
    /// Resolve the signing keypair from environment or file.
    pub fn resolve_private(&self) -> Result<Keypair, TokenError> {
        if let Some(env_var) = &self.private_key_env {
            if let Ok(hex_seed) = std::env::var(env_var) {
                return Keypair::from_seed_hex(&hex_seed);
            }
        }

        if let Some(path) = &self.private_key_file {
            if path.exists() {
                return Keypair::load_from_file(path);
            }
        }

        Err(TokenError::NotConfigured)
    }

    /// Resolve the verification key from environment or file.
    pub fn resolve_public(&self) -> Result<[u8; PUBLIC_KEY_LENGTH], TokenError> {
        if let Some(env_var) = &self.public_key_env {
            if let Ok(hex_key) = std::env::var(env_var) {
                return load_public_key_hex(&hex_key);
            }
        }

        if let Some(path) = &self.public_key_file {
            if path.exists() {
                return load_public_key_file(path);
            }
        }

        Err(TokenError::NotConfigured)
    }
}
