//! SCA challenge signing with a local RSA private key
//!
//! The remote API confirms step-up authentication by verifying an RSA
//! PKCS#1 v1.5 signature (SHA-256 digest) over the challenge token it
//! issued. The private key is read from disk on every signing call; a run
//! encounters at most a handful of challenges and the key must never be
//! held longer than needed.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Signing errors
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// Private key file missing or unreadable
    #[error("key read error: {0}")]
    KeyRead(String),

    /// Key material malformed or incompatible with the signature algorithm
    #[error("signing error: {0}")]
    Signing(String),
}

/// Result type for signing operations
pub type SignerResult<T> = Result<T, SignerError>;

/// Signs SCA challenge tokens with a PEM-encoded RSA private key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key_path: PathBuf,
}

impl RequestSigner {
    /// Create a signer for the key at `key_path`
    ///
    /// The key is not touched until [`sign`](Self::sign) is called.
    pub fn new<P: Into<PathBuf>>(key_path: P) -> Self {
        Self {
            key_path: key_path.into(),
        }
    }

    /// Path of the private key file
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Sign a challenge token, returning the base64-encoded signature
    ///
    /// Reads the private key from disk on every call.
    ///
    /// # Errors
    /// Returns [`SignerError::KeyRead`] if the key file cannot be read and
    /// [`SignerError::Signing`] if the key material is unusable. Neither is
    /// retried by callers.
    pub fn sign(&self, challenge: &[u8]) -> SignerResult<String> {
        let pem = std::fs::read_to_string(&self.key_path).map_err(|e| {
            SignerError::KeyRead(format!(
                "failed to read private key {}: {}",
                self.key_path.display(),
                e
            ))
        })?;

        let key = parse_private_key(&pem)?;
        let signing_key = SigningKey::<Sha256>::new(key);

        let signature = signing_key
            .try_sign(challenge)
            .map_err(|e| SignerError::Signing(format!("RSA signing failed: {e}")))?;

        debug!(
            key = %self.key_path.display(),
            challenge_len = challenge.len(),
            "signed SCA challenge"
        );

        Ok(BASE64.encode(signature.to_bytes()))
    }
}

/// Parse a PEM private key in either PKCS#8 or PKCS#1 encoding
fn parse_private_key(pem: &str) -> SignerResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| SignerError::Signing(format!("unsupported private key material: {e}")))
}
