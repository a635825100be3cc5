//! Crypto-layer errors
//!
//! Decryption and verification failures are deliberately generic: they carry
//! no detail about which byte differed or which padding check tripped, so an
//! attacker cannot use them as an oracle.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The security policy URI is not in the supported catalog.
    #[error("unsupported security policy: {0}")]
    UnsupportedPolicy(String),

    /// An RSA key fell outside the policy's modulus bounds.
    #[error("{role} key size out of range: expected {min}-{max} bytes, got {got}")]
    InvalidKeySize {
        role: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    /// A channel nonce did not have the length the policy mandates.
    #[error("invalid nonce length: expected {expected} bytes, got {got}")]
    InvalidNonceLength { expected: usize, got: usize },

    /// Ciphertext could not be decrypted.
    #[error("decryption failed")]
    DecryptionFailed,

    /// A signature did not verify.
    #[error("signature verification failed")]
    SignatureInvalid,

    /// Any other cryptographic failure (bad block length, RSA input too
    /// large, cipher initialization).
    #[error("cryptographic operation failed")]
    CryptoFailure,
}

pub type Result<T> = std::result::Result<T, CryptoError>;
