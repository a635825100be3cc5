//! Unified error type for the public API
//!
//! Internal crates maintain their domain-specific errors for precise
//! handling. This unified type provides a clean surface for SDK consumers;
//! the underlying error is always available through the enum variants.

use thiserror::Error;

/// Unified error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum OpcUaError {
    /// UA Binary encoding or decoding error
    #[error("encoding error: {0}")]
    Encoding(#[from] opcua_protocol::BinaryError),

    /// Security policy or cryptographic error
    #[error("security error: {0}")]
    Security(#[from] opcua_crypto::CryptoError),
}

impl OpcUaError {
    /// Returns true if the error came from the binary codec.
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Returns true if the error came from the security layer.
    pub fn is_security_error(&self) -> bool {
        matches!(self, Self::Security(_))
    }
}
