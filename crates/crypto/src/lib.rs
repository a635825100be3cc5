//! OPC UA Secure Channel cryptography
//!
//! This crate provides the security-policy engine behind a secure channel:
//! - the closed catalog of named policies and their canonical URIs
//! - P_SHA1 / P_SHA256 key derivation from the channel nonces
//! - symmetric (AES-CBC, HMAC) and asymmetric (RSA) operation sets
//! - the immutable [`EncryptionAlgorithm`] bundle a channel holds per token
//!
//! # Security Features
//!
//! - **Zeroization**: derived key material uses `zeroize` to clear memory on
//!   drop
//! - **Constant-time comparison**: MAC verification uses
//!   `subtle::ConstantTimeEq`
//! - **Non-oracular failures**: decryption and verification errors carry no
//!   positional detail

pub mod asymmetric;
pub mod derive;
pub mod error;
pub mod policy;
pub mod symmetric;
pub mod types;

// Re-export commonly used types
pub use error::{CryptoError, Result};
pub use policy::{uris, EncryptionAlgorithm, SecurityPolicy};
pub use types::{DerivedKeys, HashAlgorithm};

// Re-export the RSA key types consumed at the crate boundary
pub use rsa::{RsaPrivateKey, RsaPublicKey};
