//! Prelude
//!
//! The prelude module provides a convenient way to import commonly used
//! types and traits.
//!
//! # Example
//!
//! ```rust
//! use opcua::prelude::*;
//!
//! # fn example() -> Result<(), OpcUaError> {
//! let policy = SecurityPolicy::from_uri(
//!     "http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256",
//! )?;
//! let local = policy.symmetric(&[0x00; 32], &[0x01; 32])?;
//! let peer = policy.symmetric(&[0x01; 32], &[0x00; 32])?;
//!
//! let sealed = seal_chunk(&local, b"serialized message")?;
//! let body = open_chunk(&peer, &sealed)?;
//! assert_eq!(body, b"serialized message");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Re-export core operations
pub use crate::error::OpcUaError;
pub use crate::securechannel::{open_chunk, seal_chunk};

// Re-export protocol types
pub use opcua_protocol::{
    BinaryDecode, BinaryEncode, BinaryError, DateTime, DiagnosticInfo, ExtensionObject, Guid,
    LocalizedText, NodeId, QualifiedName, Reader, RequestHeader, ResponseHeader, ServiceMessage,
    StatusCode, Writer,
};

// Re-export crypto types
pub use opcua_crypto::{
    CryptoError, DerivedKeys, EncryptionAlgorithm, RsaPrivateKey, RsaPublicKey, SecurityPolicy,
};
