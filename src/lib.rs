//! OPC UA secure-channel core: security policies and UA Binary serialization
//!
//! The workspace splits along the protocol/crypto seam:
//! - [`opcua_protocol`] (re-exported as [`protocol`]) holds the UA Binary
//!   codec, the built-in data types and the service message registry
//! - [`opcua_crypto`] (re-exported as [`crypto`]) holds the security-policy
//!   catalog, key derivation and the per-token algorithm bundle
//! - this crate composes the two: [`securechannel`] applies a policy bundle
//!   to serialized chunk bodies
//!
//! Transport, certificate validation and session lifecycle live outside this
//! core; it consumes parsed RSA keys and externally generated nonces.

pub mod error;
pub mod prelude;
pub mod securechannel;

pub use error::OpcUaError;
pub use securechannel::{open_chunk, seal_chunk};

pub use opcua_crypto as crypto;
pub use opcua_protocol as protocol;
