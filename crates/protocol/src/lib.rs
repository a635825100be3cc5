//! OPC UA Binary protocol types
//!
//! This crate contains the UA Binary encoding kernel:
//! - the byte codec (little-endian reader/writer with UA null semantics)
//! - the built-in data types (NodeId, DateTime, LocalizedText, ...)
//! - the service messages and their TypeId registry
//!
//! This crate contains NO cryptographic operations and NO I/O beyond
//! in-memory buffers. It is purely focused on data structures and bit-exact
//! serialization.

pub mod binary;
pub mod datatypes;
pub mod services;

// Re-export commonly used types
pub use binary::{BinaryDecode, BinaryEncode, BinaryError, Reader, Writer};

pub use datatypes::{
    DateTime, DiagnosticInfo, ExtensionObject, ExtensionObjectBody, Guid, LocalizedText, NodeId,
    QualifiedName, StatusCode,
};

pub use services::{RequestHeader, ResponseHeader, ServiceMessage};
