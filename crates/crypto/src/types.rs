//! Key material types
//!
//! Derived symmetric keys zeroize on drop so channel teardown cannot leak
//! them through freed memory.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Hash family used for key derivation and symmetric signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Digest (and HMAC tag) length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }
}

/// One direction's worth of keys derived from the channel nonces.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    pub signing: Vec<u8>,
    pub encryption: Vec<u8>,
    pub iv: Vec<u8>,
}

impl DerivedKeys {
    pub fn new(signing: Vec<u8>, encryption: Vec<u8>, iv: Vec<u8>) -> Self {
        DerivedKeys {
            signing,
            encryption,
            iv,
        }
    }
}
