//! The security-policy catalog
//!
//! A closed set of named profiles, each a bundle of algorithm choices and
//! numeric limits. A policy is selected by its canonical URI at channel open;
//! the two constructors materialize an [`EncryptionAlgorithm`] for the
//! symmetric (per-token) and asymmetric (certificate-keyed) phases.

mod algorithm;

pub use algorithm::EncryptionAlgorithm;

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::asymmetric::{key_size, private_key_size, RsaEncryptionScheme, RsaSignatureScheme};
use crate::derive::derive_keys;
use crate::error::{CryptoError, Result};
use crate::policy::algorithm::AlgorithmKind;
use crate::symmetric::AES_BLOCK_SIZE;
use crate::types::HashAlgorithm;

pub mod uris {
    //! Canonical URI strings from the OPC UA security profiles.

    pub const POLICY_NONE: &str = "http://opcfoundation.org/UA/SecurityPolicy#None";
    pub const POLICY_BASIC128_RSA15: &str =
        "http://opcfoundation.org/UA/SecurityPolicy#Basic128Rsa15";
    pub const POLICY_BASIC256: &str = "http://opcfoundation.org/UA/SecurityPolicy#Basic256";
    pub const POLICY_BASIC256_SHA256: &str =
        "http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256";
    pub const POLICY_AES128_SHA256_RSA_OAEP: &str =
        "http://opcfoundation.org/UA/SecurityPolicy#Aes128_Sha256_RsaOaep";
    pub const POLICY_AES256_SHA256_RSA_PSS: &str =
        "http://opcfoundation.org/UA/SecurityPolicy#Aes256_Sha256_RsaPss";

    pub const HMAC_SHA1: &str = "http://www.w3.org/2000/09/xmldsig#hmac-sha1";
    pub const HMAC_SHA256: &str = "http://www.w3.org/2000/09/xmldsig#hmac-sha256";
    pub const AES128_CBC: &str = "http://www.w3.org/2001/04/xmlenc#aes128-cbc";
    pub const AES256_CBC: &str = "http://www.w3.org/2001/04/xmlenc#aes256-cbc";
    pub const RSA_SHA1: &str = "http://www.w3.org/2000/09/xmldsig#rsa-sha1";
    pub const RSA_SHA256: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256";
    pub const RSA_PSS_SHA256: &str = "http://opcfoundation.org/UA/security/rsa-pss-sha2-256";
    pub const RSA_15: &str = "http://www.w3.org/2001/04/xmlenc#rsa-1_5";
    pub const RSA_OAEP: &str = "http://www.w3.org/2001/04/xmlenc#rsa-oaep";
    pub const RSA_OAEP_SHA256: &str = "http://opcfoundation.org/UA/security/rsa-oaep-sha2-256";
}

/// The closed catalog of named security policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityPolicy {
    None,
    Basic128Rsa15,
    Basic256,
    Basic256Sha256,
    Aes128Sha256RsaOaep,
    Aes256Sha256RsaPss,
}

impl SecurityPolicy {
    pub const ALL: [SecurityPolicy; 6] = [
        SecurityPolicy::None,
        SecurityPolicy::Basic128Rsa15,
        SecurityPolicy::Basic256,
        SecurityPolicy::Basic256Sha256,
        SecurityPolicy::Aes128Sha256RsaOaep,
        SecurityPolicy::Aes256Sha256RsaPss,
    ];

    /// Select a policy by its canonical URI.
    pub fn from_uri(uri: &str) -> Result<Self> {
        match uri {
            uris::POLICY_NONE => Ok(SecurityPolicy::None),
            uris::POLICY_BASIC128_RSA15 => Ok(SecurityPolicy::Basic128Rsa15),
            uris::POLICY_BASIC256 => Ok(SecurityPolicy::Basic256),
            uris::POLICY_BASIC256_SHA256 => Ok(SecurityPolicy::Basic256Sha256),
            uris::POLICY_AES128_SHA256_RSA_OAEP => Ok(SecurityPolicy::Aes128Sha256RsaOaep),
            uris::POLICY_AES256_SHA256_RSA_PSS => Ok(SecurityPolicy::Aes256Sha256RsaPss),
            other => Err(CryptoError::UnsupportedPolicy(other.to_string())),
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            SecurityPolicy::None => uris::POLICY_NONE,
            SecurityPolicy::Basic128Rsa15 => uris::POLICY_BASIC128_RSA15,
            SecurityPolicy::Basic256 => uris::POLICY_BASIC256,
            SecurityPolicy::Basic256Sha256 => uris::POLICY_BASIC256_SHA256,
            SecurityPolicy::Aes128Sha256RsaOaep => uris::POLICY_AES128_SHA256_RSA_OAEP,
            SecurityPolicy::Aes256Sha256RsaPss => uris::POLICY_AES256_SHA256_RSA_PSS,
        }
    }

    /// Length of the channel nonces this policy requires.
    pub fn secure_channel_nonce_length(&self) -> usize {
        match self {
            SecurityPolicy::None => 0,
            SecurityPolicy::Basic128Rsa15 => 16,
            _ => 32,
        }
    }

    /// Hash family for P_HASH key derivation and symmetric signatures.
    fn derivation_hash(&self) -> HashAlgorithm {
        match self {
            SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Basic256 => HashAlgorithm::Sha1,
            _ => HashAlgorithm::Sha256,
        }
    }

    /// Derived (signing, encryption) key lengths in bytes.
    fn symmetric_key_lengths(&self) -> (usize, usize) {
        match self {
            SecurityPolicy::None => (0, 0),
            SecurityPolicy::Basic128Rsa15 => (16, 16),
            SecurityPolicy::Basic256 => (24, 32),
            SecurityPolicy::Basic256Sha256 => (32, 32),
            SecurityPolicy::Aes128Sha256RsaOaep => (32, 16),
            SecurityPolicy::Aes256Sha256RsaPss => (32, 32),
        }
    }

    /// RSA modulus bounds in bytes, inclusive.
    pub fn asymmetric_key_bounds(&self) -> (usize, usize) {
        match self {
            SecurityPolicy::None => (0, usize::MAX),
            SecurityPolicy::Basic128Rsa15 => (128, 256),
            SecurityPolicy::Basic256 => (128, 512),
            SecurityPolicy::Basic256Sha256
            | SecurityPolicy::Aes128Sha256RsaOaep
            | SecurityPolicy::Aes256Sha256RsaPss => (256, 512),
        }
    }

    fn asymmetric_encryption_scheme(&self) -> RsaEncryptionScheme {
        match self {
            SecurityPolicy::None | SecurityPolicy::Basic128Rsa15 => RsaEncryptionScheme::Pkcs1v15,
            SecurityPolicy::Basic256 | SecurityPolicy::Basic256Sha256 => {
                RsaEncryptionScheme::OaepSha1
            }
            // The Aes256_Sha256_RsaPss profile mandates OAEP with SHA-256.
            SecurityPolicy::Aes128Sha256RsaOaep | SecurityPolicy::Aes256Sha256RsaPss => {
                RsaEncryptionScheme::OaepSha256
            }
        }
    }

    fn asymmetric_signature_scheme(&self) -> RsaSignatureScheme {
        match self {
            SecurityPolicy::None
            | SecurityPolicy::Basic128Rsa15
            | SecurityPolicy::Basic256 => RsaSignatureScheme::Pkcs1v15Sha1,
            SecurityPolicy::Basic256Sha256 | SecurityPolicy::Aes128Sha256RsaOaep => {
                RsaSignatureScheme::Pkcs1v15Sha256
            }
            SecurityPolicy::Aes256Sha256RsaPss => RsaSignatureScheme::PssSha256,
        }
    }

    fn symmetric_signature_uri(&self) -> &'static str {
        match self.derivation_hash() {
            HashAlgorithm::Sha1 => uris::HMAC_SHA1,
            HashAlgorithm::Sha256 => uris::HMAC_SHA256,
        }
    }

    /// URI of the AES-CBC variant, selected by the derived encryption key
    /// length.
    fn symmetric_encryption_uri(&self) -> &'static str {
        match self.symmetric_key_lengths() {
            (_, 16) => uris::AES128_CBC,
            _ => uris::AES256_CBC,
        }
    }

    fn asymmetric_signature_uri(&self) -> &'static str {
        match self.asymmetric_signature_scheme() {
            RsaSignatureScheme::Pkcs1v15Sha1 => uris::RSA_SHA1,
            RsaSignatureScheme::Pkcs1v15Sha256 => uris::RSA_SHA256,
            RsaSignatureScheme::PssSha256 => uris::RSA_PSS_SHA256,
        }
    }

    fn asymmetric_encryption_uri(&self) -> &'static str {
        match self.asymmetric_encryption_scheme() {
            RsaEncryptionScheme::Pkcs1v15 => uris::RSA_15,
            RsaEncryptionScheme::OaepSha1 => uris::RSA_OAEP,
            RsaEncryptionScheme::OaepSha256 => uris::RSA_OAEP_SHA256,
        }
    }

    /// Build the symmetric bundle for one security token.
    ///
    /// Outgoing chunks are protected with the remote direction's keys so the
    /// peer can unprotect them with its local set, and vice versa.
    pub fn symmetric(
        &self,
        local_nonce: &[u8],
        remote_nonce: &[u8],
    ) -> Result<EncryptionAlgorithm<'static>> {
        if matches!(self, SecurityPolicy::None) {
            return Ok(plaintext_bundle(*self));
        }

        let nonce_length = self.secure_channel_nonce_length();
        for nonce in [local_nonce, remote_nonce] {
            if nonce.len() != nonce_length {
                return Err(CryptoError::InvalidNonceLength {
                    expected: nonce_length,
                    got: nonce.len(),
                });
            }
        }

        let hash = self.derivation_hash();
        let (signing_length, encryption_length) = self.symmetric_key_lengths();
        let local = derive_keys(
            hash,
            local_nonce,
            remote_nonce,
            signing_length,
            encryption_length,
            AES_BLOCK_SIZE,
        )?;
        let remote = derive_keys(
            hash,
            remote_nonce,
            local_nonce,
            signing_length,
            encryption_length,
            AES_BLOCK_SIZE,
        )?;

        Ok(EncryptionAlgorithm::new(
            *self,
            AES_BLOCK_SIZE,
            AES_BLOCK_SIZE,
            0,
            hash.output_len(),
            self.symmetric_encryption_uri(),
            self.symmetric_signature_uri(),
            AlgorithmKind::Symmetric {
                hash,
                local,
                remote,
            },
        ))
    }

    /// Build the asymmetric bundle for the channel-open exchange.
    ///
    /// Both moduli are validated against the policy bounds before any
    /// operation can run. Encryption and verification use the remote public
    /// key; decryption and signing use the local private key.
    pub fn asymmetric<'k>(
        &self,
        local_key: &'k RsaPrivateKey,
        remote_key: &'k RsaPublicKey,
    ) -> Result<EncryptionAlgorithm<'k>> {
        if matches!(self, SecurityPolicy::None) {
            return Ok(plaintext_bundle(*self));
        }

        let (min, max) = self.asymmetric_key_bounds();
        let local_size = private_key_size(local_key);
        if local_size < min || local_size > max {
            return Err(CryptoError::InvalidKeySize {
                role: "local",
                min,
                max,
                got: local_size,
            });
        }
        let remote_size = key_size(remote_key);
        if remote_size < min || remote_size > max {
            return Err(CryptoError::InvalidKeySize {
                role: "remote",
                min,
                max,
                got: remote_size,
            });
        }

        let encryption = self.asymmetric_encryption_scheme();
        Ok(EncryptionAlgorithm::new(
            *self,
            remote_size,
            remote_size - encryption.min_padding(),
            encryption.min_padding(),
            local_size,
            self.asymmetric_encryption_uri(),
            self.asymmetric_signature_uri(),
            AlgorithmKind::Asymmetric {
                encryption,
                signature: self.asymmetric_signature_scheme(),
                local: local_key,
                remote: remote_key,
            },
        ))
    }
}

fn plaintext_bundle(policy: SecurityPolicy) -> EncryptionAlgorithm<'static> {
    EncryptionAlgorithm::new(policy, 1, 1, 0, 0, "", "", AlgorithmKind::Plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_dispatch_is_total_over_the_catalog() {
        for policy in SecurityPolicy::ALL {
            assert_eq!(SecurityPolicy::from_uri(policy.uri()).unwrap(), policy);
        }
    }

    #[test]
    fn unknown_uri_rejected() {
        let err = SecurityPolicy::from_uri("http://opcfoundation.org/UA/SecurityPolicy#Basic512")
            .unwrap_err();
        assert!(matches!(err, CryptoError::UnsupportedPolicy(_)));
    }

    #[test]
    fn nonce_lengths_per_policy() {
        assert_eq!(SecurityPolicy::None.secure_channel_nonce_length(), 0);
        assert_eq!(SecurityPolicy::Basic128Rsa15.secure_channel_nonce_length(), 16);
        assert_eq!(SecurityPolicy::Basic256.secure_channel_nonce_length(), 32);
        assert_eq!(
            SecurityPolicy::Aes256Sha256RsaPss.secure_channel_nonce_length(),
            32
        );
    }

    #[test]
    fn wrong_nonce_length_rejected() {
        let err = SecurityPolicy::Basic256Sha256
            .symmetric(&[0u8; 16], &[1u8; 32])
            .unwrap_err();
        assert_eq!(
            err,
            CryptoError::InvalidNonceLength {
                expected: 32,
                got: 16
            }
        );
    }

    #[test]
    fn symmetric_bundle_parameters() {
        let local = [0x00u8; 32];
        let remote = [0x01u8; 32];
        let bundle = SecurityPolicy::Basic256Sha256
            .symmetric(&local, &remote)
            .unwrap();
        assert_eq!(bundle.block_size(), 16);
        assert_eq!(bundle.min_padding(), 0);
        assert_eq!(bundle.signature_length(), 32);
        assert_eq!(bundle.signature_uri(), uris::HMAC_SHA256);
        assert_eq!(bundle.encryption_uri(), uris::AES256_CBC);
        assert!(bundle.is_encrypting());
        assert!(!bundle.uses_extra_padding_byte());
    }

    #[test]
    fn legacy_policies_use_sha1_signatures() {
        let local = [0x07u8; 16];
        let remote = [0x09u8; 16];
        let bundle = SecurityPolicy::Basic128Rsa15
            .symmetric(&local, &remote)
            .unwrap();
        assert_eq!(bundle.signature_length(), 20);
        assert_eq!(bundle.signature_uri(), uris::HMAC_SHA1);
        assert_eq!(bundle.encryption_uri(), uris::AES128_CBC);
    }

    #[test]
    fn none_policy_is_identity() {
        let bundle = SecurityPolicy::None.symmetric(&[], &[]).unwrap();
        assert!(!bundle.is_encrypting());
        assert_eq!(bundle.signature_length(), 0);
        let data = b"unprotected chunk";
        assert_eq!(bundle.encrypt(data).unwrap(), data);
        assert_eq!(bundle.decrypt(data).unwrap(), data);
        assert_eq!(bundle.sign(data).unwrap(), Vec::<u8>::new());
        bundle.verify_signature(data, &[]).unwrap();
    }
}
