//! The materialized algorithm bundle for one security token

use std::fmt;

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::asymmetric::{
    rsa_decrypt, rsa_encrypt, rsa_sign, rsa_verify, RsaEncryptionScheme, RsaSignatureScheme,
};
use crate::error::Result;
use crate::policy::SecurityPolicy;
use crate::symmetric::{aes_cbc_decrypt, aes_cbc_encrypt, hmac_sign, hmac_verify};
use crate::types::{DerivedKeys, HashAlgorithm};

/// The concrete algorithms behind a bundle.
///
/// The original composed a policy out of stored operation closures; here the
/// bundle is a tagged variant so ownership of the baked-in key material is
/// explicit. Derived symmetric keys zeroize when the bundle drops; the RSA
/// keys are borrowed and stay with the caller.
pub(crate) enum AlgorithmKind<'k> {
    /// The `None` policy: identity transforms, empty signatures.
    Plaintext,
    Symmetric {
        hash: HashAlgorithm,
        local: DerivedKeys,
        remote: DerivedKeys,
    },
    Asymmetric {
        encryption: RsaEncryptionScheme,
        signature: RsaSignatureScheme,
        local: &'k RsaPrivateKey,
        remote: &'k RsaPublicKey,
    },
}

/// An immutable bundle of algorithm choices, numeric limits and key material
/// for one secure-channel security token.
pub struct EncryptionAlgorithm<'k> {
    policy: SecurityPolicy,
    block_size: usize,
    plain_block_size: usize,
    min_padding: usize,
    signature_length: usize,
    encryption_uri: &'static str,
    signature_uri: &'static str,
    kind: AlgorithmKind<'k>,
}

impl<'k> EncryptionAlgorithm<'k> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        policy: SecurityPolicy,
        block_size: usize,
        plain_block_size: usize,
        min_padding: usize,
        signature_length: usize,
        encryption_uri: &'static str,
        signature_uri: &'static str,
        kind: AlgorithmKind<'k>,
    ) -> Self {
        EncryptionAlgorithm {
            policy,
            block_size,
            plain_block_size,
            min_padding,
            signature_length,
            encryption_uri,
            signature_uri,
            kind,
        }
    }

    /// The policy this bundle was built from.
    pub fn policy(&self) -> SecurityPolicy {
        self.policy
    }

    /// Ciphertext block size: 16 for AES, the remote modulus size for RSA.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Plaintext block size; `block_size - min_padding` for RSA.
    pub fn plain_block_size(&self) -> usize {
        self.plain_block_size
    }

    /// Lower bound on padding overhead of the encryption scheme.
    pub fn min_padding(&self) -> usize {
        self.min_padding
    }

    /// Length of the signature `sign` produces.
    pub fn signature_length(&self) -> usize {
        self.signature_length
    }

    /// Canonical URI of the encryption algorithm, as carried on the wire.
    pub fn encryption_uri(&self) -> &'static str {
        self.encryption_uri
    }

    /// Canonical URI of the signature algorithm, as carried on the wire.
    pub fn signature_uri(&self) -> &'static str {
        self.signature_uri
    }

    /// Whether this bundle actually transforms the payload.
    pub fn is_encrypting(&self) -> bool {
        !matches!(self.kind, AlgorithmKind::Plaintext)
    }

    /// Whether the padding field carries an extra high-order size byte.
    /// Required once the encrypting key is larger than 2048 bits.
    pub fn uses_extra_padding_byte(&self) -> bool {
        matches!(self.kind, AlgorithmKind::Asymmetric { .. }) && self.block_size > 256
    }

    /// Encrypt an outgoing chunk region.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match &self.kind {
            AlgorithmKind::Plaintext => Ok(plaintext.to_vec()),
            AlgorithmKind::Symmetric { remote, .. } => {
                aes_cbc_encrypt(&remote.encryption, &remote.iv, plaintext)
            }
            AlgorithmKind::Asymmetric {
                encryption, remote, ..
            } => rsa_encrypt(*encryption, remote, plaintext),
        }
    }

    /// Decrypt an incoming chunk region.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match &self.kind {
            AlgorithmKind::Plaintext => Ok(ciphertext.to_vec()),
            AlgorithmKind::Symmetric { local, .. } => {
                aes_cbc_decrypt(&local.encryption, &local.iv, ciphertext)
            }
            AlgorithmKind::Asymmetric {
                encryption, local, ..
            } => rsa_decrypt(*encryption, local, ciphertext),
        }
    }

    /// Sign outgoing data. Under the `None` policy the signature is empty.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        match &self.kind {
            AlgorithmKind::Plaintext => Ok(Vec::new()),
            AlgorithmKind::Symmetric { hash, remote, .. } => {
                hmac_sign(*hash, &remote.signing, data)
            }
            AlgorithmKind::Asymmetric {
                signature, local, ..
            } => rsa_sign(*signature, local, data),
        }
    }

    /// Verify an incoming signature. Comparison is constant-time for MACs;
    /// mismatch carries no positional detail.
    pub fn verify_signature(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        match &self.kind {
            // The wire carries no signature under the None policy.
            AlgorithmKind::Plaintext => Ok(()),
            AlgorithmKind::Symmetric { hash, local, .. } => {
                hmac_verify(*hash, &local.signing, data, signature)
            }
            AlgorithmKind::Asymmetric {
                signature: scheme,
                remote,
                ..
            } => rsa_verify(*scheme, remote, data, signature),
        }
    }
}

// Key material never appears in debug output.
impl fmt::Debug for EncryptionAlgorithm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionAlgorithm")
            .field("policy", &self.policy)
            .field("block_size", &self.block_size)
            .field("min_padding", &self.min_padding)
            .field("signature_length", &self.signature_length)
            .finish_non_exhaustive()
    }
}
