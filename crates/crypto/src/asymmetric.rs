//! Asymmetric primitives: RSA encryption and signature schemes
//!
//! Chunk-sized inputs are processed block-wise: each plaintext block of
//! `modulus - min_padding` bytes maps to one modulus-sized ciphertext block.
//! A ragged final plaintext block is allowed; ciphertext must always be a
//! whole number of modulus-sized blocks.

use rand::rngs::OsRng;
use rsa::pss::Pss;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, Result};

const PSS_SALT_LENGTH: usize = 32;

/// RSA encryption scheme used by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaEncryptionScheme {
    Pkcs1v15,
    OaepSha1,
    OaepSha256,
}

impl RsaEncryptionScheme {
    /// Padding overhead per block, in bytes. For OAEP this is
    /// `2 * hash_len + 2`; for PKCS#1 v1.5 it is 11.
    pub fn min_padding(&self) -> usize {
        match self {
            RsaEncryptionScheme::Pkcs1v15 => 11,
            RsaEncryptionScheme::OaepSha1 => 2 * 20 + 2,
            RsaEncryptionScheme::OaepSha256 => 2 * 32 + 2,
        }
    }

    fn encrypt_block(&self, key: &RsaPublicKey, block: &[u8]) -> Result<Vec<u8>> {
        let mut rng = OsRng;
        let out = match self {
            RsaEncryptionScheme::Pkcs1v15 => key.encrypt(&mut rng, Pkcs1v15Encrypt, block),
            RsaEncryptionScheme::OaepSha1 => key.encrypt(&mut rng, Oaep::new::<Sha1>(), block),
            RsaEncryptionScheme::OaepSha256 => key.encrypt(&mut rng, Oaep::new::<Sha256>(), block),
        };
        out.map_err(|_| CryptoError::CryptoFailure)
    }

    fn decrypt_block(&self, key: &RsaPrivateKey, block: &[u8]) -> Result<Vec<u8>> {
        let out = match self {
            RsaEncryptionScheme::Pkcs1v15 => key.decrypt(Pkcs1v15Encrypt, block),
            RsaEncryptionScheme::OaepSha1 => key.decrypt(Oaep::new::<Sha1>(), block),
            RsaEncryptionScheme::OaepSha256 => key.decrypt(Oaep::new::<Sha256>(), block),
        };
        out.map_err(|_| CryptoError::DecryptionFailed)
    }
}

/// RSA signature scheme used by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaSignatureScheme {
    Pkcs1v15Sha1,
    Pkcs1v15Sha256,
    PssSha256,
}

/// Modulus size of a public key, in bytes.
pub fn key_size(key: &RsaPublicKey) -> usize {
    key.size()
}

/// Modulus size of a private key, in bytes.
pub fn private_key_size(key: &RsaPrivateKey) -> usize {
    key.size()
}

/// Encrypt `plaintext` block-wise with the given scheme.
pub fn rsa_encrypt(
    scheme: RsaEncryptionScheme,
    key: &RsaPublicKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let plain_block = key
        .size()
        .checked_sub(scheme.min_padding())
        .filter(|n| *n > 0)
        .ok_or(CryptoError::CryptoFailure)?;

    let mut out = Vec::with_capacity(plaintext.len().div_ceil(plain_block) * key.size());
    for block in plaintext.chunks(plain_block) {
        out.extend_from_slice(&scheme.encrypt_block(key, block)?);
    }
    Ok(out)
}

/// Decrypt `ciphertext` block-wise with the given scheme.
pub fn rsa_decrypt(
    scheme: RsaEncryptionScheme,
    key: &RsaPrivateKey,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher_block = key.size();
    if ciphertext.is_empty() || ciphertext.len() % cipher_block != 0 {
        return Err(CryptoError::DecryptionFailed);
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks(cipher_block) {
        out.extend_from_slice(&scheme.decrypt_block(key, block)?);
    }
    Ok(out)
}

/// Sign `data` (hashed internally with the scheme's digest).
pub fn rsa_sign(scheme: RsaSignatureScheme, key: &RsaPrivateKey, data: &[u8]) -> Result<Vec<u8>> {
    let mut rng = OsRng;
    let out = match scheme {
        RsaSignatureScheme::Pkcs1v15Sha1 => {
            let digest = Sha1::digest(data);
            key.sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
        }
        RsaSignatureScheme::Pkcs1v15Sha256 => {
            let digest = Sha256::digest(data);
            key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        }
        RsaSignatureScheme::PssSha256 => {
            let digest = Sha256::digest(data);
            key.sign_with_rng(&mut rng, Pss::new_with_salt::<Sha256>(PSS_SALT_LENGTH), &digest)
        }
    };
    out.map_err(|_| CryptoError::CryptoFailure)
}

/// Verify a signature over `data`.
pub fn rsa_verify(
    scheme: RsaSignatureScheme,
    key: &RsaPublicKey,
    data: &[u8],
    signature: &[u8],
) -> Result<()> {
    let out = match scheme {
        RsaSignatureScheme::Pkcs1v15Sha1 => {
            let digest = Sha1::digest(data);
            key.verify(Pkcs1v15Sign::new::<Sha1>(), &digest, signature)
        }
        RsaSignatureScheme::Pkcs1v15Sha256 => {
            let digest = Sha256::digest(data);
            key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
        }
        RsaSignatureScheme::PssSha256 => {
            let digest = Sha256::digest(data);
            key.verify(
                Pss::new_with_salt::<Sha256>(PSS_SALT_LENGTH),
                &digest,
                signature,
            )
        }
    };
    out.map_err(|_| CryptoError::SignatureInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keypair() -> (RsaPrivateKey, RsaPublicKey) {
        let mut rng = OsRng;
        let private = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        (private, public)
    }

    #[test]
    fn min_padding_per_scheme() {
        assert_eq!(RsaEncryptionScheme::Pkcs1v15.min_padding(), 11);
        assert_eq!(RsaEncryptionScheme::OaepSha1.min_padding(), 42);
        assert_eq!(RsaEncryptionScheme::OaepSha256.min_padding(), 66);
    }

    #[test]
    fn multi_block_encrypt_roundtrip() {
        let (private, public) = test_keypair();
        // Longer than one plaintext block, with a ragged tail.
        let plaintext: Vec<u8> = (0..=255).cycle().take(500).map(|b| b as u8).collect();

        for scheme in [
            RsaEncryptionScheme::Pkcs1v15,
            RsaEncryptionScheme::OaepSha1,
            RsaEncryptionScheme::OaepSha256,
        ] {
            let ciphertext = rsa_encrypt(scheme, &public, &plaintext).unwrap();
            assert_eq!(ciphertext.len() % public.size(), 0);
            let decrypted = rsa_decrypt(scheme, &private, &ciphertext).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }

    #[test]
    fn ragged_ciphertext_rejected() {
        let (private, _) = test_keypair();
        assert_eq!(
            rsa_decrypt(RsaEncryptionScheme::OaepSha256, &private, &[0u8; 100]).unwrap_err(),
            CryptoError::DecryptionFailed
        );
    }

    #[test]
    fn tampered_ciphertext_fails_generically() {
        let (private, public) = test_keypair();
        let mut ciphertext =
            rsa_encrypt(RsaEncryptionScheme::OaepSha256, &public, b"secret").unwrap();
        ciphertext[10] ^= 0x80;
        assert_eq!(
            rsa_decrypt(RsaEncryptionScheme::OaepSha256, &private, &ciphertext).unwrap_err(),
            CryptoError::DecryptionFailed
        );
    }

    #[test]
    fn signatures_verify_and_reject_tampering() {
        let (private, public) = test_keypair();
        let data = b"open secure channel chunk";

        for scheme in [
            RsaSignatureScheme::Pkcs1v15Sha1,
            RsaSignatureScheme::Pkcs1v15Sha256,
            RsaSignatureScheme::PssSha256,
        ] {
            let signature = rsa_sign(scheme, &private, data).unwrap();
            assert_eq!(signature.len(), public.size());
            rsa_verify(scheme, &public, data, &signature).unwrap();

            let mut bad = signature.clone();
            bad[0] ^= 0x01;
            assert_eq!(
                rsa_verify(scheme, &public, data, &bad).unwrap_err(),
                CryptoError::SignatureInvalid
            );
            assert_eq!(
                rsa_verify(scheme, &public, b"other data", &signature).unwrap_err(),
                CryptoError::SignatureInvalid
            );
        }
    }
}
