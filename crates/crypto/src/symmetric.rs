//! Symmetric primitives: AES-CBC and HMAC with constant-time verification

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{CryptoError, Result};
use crate::types::HashAlgorithm;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// AES block size in bytes, for every key length.
pub const AES_BLOCK_SIZE: usize = 16;

/// Encrypt with AES-CBC. The key selects AES-128 or AES-256; the plaintext
/// length must be a multiple of the block size.
pub fn aes_cbc_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if plaintext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::CryptoFailure);
    }
    let mut buf = plaintext.to_vec();
    let n = buf.len();
    match key.len() {
        16 => {
            Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::CryptoFailure)?
                .encrypt_padded_mut::<NoPadding>(&mut buf, n)
                .map_err(|_| CryptoError::CryptoFailure)?;
        }
        32 => {
            Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::CryptoFailure)?
                .encrypt_padded_mut::<NoPadding>(&mut buf, n)
                .map_err(|_| CryptoError::CryptoFailure)?;
        }
        _ => return Err(CryptoError::CryptoFailure),
    }
    Ok(buf)
}

/// Decrypt with AES-CBC. The ciphertext length must be a multiple of the
/// block size.
pub fn aes_cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailed);
    }
    let mut buf = ciphertext.to_vec();
    match key.len() {
        16 => {
            Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::DecryptionFailed)?
                .decrypt_padded_mut::<NoPadding>(&mut buf)
                .map_err(|_| CryptoError::DecryptionFailed)?;
        }
        32 => {
            Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::DecryptionFailed)?
                .decrypt_padded_mut::<NoPadding>(&mut buf)
                .map_err(|_| CryptoError::DecryptionFailed)?;
        }
        _ => return Err(CryptoError::DecryptionFailed),
    }
    Ok(buf)
}

/// Compute an HMAC tag over `data`.
pub fn hmac_sign(hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    match hash {
        HashAlgorithm::Sha1 => {
            let mut mac =
                HmacSha1::new_from_slice(key).map_err(|_| CryptoError::CryptoFailure)?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        HashAlgorithm::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key).map_err(|_| CryptoError::CryptoFailure)?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
    }
}

/// Verify an HMAC tag in constant time.
pub fn hmac_verify(hash: HashAlgorithm, key: &[u8], data: &[u8], signature: &[u8]) -> Result<()> {
    let expected = hmac_sign(hash, key, data)?;
    if expected.ct_eq(signature).into() {
        Ok(())
    } else {
        Err(CryptoError::SignatureInvalid)
    }
}
