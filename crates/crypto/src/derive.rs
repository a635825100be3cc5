//! Key derivation: the RFC 5246 P_HASH pseudo-random function
//!
//! `A(0) = seed; A(i) = HMAC(secret, A(i-1));`
//! `output = HMAC(secret, A(1) || seed) || HMAC(secret, A(2) || seed) || ...`
//! truncated to the requested length.

use crate::error::Result;
use crate::symmetric::hmac_sign;
use crate::types::{DerivedKeys, HashAlgorithm};

/// Expand `secret`/`seed` into `length` pseudo-random bytes.
pub fn p_hash(hash: HashAlgorithm, secret: &[u8], seed: &[u8], length: usize) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(length);
    let mut a = hmac_sign(hash, secret, seed)?;
    while output.len() < length {
        let mut input = a.clone();
        input.extend_from_slice(seed);
        output.extend_from_slice(&hmac_sign(hash, secret, &input)?);
        a = hmac_sign(hash, secret, &a)?;
    }
    output.truncate(length);
    Ok(output)
}

/// Derive one direction's signing key, encryption key and IV.
///
/// The two directions of a channel call this with the nonces swapped, which
/// is what makes one side's send keys the other side's receive keys.
pub fn derive_keys(
    hash: HashAlgorithm,
    secret: &[u8],
    seed: &[u8],
    signing_length: usize,
    encryption_length: usize,
    block_length: usize,
) -> Result<DerivedKeys> {
    let total = signing_length + encryption_length + block_length;
    let mut stream = p_hash(hash, secret, seed, total)?;

    let mut encryption = stream.split_off(signing_length);
    let iv = encryption.split_off(encryption_length);
    Ok(DerivedKeys::new(stream, encryption, iv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_hash_is_deterministic_and_length_exact() {
        let secret = [0x0bu8; 32];
        let seed = b"secure channel seed";
        for length in [1usize, 20, 32, 63, 80, 129] {
            let a = p_hash(HashAlgorithm::Sha256, &secret, seed, length).unwrap();
            let b = p_hash(HashAlgorithm::Sha256, &secret, seed, length).unwrap();
            assert_eq!(a.len(), length);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn longer_output_extends_shorter_output() {
        let secret = [0x17u8; 16];
        let seed = [0x2au8; 16];
        let short = p_hash(HashAlgorithm::Sha1, &secret, &seed, 40).unwrap();
        let long = p_hash(HashAlgorithm::Sha1, &secret, &seed, 96).unwrap();
        assert_eq!(&long[..40], short.as_slice());
    }

    #[test]
    fn swapping_secret_and_seed_changes_the_stream() {
        let a = p_hash(HashAlgorithm::Sha256, &[1u8; 32], &[2u8; 32], 64).unwrap();
        let b = p_hash(HashAlgorithm::Sha256, &[2u8; 32], &[1u8; 32], 64).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn derived_keys_split_the_stream_in_order() {
        let secret = [0x00u8; 32];
        let seed = [0x01u8; 32];
        let keys = derive_keys(HashAlgorithm::Sha256, &secret, &seed, 32, 32, 16).unwrap();
        assert_eq!(keys.signing.len(), 32);
        assert_eq!(keys.encryption.len(), 32);
        assert_eq!(keys.iv.len(), 16);

        let stream = p_hash(HashAlgorithm::Sha256, &secret, &seed, 80).unwrap();
        assert_eq!(keys.signing, &stream[..32]);
        assert_eq!(keys.encryption, &stream[32..64]);
        assert_eq!(keys.iv, &stream[64..]);
    }
}
