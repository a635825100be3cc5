//! Chunk protection: padding, signing and encryption under a policy bundle
//!
//! The policy engine supplies an [`EncryptionAlgorithm`]; this module applies
//! it to one serialized chunk body at a time. The protected region is
//! `body | padding | signature`, where the padding field brings the region to
//! a whole number of plaintext blocks: a size byte, that many filler bytes
//! (each equal to the size byte), and a high-order size byte when the
//! encrypting key is larger than 2048 bits. Under the `None` policy both
//! operations are the identity.

use opcua_crypto::{CryptoError, EncryptionAlgorithm};
use tracing::{debug, trace};

use crate::error::OpcUaError;

/// Pad, sign and encrypt one chunk body.
pub fn seal_chunk(algorithm: &EncryptionAlgorithm<'_>, body: &[u8]) -> Result<Vec<u8>, OpcUaError> {
    let signature_length = algorithm.signature_length();
    let mut region = body.to_vec();

    if algorithm.is_encrypting() {
        let plain_block = algorithm.plain_block_size();
        let extra = algorithm.uses_extra_padding_byte();
        let overhead = if extra { 2 } else { 1 };
        let padding =
            (plain_block - (body.len() + overhead + signature_length) % plain_block) % plain_block;
        let low = (padding & 0xff) as u8;

        region.reserve(padding + overhead + signature_length);
        region.push(low);
        region.resize(region.len() + padding, low);
        if extra {
            region.push((padding >> 8) as u8);
        }
        trace!(
            body = body.len(),
            padding,
            signature = signature_length,
            "padded chunk region"
        );
    }

    let signature = algorithm.sign(&region)?;
    region.extend_from_slice(&signature);

    let sealed = algorithm.encrypt(&region)?;
    debug!(
        policy = algorithm.policy().uri(),
        body = body.len(),
        sealed = sealed.len(),
        "sealed chunk"
    );
    Ok(sealed)
}

/// Decrypt, verify and unpad one protected chunk.
pub fn open_chunk(
    algorithm: &EncryptionAlgorithm<'_>,
    chunk: &[u8],
) -> Result<Vec<u8>, OpcUaError> {
    let mut region = algorithm.decrypt(chunk)?;

    let signature_length = algorithm.signature_length();
    if region.len() < signature_length {
        return Err(CryptoError::DecryptionFailed.into());
    }
    let signature = region.split_off(region.len() - signature_length);
    algorithm.verify_signature(&region, &signature)?;

    if algorithm.is_encrypting() {
        let body_length = strip_padding(&region, algorithm.uses_extra_padding_byte())?;
        region.truncate(body_length);
    }

    debug!(
        policy = algorithm.policy().uri(),
        chunk = chunk.len(),
        body = region.len(),
        "opened chunk"
    );
    Ok(region)
}

/// Validate the padding field and return the body length that precedes it.
fn strip_padding(region: &[u8], extra: bool) -> Result<usize, OpcUaError> {
    let bad = || OpcUaError::from(CryptoError::DecryptionFailed);

    let (padding, low, overhead) = if extra {
        let high = *region.last().ok_or_else(bad)?;
        let low = *region.get(region.len().checked_sub(2).ok_or_else(bad)?).ok_or_else(bad)?;
        ((usize::from(high) << 8) | usize::from(low), low, 2)
    } else {
        let low = *region.last().ok_or_else(bad)?;
        (usize::from(low), low, 1)
    };

    let field_length = padding + overhead;
    let body_length = region.len().checked_sub(field_length).ok_or_else(bad)?;

    // The size byte and every filler byte must agree.
    let filler = &region[body_length..body_length + padding + 1];
    if filler.iter().any(|&b| b != low) {
        return Err(bad());
    }
    Ok(body_length)
}
