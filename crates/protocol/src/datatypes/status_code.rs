//! StatusCode newtype and the constants the service layer needs

use crate::binary::{BinaryDecode, BinaryEncode, Reader, Result, Writer};

/// A UA status code. The top two bits carry the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0x0000_0000);
    pub const BAD_UNEXPECTED_ERROR: StatusCode = StatusCode(0x8001_0000);
    pub const BAD_DECODING_ERROR: StatusCode = StatusCode(0x8007_0000);
    pub const BAD_TIMEOUT: StatusCode = StatusCode(0x800a_0000);
    pub const BAD_SERVICE_UNSUPPORTED: StatusCode = StatusCode(0x800b_0000);
    pub const BAD_SECURITY_CHECKS_FAILED: StatusCode = StatusCode(0x8013_0000);
    pub const BAD_SECURITY_POLICY_REJECTED: StatusCode = StatusCode(0x8055_0000);
    pub const BAD_SESSION_ID_INVALID: StatusCode = StatusCode(0x8025_0000);

    pub fn is_good(&self) -> bool {
        self.0 & 0xc000_0000 == 0
    }

    pub fn is_bad(&self) -> bool {
        self.0 & 0x8000_0000 != 0
    }
}

impl BinaryEncode for StatusCode {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.0);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for StatusCode {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(StatusCode(reader.read_u32()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_predicates() {
        assert!(StatusCode::GOOD.is_good());
        assert!(!StatusCode::GOOD.is_bad());
        assert!(StatusCode::BAD_SECURITY_CHECKS_FAILED.is_bad());
        assert!(!StatusCode::BAD_SECURITY_CHECKS_FAILED.is_good());
    }
}
