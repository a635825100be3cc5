//! GUID with the UA wire layout

use crate::binary::{BinaryDecode, BinaryEncode, Reader, Result, Writer};

/// A 16-byte globally unique identifier.
///
/// The wire layout is mixed-endian: `data1`..`data3` are little-endian while
/// `data4` is raw bytes in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Guid {
            data1,
            data2,
            data3,
            data4,
        }
    }
}

impl BinaryEncode for Guid {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.data1);
        writer.write_u16(self.data2);
        writer.write_u16(self.data3);
        writer.write_bytes(&self.data4);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        16
    }
}

impl BinaryDecode for Guid {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let data1 = reader.read_u32()?;
        let data2 = reader.read_u16()?;
        let data3 = reader.read_u16()?;
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&reader.read_bytes(8)?);
        Ok(Guid {
            data1,
            data2,
            data3,
            data4,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_endian_layout() {
        let guid = Guid::new(
            0x7269_6a75,
            0x6e34,
            0x6d74,
            [0x62, 0x2f, 0x36, 0x34, 0x62, 0x3d, 0x3d, 0x3d],
        );
        let mut w = Writer::new();
        guid.encode(&mut w).unwrap();
        assert_eq!(
            w.as_slice(),
            &[
                0x75, 0x6a, 0x69, 0x72, // data1 little-endian
                0x34, 0x6e, // data2 little-endian
                0x74, 0x6d, // data3 little-endian
                0x62, 0x2f, 0x36, 0x34, 0x62, 0x3d, 0x3d, 0x3d,
            ]
        );

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(Guid::decode(&mut r).unwrap(), guid);
    }
}
