//! NodeId: tagged identifier of an information-model node
//!
//! The first wire byte selects one of six encodings. `NodeId::numeric` picks
//! the most compact numeric form; explicitly built variants are preserved
//! byte-for-byte on re-encode so foreign encodings survive a round trip.

use crate::binary::{
    byte_string_len, string_len, BinaryDecode, BinaryEncode, BinaryError, Reader, Result, Writer,
};
use crate::datatypes::Guid;

const ENCODING_TWO_BYTE: u8 = 0x00;
const ENCODING_FOUR_BYTE: u8 = 0x01;
const ENCODING_NUMERIC: u8 = 0x02;
const ENCODING_STRING: u8 = 0x03;
const ENCODING_GUID: u8 = 0x04;
const ENCODING_OPAQUE: u8 = 0x05;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeId {
    /// Namespace 0, identifier < 256.
    TwoByte { id: u8 },
    /// Namespace < 256, identifier < 65536.
    FourByte { namespace: u8, id: u16 },
    Numeric { namespace: u16, id: u32 },
    String {
        namespace: u16,
        value: Option<String>,
    },
    Guid { namespace: u16, value: Guid },
    Opaque {
        namespace: u16,
        value: Option<Vec<u8>>,
    },
}

impl NodeId {
    /// Build a numeric NodeId in its most compact encoding.
    pub fn numeric(namespace: u16, id: u32) -> Self {
        if namespace == 0 && id < 256 {
            NodeId::TwoByte { id: id as u8 }
        } else if namespace < 256 && id <= u32::from(u16::MAX) {
            NodeId::FourByte {
                namespace: namespace as u8,
                id: id as u16,
            }
        } else {
            NodeId::Numeric { namespace, id }
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        NodeId::String {
            namespace,
            value: Some(value.into()),
        }
    }

    pub fn guid(namespace: u16, value: Guid) -> Self {
        NodeId::Guid { namespace, value }
    }

    pub fn opaque(namespace: u16, value: impl Into<Vec<u8>>) -> Self {
        NodeId::Opaque {
            namespace,
            value: Some(value.into()),
        }
    }

    /// The null NodeId, `ns=0;i=0`.
    pub fn null() -> Self {
        NodeId::TwoByte { id: 0 }
    }

    pub fn namespace(&self) -> u16 {
        match self {
            NodeId::TwoByte { .. } => 0,
            NodeId::FourByte { namespace, .. } => u16::from(*namespace),
            NodeId::Numeric { namespace, .. }
            | NodeId::String { namespace, .. }
            | NodeId::Guid { namespace, .. }
            | NodeId::Opaque { namespace, .. } => *namespace,
        }
    }

    /// The numeric identifier, if this is one of the numeric encodings.
    pub fn numeric_id(&self) -> Option<u32> {
        match self {
            NodeId::TwoByte { id } => Some(u32::from(*id)),
            NodeId::FourByte { id, .. } => Some(u32::from(*id)),
            NodeId::Numeric { id, .. } => Some(*id),
            _ => None,
        }
    }
}

impl BinaryEncode for NodeId {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        match self {
            NodeId::TwoByte { id } => {
                writer.write_u8(ENCODING_TWO_BYTE);
                writer.write_u8(*id);
            }
            NodeId::FourByte { namespace, id } => {
                writer.write_u8(ENCODING_FOUR_BYTE);
                writer.write_u8(*namespace);
                writer.write_u16(*id);
            }
            NodeId::Numeric { namespace, id } => {
                writer.write_u8(ENCODING_NUMERIC);
                writer.write_u16(*namespace);
                writer.write_u32(*id);
            }
            NodeId::String { namespace, value } => {
                writer.write_u8(ENCODING_STRING);
                writer.write_u16(*namespace);
                writer.write_string(value.as_deref())?;
            }
            NodeId::Guid { namespace, value } => {
                writer.write_u8(ENCODING_GUID);
                writer.write_u16(*namespace);
                value.encode(writer)?;
            }
            NodeId::Opaque { namespace, value } => {
                writer.write_u8(ENCODING_OPAQUE);
                writer.write_u16(*namespace);
                writer.write_byte_string(value.as_deref())?;
            }
        }
        Ok(())
    }

    fn byte_len(&self) -> usize {
        match self {
            NodeId::TwoByte { .. } => 2,
            NodeId::FourByte { .. } => 4,
            NodeId::Numeric { .. } => 7,
            NodeId::String { value, .. } => 3 + string_len(value.as_deref()),
            NodeId::Guid { .. } => 19,
            NodeId::Opaque { value, .. } => 3 + byte_string_len(value.as_deref()),
        }
    }
}

impl BinaryDecode for NodeId {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        match reader.read_u8()? {
            ENCODING_TWO_BYTE => Ok(NodeId::TwoByte {
                id: reader.read_u8()?,
            }),
            ENCODING_FOUR_BYTE => Ok(NodeId::FourByte {
                namespace: reader.read_u8()?,
                id: reader.read_u16()?,
            }),
            ENCODING_NUMERIC => Ok(NodeId::Numeric {
                namespace: reader.read_u16()?,
                id: reader.read_u32()?,
            }),
            ENCODING_STRING => Ok(NodeId::String {
                namespace: reader.read_u16()?,
                value: reader.read_string()?,
            }),
            ENCODING_GUID => Ok(NodeId::Guid {
                namespace: reader.read_u16()?,
                value: Guid::decode(reader)?,
            }),
            ENCODING_OPAQUE => Ok(NodeId::Opaque {
                namespace: reader.read_u16()?,
                value: reader.read_byte_string()?,
            }),
            other => Err(BinaryError::UnknownNodeIdVariant(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(node_id: &NodeId) -> Vec<u8> {
        let mut w = Writer::new();
        node_id.encode(&mut w).unwrap();
        assert_eq!(w.len(), node_id.byte_len());
        w.into_vec()
    }

    #[test]
    fn numeric_picks_most_compact_form() {
        assert_eq!(NodeId::numeric(0, 1), NodeId::TwoByte { id: 1 });
        assert_eq!(
            NodeId::numeric(3, 1000),
            NodeId::FourByte {
                namespace: 3,
                id: 1000
            }
        );
        assert_eq!(
            NodeId::numeric(300, 1),
            NodeId::Numeric {
                namespace: 300,
                id: 1
            }
        );
        assert_eq!(
            NodeId::numeric(0, 70000),
            NodeId::Numeric {
                namespace: 0,
                id: 70000
            }
        );
    }

    #[test]
    fn two_byte_wire_form() {
        assert_eq!(encode(&NodeId::numeric(0, 1)), [0x00, 0x01]);
    }

    #[test]
    fn explicit_numeric_wire_form() {
        let node_id = NodeId::Numeric {
            namespace: 3,
            id: 1000,
        };
        assert_eq!(
            encode(&node_id),
            [0x02, 0x03, 0x00, 0xe8, 0x03, 0x00, 0x00]
        );
    }

    #[test]
    fn explicit_variant_survives_roundtrip() {
        // A peer may send ns=0;i=1 in the seven-byte form; re-encoding must
        // not shrink it.
        let bytes = [0x02, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00];
        let mut r = Reader::new(&bytes);
        let node_id = NodeId::decode(&mut r).unwrap();
        assert_eq!(
            node_id,
            NodeId::Numeric {
                namespace: 0,
                id: 1
            }
        );
        assert_eq!(encode(&node_id), bytes);
    }

    #[test]
    fn string_and_opaque_roundtrip() {
        for node_id in [
            NodeId::string(2, "TemperatureSensor"),
            NodeId::opaque(0, vec![0x08, 0x22, 0x87, 0x62]),
            NodeId::String {
                namespace: 1,
                value: None,
            },
        ] {
            let bytes = encode(&node_id);
            let mut r = Reader::new(&bytes);
            assert_eq!(NodeId::decode(&mut r).unwrap(), node_id);
        }
    }

    #[test]
    fn unknown_encoding_rejected() {
        let mut r = Reader::new(&[0x06, 0x00]);
        assert_eq!(
            NodeId::decode(&mut r).unwrap_err(),
            BinaryError::UnknownNodeIdVariant(0x06)
        );
    }
}
