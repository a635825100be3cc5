//! ExtensionObject: self-describing wrapper for an encoded structure

use crate::binary::{
    byte_string_len, BinaryDecode, BinaryEncode, BinaryError, Reader, Result, Writer,
};
use crate::datatypes::NodeId;

const BODY_NONE: u8 = 0x00;
const BODY_BYTE_STRING: u8 = 0x01;
const BODY_XML: u8 = 0x02;

/// Encoded body carried by an ExtensionObject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionObjectBody {
    /// UA Binary encoded structure.
    ByteString(Vec<u8>),
    /// XML element bytes (legacy encoders still emit these).
    Xml(Vec<u8>),
}

/// A structure tagged with the NodeId of its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub body: Option<ExtensionObjectBody>,
}

impl ExtensionObject {
    pub fn new(type_id: NodeId, body: Vec<u8>) -> Self {
        ExtensionObject {
            type_id,
            body: Some(ExtensionObjectBody::ByteString(body)),
        }
    }

    /// A null ExtensionObject: null NodeId, no body.
    pub fn null() -> Self {
        ExtensionObject {
            type_id: NodeId::null(),
            body: None,
        }
    }

    fn body_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            None => None,
            Some(ExtensionObjectBody::ByteString(bytes)) | Some(ExtensionObjectBody::Xml(bytes)) => {
                Some(bytes)
            }
        }
    }
}

impl Default for ExtensionObject {
    fn default() -> Self {
        ExtensionObject::null()
    }
}

impl BinaryEncode for ExtensionObject {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.type_id.encode(writer)?;
        match &self.body {
            None => writer.write_u8(BODY_NONE),
            Some(ExtensionObjectBody::ByteString(bytes)) => {
                writer.write_u8(BODY_BYTE_STRING);
                writer.write_byte_string(Some(bytes))?;
            }
            Some(ExtensionObjectBody::Xml(bytes)) => {
                writer.write_u8(BODY_XML);
                writer.write_byte_string(Some(bytes))?;
            }
        }
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.type_id.byte_len()
            + 1
            + self
                .body_bytes()
                .map_or(0, |bytes| byte_string_len(Some(bytes)))
    }
}

impl BinaryDecode for ExtensionObject {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let type_id = NodeId::decode(reader)?;
        let body = match reader.read_u8()? {
            BODY_NONE => None,
            BODY_BYTE_STRING => Some(ExtensionObjectBody::ByteString(
                reader.read_byte_string()?.unwrap_or_default(),
            )),
            BODY_XML => Some(ExtensionObjectBody::Xml(
                reader.read_byte_string()?.unwrap_or_default(),
            )),
            other => return Err(BinaryError::InvalidEnumValue(u32::from(other))),
        };
        Ok(ExtensionObject { type_id, body })
    }
}
