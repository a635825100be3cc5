//! Request and response headers shared by every service

use crate::binary::{
    array_byte_len, decode_array, encode_array, string_len, BinaryDecode, BinaryEncode, Reader,
    Result, Writer,
};
use crate::datatypes::{DateTime, DiagnosticInfo, ExtensionObject, NodeId, StatusCode};

/// Header carried by every service request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeader {
    pub authentication_token: NodeId,
    pub timestamp: DateTime,
    pub request_handle: u32,
    pub return_diagnostics: u32,
    pub audit_entry_id: Option<String>,
    pub timeout_hint: u32,
    pub additional_header: ExtensionObject,
}

impl RequestHeader {
    pub fn new(authentication_token: NodeId, timestamp: DateTime, request_handle: u32) -> Self {
        RequestHeader {
            authentication_token,
            timestamp,
            request_handle,
            return_diagnostics: 0,
            audit_entry_id: None,
            timeout_hint: 0,
            additional_header: ExtensionObject::null(),
        }
    }
}

impl BinaryEncode for RequestHeader {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.authentication_token.encode(writer)?;
        self.timestamp.encode(writer)?;
        writer.write_u32(self.request_handle);
        writer.write_u32(self.return_diagnostics);
        writer.write_string(self.audit_entry_id.as_deref())?;
        writer.write_u32(self.timeout_hint);
        self.additional_header.encode(writer)
    }

    fn byte_len(&self) -> usize {
        self.authentication_token.byte_len()
            + 8
            + 4
            + 4
            + string_len(self.audit_entry_id.as_deref())
            + 4
            + self.additional_header.byte_len()
    }
}

impl BinaryDecode for RequestHeader {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(RequestHeader {
            authentication_token: NodeId::decode(reader)?,
            timestamp: DateTime::decode(reader)?,
            request_handle: reader.read_u32()?,
            return_diagnostics: reader.read_u32()?,
            audit_entry_id: reader.read_string()?,
            timeout_hint: reader.read_u32()?,
            additional_header: ExtensionObject::decode(reader)?,
        })
    }
}

/// Header carried by every service response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHeader {
    pub timestamp: DateTime,
    pub request_handle: u32,
    pub service_result: StatusCode,
    pub service_diagnostics: DiagnosticInfo,
    pub string_table: Option<Vec<String>>,
    pub additional_header: ExtensionObject,
}

impl ResponseHeader {
    pub fn new(timestamp: DateTime, request_handle: u32, service_result: StatusCode) -> Self {
        ResponseHeader {
            timestamp,
            request_handle,
            service_result,
            service_diagnostics: DiagnosticInfo::null(),
            string_table: Some(Vec::new()),
            additional_header: ExtensionObject::null(),
        }
    }
}

impl BinaryEncode for ResponseHeader {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.timestamp.encode(writer)?;
        writer.write_u32(self.request_handle);
        self.service_result.encode(writer)?;
        self.service_diagnostics.encode(writer)?;
        encode_array(writer, self.string_table.as_deref())?;
        self.additional_header.encode(writer)
    }

    fn byte_len(&self) -> usize {
        8 + 4
            + 4
            + self.service_diagnostics.byte_len()
            + array_byte_len(self.string_table.as_deref())
            + self.additional_header.byte_len()
    }
}

impl BinaryDecode for ResponseHeader {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(ResponseHeader {
            timestamp: DateTime::decode(reader)?,
            request_handle: reader.read_u32()?,
            service_result: StatusCode::decode(reader)?,
            service_diagnostics: DiagnosticInfo::decode(reader)?,
            string_table: decode_array(reader)?,
            additional_header: ExtensionObject::decode(reader)?,
        })
    }
}
