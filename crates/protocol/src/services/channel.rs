//! OpenSecureChannel and CloseSecureChannel services

use crate::binary::{
    byte_string_len, BinaryDecode, BinaryEncode, Reader, Result, Writer,
};
use crate::services::common::{
    ChannelSecurityToken, MessageSecurityMode, SecurityTokenRequestType,
};
use crate::services::header::{RequestHeader, ResponseHeader};

/// Asks the server to issue or renew a channel security token.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenSecureChannelRequest {
    pub request_header: RequestHeader,
    pub client_protocol_version: u32,
    pub request_type: SecurityTokenRequestType,
    pub security_mode: MessageSecurityMode,
    pub client_nonce: Option<Vec<u8>>,
    pub requested_lifetime: u32,
}

impl BinaryEncode for OpenSecureChannelRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        writer.write_u32(self.client_protocol_version);
        self.request_type.encode(writer)?;
        self.security_mode.encode(writer)?;
        writer.write_byte_string(self.client_nonce.as_deref())?;
        writer.write_u32(self.requested_lifetime);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
            + 4
            + 4
            + 4
            + byte_string_len(self.client_nonce.as_deref())
            + 4
    }
}

impl BinaryDecode for OpenSecureChannelRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(OpenSecureChannelRequest {
            request_header: RequestHeader::decode(reader)?,
            client_protocol_version: reader.read_u32()?,
            request_type: SecurityTokenRequestType::decode(reader)?,
            security_mode: MessageSecurityMode::decode(reader)?,
            client_nonce: reader.read_byte_string()?,
            requested_lifetime: reader.read_u32()?,
        })
    }
}

/// Carries the issued token and the server's nonce.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenSecureChannelResponse {
    pub response_header: ResponseHeader,
    pub server_protocol_version: u32,
    pub security_token: ChannelSecurityToken,
    pub server_nonce: Option<Vec<u8>>,
}

impl BinaryEncode for OpenSecureChannelResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)?;
        writer.write_u32(self.server_protocol_version);
        self.security_token.encode(writer)?;
        writer.write_byte_string(self.server_nonce.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len()
            + 4
            + self.security_token.byte_len()
            + byte_string_len(self.server_nonce.as_deref())
    }
}

impl BinaryDecode for OpenSecureChannelResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(OpenSecureChannelResponse {
            response_header: ResponseHeader::decode(reader)?,
            server_protocol_version: reader.read_u32()?,
            security_token: ChannelSecurityToken::decode(reader)?,
            server_nonce: reader.read_byte_string()?,
        })
    }
}

/// Tears the channel down; the body is the header alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseSecureChannelRequest {
    pub request_header: RequestHeader,
}

impl BinaryEncode for CloseSecureChannelRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
    }
}

impl BinaryDecode for CloseSecureChannelRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CloseSecureChannelRequest {
            request_header: RequestHeader::decode(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloseSecureChannelResponse {
    pub response_header: ResponseHeader,
}

impl BinaryEncode for CloseSecureChannelResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len()
    }
}

impl BinaryDecode for CloseSecureChannelResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CloseSecureChannelResponse {
            response_header: ResponseHeader::decode(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{DateTime, NodeId};

    #[test]
    fn open_request_roundtrip() {
        let request = OpenSecureChannelRequest {
            request_header: RequestHeader::new(NodeId::null(), DateTime::from_ticks(1), 1),
            client_protocol_version: 0,
            request_type: SecurityTokenRequestType::Issue,
            security_mode: MessageSecurityMode::SignAndEncrypt,
            client_nonce: Some(vec![0xab; 32]),
            requested_lifetime: 3_600_000,
        };

        let mut w = Writer::new();
        request.encode(&mut w).unwrap();
        assert_eq!(w.len(), request.byte_len());

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(OpenSecureChannelRequest::decode(&mut r).unwrap(), request);
        assert!(r.is_empty());
    }

    #[test]
    fn open_response_roundtrip() {
        let response = OpenSecureChannelResponse {
            response_header: ResponseHeader::new(DateTime::from_ticks(2), 1, Default::default()),
            server_protocol_version: 0,
            security_token: ChannelSecurityToken {
                channel_id: 4,
                token_id: 9,
                created_at: DateTime::from_ticks(2),
                revised_lifetime: 600_000,
            },
            server_nonce: None,
        };

        let mut w = Writer::new();
        response.encode(&mut w).unwrap();
        assert_eq!(w.len(), response.byte_len());

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(OpenSecureChannelResponse::decode(&mut r).unwrap(), response);
    }
}
