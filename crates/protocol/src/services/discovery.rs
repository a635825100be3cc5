//! FindServers and GetEndpoints discovery services

use crate::binary::{
    array_byte_len, decode_array, encode_array, string_len, BinaryDecode, BinaryEncode, Reader,
    Result, Writer,
};
use crate::services::common::{ApplicationDescription, EndpointDescription};
use crate::services::header::{RequestHeader, ResponseHeader};

#[derive(Debug, Clone, PartialEq)]
pub struct FindServersRequest {
    pub request_header: RequestHeader,
    pub endpoint_url: Option<String>,
    pub locale_ids: Option<Vec<String>>,
    pub server_uris: Option<Vec<String>>,
}

impl BinaryEncode for FindServersRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        writer.write_string(self.endpoint_url.as_deref())?;
        encode_array(writer, self.locale_ids.as_deref())?;
        encode_array(writer, self.server_uris.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
            + string_len(self.endpoint_url.as_deref())
            + array_byte_len(self.locale_ids.as_deref())
            + array_byte_len(self.server_uris.as_deref())
    }
}

impl BinaryDecode for FindServersRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(FindServersRequest {
            request_header: RequestHeader::decode(reader)?,
            endpoint_url: reader.read_string()?,
            locale_ids: decode_array(reader)?,
            server_uris: decode_array(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindServersResponse {
    pub response_header: ResponseHeader,
    pub servers: Option<Vec<ApplicationDescription>>,
}

impl BinaryEncode for FindServersResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)?;
        encode_array(writer, self.servers.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len() + array_byte_len(self.servers.as_deref())
    }
}

impl BinaryDecode for FindServersResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(FindServersResponse {
            response_header: ResponseHeader::decode(reader)?,
            servers: decode_array(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetEndpointsRequest {
    pub request_header: RequestHeader,
    pub endpoint_url: Option<String>,
    pub locale_ids: Option<Vec<String>>,
    pub profile_uris: Option<Vec<String>>,
}

impl BinaryEncode for GetEndpointsRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        writer.write_string(self.endpoint_url.as_deref())?;
        encode_array(writer, self.locale_ids.as_deref())?;
        encode_array(writer, self.profile_uris.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
            + string_len(self.endpoint_url.as_deref())
            + array_byte_len(self.locale_ids.as_deref())
            + array_byte_len(self.profile_uris.as_deref())
    }
}

impl BinaryDecode for GetEndpointsRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(GetEndpointsRequest {
            request_header: RequestHeader::decode(reader)?,
            endpoint_url: reader.read_string()?,
            locale_ids: decode_array(reader)?,
            profile_uris: decode_array(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetEndpointsResponse {
    pub response_header: ResponseHeader,
    pub endpoints: Option<Vec<EndpointDescription>>,
}

impl BinaryEncode for GetEndpointsResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)?;
        encode_array(writer, self.endpoints.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len() + array_byte_len(self.endpoints.as_deref())
    }
}

impl BinaryDecode for GetEndpointsResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(GetEndpointsResponse {
            response_header: ResponseHeader::decode(reader)?,
            endpoints: decode_array(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{DateTime, NodeId};

    #[test]
    fn get_endpoints_request_roundtrip() {
        let request = GetEndpointsRequest {
            request_header: RequestHeader::new(NodeId::null(), DateTime::from_ticks(10), 3),
            endpoint_url: Some("opc.tcp://plc:4840".to_string()),
            locale_ids: Some(vec!["en".to_string(), "de".to_string()]),
            profile_uris: None,
        };

        let mut w = Writer::new();
        request.encode(&mut w).unwrap();
        assert_eq!(w.len(), request.byte_len());

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(GetEndpointsRequest::decode(&mut r).unwrap(), request);
        assert!(r.is_empty());
    }
}
