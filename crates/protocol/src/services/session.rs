//! CreateSession, ActivateSession and CloseSession services

use crate::binary::{
    array_byte_len, byte_string_len, decode_array, encode_array, string_len, BinaryDecode,
    BinaryEncode, Reader, Result, Writer,
};
use crate::datatypes::{DiagnosticInfo, ExtensionObject, NodeId, StatusCode};
use crate::services::common::{
    ApplicationDescription, EndpointDescription, SignatureData, SignedSoftwareCertificate,
};
use crate::services::header::{RequestHeader, ResponseHeader};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSessionRequest {
    pub request_header: RequestHeader,
    pub client_description: ApplicationDescription,
    pub server_uri: Option<String>,
    pub endpoint_url: Option<String>,
    pub session_name: Option<String>,
    pub client_nonce: Option<Vec<u8>>,
    pub client_certificate: Option<Vec<u8>>,
    /// Milliseconds.
    pub requested_session_timeout: u64,
    pub max_response_message_size: u32,
}

impl BinaryEncode for CreateSessionRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        self.client_description.encode(writer)?;
        writer.write_string(self.server_uri.as_deref())?;
        writer.write_string(self.endpoint_url.as_deref())?;
        writer.write_string(self.session_name.as_deref())?;
        writer.write_byte_string(self.client_nonce.as_deref())?;
        writer.write_byte_string(self.client_certificate.as_deref())?;
        writer.write_u64(self.requested_session_timeout);
        writer.write_u32(self.max_response_message_size);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
            + self.client_description.byte_len()
            + string_len(self.server_uri.as_deref())
            + string_len(self.endpoint_url.as_deref())
            + string_len(self.session_name.as_deref())
            + byte_string_len(self.client_nonce.as_deref())
            + byte_string_len(self.client_certificate.as_deref())
            + 8
            + 4
    }
}

impl BinaryDecode for CreateSessionRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CreateSessionRequest {
            request_header: RequestHeader::decode(reader)?,
            client_description: ApplicationDescription::decode(reader)?,
            server_uri: reader.read_string()?,
            endpoint_url: reader.read_string()?,
            session_name: reader.read_string()?,
            client_nonce: reader.read_byte_string()?,
            client_certificate: reader.read_byte_string()?,
            requested_session_timeout: reader.read_u64()?,
            max_response_message_size: reader.read_u32()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSessionResponse {
    pub response_header: ResponseHeader,
    pub session_id: NodeId,
    pub authentication_token: NodeId,
    /// Milliseconds.
    pub revised_session_timeout: u64,
    pub server_nonce: Option<Vec<u8>>,
    pub server_certificate: Option<Vec<u8>>,
    pub server_endpoints: Option<Vec<EndpointDescription>>,
    pub server_software_certificates: Option<Vec<SignedSoftwareCertificate>>,
    pub server_signature: SignatureData,
    pub max_request_message_size: u32,
}

impl BinaryEncode for CreateSessionResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)?;
        self.session_id.encode(writer)?;
        self.authentication_token.encode(writer)?;
        writer.write_u64(self.revised_session_timeout);
        writer.write_byte_string(self.server_nonce.as_deref())?;
        writer.write_byte_string(self.server_certificate.as_deref())?;
        encode_array(writer, self.server_endpoints.as_deref())?;
        encode_array(writer, self.server_software_certificates.as_deref())?;
        self.server_signature.encode(writer)?;
        writer.write_u32(self.max_request_message_size);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len()
            + self.session_id.byte_len()
            + self.authentication_token.byte_len()
            + 8
            + byte_string_len(self.server_nonce.as_deref())
            + byte_string_len(self.server_certificate.as_deref())
            + array_byte_len(self.server_endpoints.as_deref())
            + array_byte_len(self.server_software_certificates.as_deref())
            + self.server_signature.byte_len()
            + 4
    }
}

impl BinaryDecode for CreateSessionResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CreateSessionResponse {
            response_header: ResponseHeader::decode(reader)?,
            session_id: NodeId::decode(reader)?,
            authentication_token: NodeId::decode(reader)?,
            revised_session_timeout: reader.read_u64()?,
            server_nonce: reader.read_byte_string()?,
            server_certificate: reader.read_byte_string()?,
            server_endpoints: decode_array(reader)?,
            server_software_certificates: decode_array(reader)?,
            server_signature: SignatureData::decode(reader)?,
            max_request_message_size: reader.read_u32()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivateSessionRequest {
    pub request_header: RequestHeader,
    pub client_signature: SignatureData,
    pub client_software_certificates: Option<Vec<SignedSoftwareCertificate>>,
    pub locale_ids: Option<Vec<String>>,
    pub user_identity_token: ExtensionObject,
    pub user_token_signature: SignatureData,
}

impl BinaryEncode for ActivateSessionRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        self.client_signature.encode(writer)?;
        encode_array(writer, self.client_software_certificates.as_deref())?;
        encode_array(writer, self.locale_ids.as_deref())?;
        self.user_identity_token.encode(writer)?;
        self.user_token_signature.encode(writer)
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len()
            + self.client_signature.byte_len()
            + array_byte_len(self.client_software_certificates.as_deref())
            + array_byte_len(self.locale_ids.as_deref())
            + self.user_identity_token.byte_len()
            + self.user_token_signature.byte_len()
    }
}

impl BinaryDecode for ActivateSessionRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(ActivateSessionRequest {
            request_header: RequestHeader::decode(reader)?,
            client_signature: SignatureData::decode(reader)?,
            client_software_certificates: decode_array(reader)?,
            locale_ids: decode_array(reader)?,
            user_identity_token: ExtensionObject::decode(reader)?,
            user_token_signature: SignatureData::decode(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivateSessionResponse {
    pub response_header: ResponseHeader,
    pub server_nonce: Option<Vec<u8>>,
    pub results: Option<Vec<StatusCode>>,
    pub diagnostic_infos: Option<Vec<DiagnosticInfo>>,
}

impl BinaryEncode for ActivateSessionResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)?;
        writer.write_byte_string(self.server_nonce.as_deref())?;
        encode_array(writer, self.results.as_deref())?;
        encode_array(writer, self.diagnostic_infos.as_deref())
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len()
            + byte_string_len(self.server_nonce.as_deref())
            + array_byte_len(self.results.as_deref())
            + array_byte_len(self.diagnostic_infos.as_deref())
    }
}

impl BinaryDecode for ActivateSessionResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(ActivateSessionResponse {
            response_header: ResponseHeader::decode(reader)?,
            server_nonce: reader.read_byte_string()?,
            results: decode_array(reader)?,
            diagnostic_infos: decode_array(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloseSessionRequest {
    pub request_header: RequestHeader,
    pub delete_subscriptions: bool,
}

impl BinaryEncode for CloseSessionRequest {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.request_header.encode(writer)?;
        writer.write_bool(self.delete_subscriptions);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.request_header.byte_len() + 1
    }
}

impl BinaryDecode for CloseSessionRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CloseSessionRequest {
            request_header: RequestHeader::decode(reader)?,
            delete_subscriptions: reader.read_bool()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloseSessionResponse {
    pub response_header: ResponseHeader,
}

impl BinaryEncode for CloseSessionResponse {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.response_header.encode(writer)
    }

    fn byte_len(&self) -> usize {
        self.response_header.byte_len()
    }
}

impl BinaryDecode for CloseSessionResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(CloseSessionResponse {
            response_header: ResponseHeader::decode(reader)?,
        })
    }
}
