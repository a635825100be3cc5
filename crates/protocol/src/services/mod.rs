//! Service messages and the TypeId registry
//!
//! Every request/response type has a stable numeric TypeId, the identifier of
//! its Binary-encoding NodeId. On the wire a message is that NodeId (emitted
//! in the four-byte form) followed by the header and body fields in declared
//! order. Decoding dispatches on the TypeId; identifiers outside the registry
//! fail with `UnknownService`.

mod channel;
mod common;
mod discovery;
mod header;
mod session;

pub use channel::{
    CloseSecureChannelRequest, CloseSecureChannelResponse, OpenSecureChannelRequest,
    OpenSecureChannelResponse,
};
pub use common::{
    ApplicationDescription, ApplicationType, ChannelSecurityToken, EndpointDescription,
    MessageSecurityMode, SecurityTokenRequestType, SignatureData, SignedSoftwareCertificate,
    UserTokenPolicy, UserTokenType,
};
pub use discovery::{
    FindServersRequest, FindServersResponse, GetEndpointsRequest, GetEndpointsResponse,
};
pub use header::{RequestHeader, ResponseHeader};
pub use session::{
    ActivateSessionRequest, ActivateSessionResponse, CloseSessionRequest, CloseSessionResponse,
    CreateSessionRequest, CreateSessionResponse,
};

use crate::binary::{BinaryDecode, BinaryEncode, BinaryError, Reader, Result, Writer};
use crate::datatypes::NodeId;

/// Binary-encoding TypeIds from the standard namespace.
pub mod type_ids {
    pub const FIND_SERVERS_REQUEST: u32 = 422;
    pub const FIND_SERVERS_RESPONSE: u32 = 425;
    pub const GET_ENDPOINTS_REQUEST: u32 = 428;
    pub const GET_ENDPOINTS_RESPONSE: u32 = 431;
    pub const OPEN_SECURE_CHANNEL_REQUEST: u32 = 446;
    pub const OPEN_SECURE_CHANNEL_RESPONSE: u32 = 449;
    pub const CLOSE_SECURE_CHANNEL_REQUEST: u32 = 452;
    pub const CLOSE_SECURE_CHANNEL_RESPONSE: u32 = 455;
    pub const CREATE_SESSION_REQUEST: u32 = 461;
    pub const CREATE_SESSION_RESPONSE: u32 = 464;
    pub const ACTIVATE_SESSION_REQUEST: u32 = 467;
    pub const ACTIVATE_SESSION_RESPONSE: u32 = 470;
    pub const CLOSE_SESSION_REQUEST: u32 = 473;
    pub const CLOSE_SESSION_RESPONSE: u32 = 476;
}

/// Tagged union over every service message in the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceMessage {
    FindServersRequest(FindServersRequest),
    FindServersResponse(FindServersResponse),
    GetEndpointsRequest(GetEndpointsRequest),
    GetEndpointsResponse(GetEndpointsResponse),
    OpenSecureChannelRequest(OpenSecureChannelRequest),
    OpenSecureChannelResponse(OpenSecureChannelResponse),
    CloseSecureChannelRequest(CloseSecureChannelRequest),
    CloseSecureChannelResponse(CloseSecureChannelResponse),
    CreateSessionRequest(CreateSessionRequest),
    CreateSessionResponse(CreateSessionResponse),
    ActivateSessionRequest(ActivateSessionRequest),
    ActivateSessionResponse(ActivateSessionResponse),
    CloseSessionRequest(CloseSessionRequest),
    CloseSessionResponse(CloseSessionResponse),
}

impl ServiceMessage {
    /// The registry TypeId of this message.
    pub fn type_id(&self) -> u32 {
        use type_ids::*;
        match self {
            ServiceMessage::FindServersRequest(_) => FIND_SERVERS_REQUEST,
            ServiceMessage::FindServersResponse(_) => FIND_SERVERS_RESPONSE,
            ServiceMessage::GetEndpointsRequest(_) => GET_ENDPOINTS_REQUEST,
            ServiceMessage::GetEndpointsResponse(_) => GET_ENDPOINTS_RESPONSE,
            ServiceMessage::OpenSecureChannelRequest(_) => OPEN_SECURE_CHANNEL_REQUEST,
            ServiceMessage::OpenSecureChannelResponse(_) => OPEN_SECURE_CHANNEL_RESPONSE,
            ServiceMessage::CloseSecureChannelRequest(_) => CLOSE_SECURE_CHANNEL_REQUEST,
            ServiceMessage::CloseSecureChannelResponse(_) => CLOSE_SECURE_CHANNEL_RESPONSE,
            ServiceMessage::CreateSessionRequest(_) => CREATE_SESSION_REQUEST,
            ServiceMessage::CreateSessionResponse(_) => CREATE_SESSION_RESPONSE,
            ServiceMessage::ActivateSessionRequest(_) => ACTIVATE_SESSION_REQUEST,
            ServiceMessage::ActivateSessionResponse(_) => ACTIVATE_SESSION_RESPONSE,
            ServiceMessage::CloseSessionRequest(_) => CLOSE_SESSION_REQUEST,
            ServiceMessage::CloseSessionResponse(_) => CLOSE_SESSION_RESPONSE,
        }
    }

    /// True for the request half of the registry.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            ServiceMessage::FindServersRequest(_)
                | ServiceMessage::GetEndpointsRequest(_)
                | ServiceMessage::OpenSecureChannelRequest(_)
                | ServiceMessage::CloseSecureChannelRequest(_)
                | ServiceMessage::CreateSessionRequest(_)
                | ServiceMessage::ActivateSessionRequest(_)
                | ServiceMessage::CloseSessionRequest(_)
        )
    }

    /// Encode the full envelope: TypeId NodeId, header, body.
    pub fn encode_message(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.byte_len());
        self.encode(&mut writer)?;
        Ok(writer.into_vec())
    }

    /// Decode one complete message from `bytes`, requiring full consumption.
    pub fn decode_message(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let message = Self::decode(&mut reader)?;
        if !reader.is_empty() {
            return Err(BinaryError::BadLength(reader.remaining() as i64));
        }
        Ok(message)
    }
}

impl BinaryEncode for ServiceMessage {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        // TypeIds in the standard namespace always fit the four-byte form.
        NodeId::FourByte {
            namespace: 0,
            id: self.type_id() as u16,
        }
        .encode(writer)?;
        match self {
            ServiceMessage::FindServersRequest(m) => m.encode(writer),
            ServiceMessage::FindServersResponse(m) => m.encode(writer),
            ServiceMessage::GetEndpointsRequest(m) => m.encode(writer),
            ServiceMessage::GetEndpointsResponse(m) => m.encode(writer),
            ServiceMessage::OpenSecureChannelRequest(m) => m.encode(writer),
            ServiceMessage::OpenSecureChannelResponse(m) => m.encode(writer),
            ServiceMessage::CloseSecureChannelRequest(m) => m.encode(writer),
            ServiceMessage::CloseSecureChannelResponse(m) => m.encode(writer),
            ServiceMessage::CreateSessionRequest(m) => m.encode(writer),
            ServiceMessage::CreateSessionResponse(m) => m.encode(writer),
            ServiceMessage::ActivateSessionRequest(m) => m.encode(writer),
            ServiceMessage::ActivateSessionResponse(m) => m.encode(writer),
            ServiceMessage::CloseSessionRequest(m) => m.encode(writer),
            ServiceMessage::CloseSessionResponse(m) => m.encode(writer),
        }
    }

    fn byte_len(&self) -> usize {
        4 + match self {
            ServiceMessage::FindServersRequest(m) => m.byte_len(),
            ServiceMessage::FindServersResponse(m) => m.byte_len(),
            ServiceMessage::GetEndpointsRequest(m) => m.byte_len(),
            ServiceMessage::GetEndpointsResponse(m) => m.byte_len(),
            ServiceMessage::OpenSecureChannelRequest(m) => m.byte_len(),
            ServiceMessage::OpenSecureChannelResponse(m) => m.byte_len(),
            ServiceMessage::CloseSecureChannelRequest(m) => m.byte_len(),
            ServiceMessage::CloseSecureChannelResponse(m) => m.byte_len(),
            ServiceMessage::CreateSessionRequest(m) => m.byte_len(),
            ServiceMessage::CreateSessionResponse(m) => m.byte_len(),
            ServiceMessage::ActivateSessionRequest(m) => m.byte_len(),
            ServiceMessage::ActivateSessionResponse(m) => m.byte_len(),
            ServiceMessage::CloseSessionRequest(m) => m.byte_len(),
            ServiceMessage::CloseSessionResponse(m) => m.byte_len(),
        }
    }
}

impl BinaryDecode for ServiceMessage {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        use type_ids::*;

        let type_node = NodeId::decode(reader)?;
        let type_id = type_node
            .numeric_id()
            .ok_or(BinaryError::UnknownService(0))?;
        match type_id {
            FIND_SERVERS_REQUEST => Ok(ServiceMessage::FindServersRequest(
                FindServersRequest::decode(reader)?,
            )),
            FIND_SERVERS_RESPONSE => Ok(ServiceMessage::FindServersResponse(
                FindServersResponse::decode(reader)?,
            )),
            GET_ENDPOINTS_REQUEST => Ok(ServiceMessage::GetEndpointsRequest(
                GetEndpointsRequest::decode(reader)?,
            )),
            GET_ENDPOINTS_RESPONSE => Ok(ServiceMessage::GetEndpointsResponse(
                GetEndpointsResponse::decode(reader)?,
            )),
            OPEN_SECURE_CHANNEL_REQUEST => Ok(ServiceMessage::OpenSecureChannelRequest(
                OpenSecureChannelRequest::decode(reader)?,
            )),
            OPEN_SECURE_CHANNEL_RESPONSE => Ok(ServiceMessage::OpenSecureChannelResponse(
                OpenSecureChannelResponse::decode(reader)?,
            )),
            CLOSE_SECURE_CHANNEL_REQUEST => Ok(ServiceMessage::CloseSecureChannelRequest(
                CloseSecureChannelRequest::decode(reader)?,
            )),
            CLOSE_SECURE_CHANNEL_RESPONSE => Ok(ServiceMessage::CloseSecureChannelResponse(
                CloseSecureChannelResponse::decode(reader)?,
            )),
            CREATE_SESSION_REQUEST => Ok(ServiceMessage::CreateSessionRequest(
                CreateSessionRequest::decode(reader)?,
            )),
            CREATE_SESSION_RESPONSE => Ok(ServiceMessage::CreateSessionResponse(
                CreateSessionResponse::decode(reader)?,
            )),
            ACTIVATE_SESSION_REQUEST => Ok(ServiceMessage::ActivateSessionRequest(
                ActivateSessionRequest::decode(reader)?,
            )),
            ACTIVATE_SESSION_RESPONSE => Ok(ServiceMessage::ActivateSessionResponse(
                ActivateSessionResponse::decode(reader)?,
            )),
            CLOSE_SESSION_REQUEST => Ok(ServiceMessage::CloseSessionRequest(
                CloseSessionRequest::decode(reader)?,
            )),
            CLOSE_SESSION_RESPONSE => Ok(ServiceMessage::CloseSessionResponse(
                CloseSessionResponse::decode(reader)?,
            )),
            other => Err(BinaryError::UnknownService(other)),
        }
    }
}
