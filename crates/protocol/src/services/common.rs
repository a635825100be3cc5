//! Structures and enumerations shared across service bodies

use crate::binary::{
    array_byte_len, byte_string_len, decode_array, encode_array, string_len, BinaryDecode,
    BinaryEncode, BinaryError, Reader, Result, Writer,
};
use crate::datatypes::{DateTime, LocalizedText};

/// How messages on a secure channel are protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageSecurityMode {
    Invalid = 0,
    None = 1,
    Sign = 2,
    SignAndEncrypt = 3,
}

impl MessageSecurityMode {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(MessageSecurityMode::Invalid),
            1 => Ok(MessageSecurityMode::None),
            2 => Ok(MessageSecurityMode::Sign),
            3 => Ok(MessageSecurityMode::SignAndEncrypt),
            other => Err(BinaryError::InvalidEnumValue(other)),
        }
    }
}

impl BinaryEncode for MessageSecurityMode {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(*self as u32);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for MessageSecurityMode {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::from_u32(reader.read_u32()?)
    }
}

/// Role of an application in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ApplicationType {
    Server = 0,
    Client = 1,
    ClientAndServer = 2,
    DiscoveryServer = 3,
}

impl ApplicationType {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(ApplicationType::Server),
            1 => Ok(ApplicationType::Client),
            2 => Ok(ApplicationType::ClientAndServer),
            3 => Ok(ApplicationType::DiscoveryServer),
            other => Err(BinaryError::InvalidEnumValue(other)),
        }
    }
}

impl BinaryEncode for ApplicationType {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(*self as u32);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for ApplicationType {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::from_u32(reader.read_u32()?)
    }
}

/// Kind of user identity a token policy accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum UserTokenType {
    Anonymous = 0,
    UserName = 1,
    Certificate = 2,
    IssuedToken = 3,
}

impl UserTokenType {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(UserTokenType::Anonymous),
            1 => Ok(UserTokenType::UserName),
            2 => Ok(UserTokenType::Certificate),
            3 => Ok(UserTokenType::IssuedToken),
            other => Err(BinaryError::InvalidEnumValue(other)),
        }
    }
}

impl BinaryEncode for UserTokenType {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(*self as u32);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for UserTokenType {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::from_u32(reader.read_u32()?)
    }
}

/// Whether a channel open issues a fresh token or renews the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SecurityTokenRequestType {
    Issue = 0,
    Renew = 1,
}

impl SecurityTokenRequestType {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(SecurityTokenRequestType::Issue),
            1 => Ok(SecurityTokenRequestType::Renew),
            other => Err(BinaryError::InvalidEnumValue(other)),
        }
    }
}

impl BinaryEncode for SecurityTokenRequestType {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(*self as u32);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for SecurityTokenRequestType {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::from_u32(reader.read_u32()?)
    }
}

/// Description of an application discoverable through an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDescription {
    pub application_uri: Option<String>,
    pub product_uri: Option<String>,
    pub application_name: LocalizedText,
    pub application_type: ApplicationType,
    pub gateway_server_uri: Option<String>,
    pub discovery_profile_uri: Option<String>,
    pub discovery_urls: Option<Vec<String>>,
}

impl BinaryEncode for ApplicationDescription {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_string(self.application_uri.as_deref())?;
        writer.write_string(self.product_uri.as_deref())?;
        self.application_name.encode(writer)?;
        self.application_type.encode(writer)?;
        writer.write_string(self.gateway_server_uri.as_deref())?;
        writer.write_string(self.discovery_profile_uri.as_deref())?;
        encode_array(writer, self.discovery_urls.as_deref())
    }

    fn byte_len(&self) -> usize {
        string_len(self.application_uri.as_deref())
            + string_len(self.product_uri.as_deref())
            + self.application_name.byte_len()
            + 4
            + string_len(self.gateway_server_uri.as_deref())
            + string_len(self.discovery_profile_uri.as_deref())
            + array_byte_len(self.discovery_urls.as_deref())
    }
}

impl BinaryDecode for ApplicationDescription {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(ApplicationDescription {
            application_uri: reader.read_string()?,
            product_uri: reader.read_string()?,
            application_name: LocalizedText::decode(reader)?,
            application_type: ApplicationType::decode(reader)?,
            gateway_server_uri: reader.read_string()?,
            discovery_profile_uri: reader.read_string()?,
            discovery_urls: decode_array(reader)?,
        })
    }
}

/// A user identity option published by an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTokenPolicy {
    pub policy_id: Option<String>,
    pub token_type: UserTokenType,
    pub issued_token_type: Option<String>,
    pub issuer_endpoint_url: Option<String>,
    pub security_policy_uri: Option<String>,
}

impl BinaryEncode for UserTokenPolicy {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_string(self.policy_id.as_deref())?;
        self.token_type.encode(writer)?;
        writer.write_string(self.issued_token_type.as_deref())?;
        writer.write_string(self.issuer_endpoint_url.as_deref())?;
        writer.write_string(self.security_policy_uri.as_deref())
    }

    fn byte_len(&self) -> usize {
        string_len(self.policy_id.as_deref())
            + 4
            + string_len(self.issued_token_type.as_deref())
            + string_len(self.issuer_endpoint_url.as_deref())
            + string_len(self.security_policy_uri.as_deref())
    }
}

impl BinaryDecode for UserTokenPolicy {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(UserTokenPolicy {
            policy_id: reader.read_string()?,
            token_type: UserTokenType::decode(reader)?,
            issued_token_type: reader.read_string()?,
            issuer_endpoint_url: reader.read_string()?,
            security_policy_uri: reader.read_string()?,
        })
    }
}

/// One endpoint a server listens on, with its security parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescription {
    pub endpoint_url: Option<String>,
    pub server: ApplicationDescription,
    pub server_certificate: Option<Vec<u8>>,
    pub security_mode: MessageSecurityMode,
    pub security_policy_uri: Option<String>,
    pub user_identity_tokens: Option<Vec<UserTokenPolicy>>,
    pub transport_profile_uri: Option<String>,
    pub security_level: u8,
}

impl BinaryEncode for EndpointDescription {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_string(self.endpoint_url.as_deref())?;
        self.server.encode(writer)?;
        writer.write_byte_string(self.server_certificate.as_deref())?;
        self.security_mode.encode(writer)?;
        writer.write_string(self.security_policy_uri.as_deref())?;
        encode_array(writer, self.user_identity_tokens.as_deref())?;
        writer.write_string(self.transport_profile_uri.as_deref())?;
        writer.write_u8(self.security_level);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        string_len(self.endpoint_url.as_deref())
            + self.server.byte_len()
            + byte_string_len(self.server_certificate.as_deref())
            + 4
            + string_len(self.security_policy_uri.as_deref())
            + array_byte_len(self.user_identity_tokens.as_deref())
            + string_len(self.transport_profile_uri.as_deref())
            + 1
    }
}

impl BinaryDecode for EndpointDescription {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(EndpointDescription {
            endpoint_url: reader.read_string()?,
            server: ApplicationDescription::decode(reader)?,
            server_certificate: reader.read_byte_string()?,
            security_mode: MessageSecurityMode::decode(reader)?,
            security_policy_uri: reader.read_string()?,
            user_identity_tokens: decode_array(reader)?,
            transport_profile_uri: reader.read_string()?,
            security_level: reader.read_u8()?,
        })
    }
}

/// An algorithm URI and the signature it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureData {
    pub algorithm: Option<String>,
    pub signature: Option<Vec<u8>>,
}

impl SignatureData {
    pub fn new(algorithm: impl Into<String>, signature: Option<Vec<u8>>) -> Self {
        SignatureData {
            algorithm: Some(algorithm.into()),
            signature,
        }
    }

    pub fn null() -> Self {
        SignatureData {
            algorithm: None,
            signature: None,
        }
    }
}

impl BinaryEncode for SignatureData {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_string(self.algorithm.as_deref())?;
        writer.write_byte_string(self.signature.as_deref())
    }

    fn byte_len(&self) -> usize {
        string_len(self.algorithm.as_deref()) + byte_string_len(self.signature.as_deref())
    }
}

impl BinaryDecode for SignatureData {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(SignatureData {
            algorithm: reader.read_string()?,
            signature: reader.read_byte_string()?,
        })
    }
}

/// A software certificate and the signature over it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedSoftwareCertificate {
    pub certificate_data: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
}

impl BinaryEncode for SignedSoftwareCertificate {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_byte_string(self.certificate_data.as_deref())?;
        writer.write_byte_string(self.signature.as_deref())
    }

    fn byte_len(&self) -> usize {
        byte_string_len(self.certificate_data.as_deref())
            + byte_string_len(self.signature.as_deref())
    }
}

impl BinaryDecode for SignedSoftwareCertificate {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(SignedSoftwareCertificate {
            certificate_data: reader.read_byte_string()?,
            signature: reader.read_byte_string()?,
        })
    }
}

/// Identity and lifetime of one secure-channel security token.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSecurityToken {
    pub channel_id: u32,
    pub token_id: u32,
    pub created_at: DateTime,
    pub revised_lifetime: u32,
}

impl BinaryEncode for ChannelSecurityToken {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.channel_id);
        writer.write_u32(self.token_id);
        self.created_at.encode(writer)?;
        writer.write_u32(self.revised_lifetime);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4 + 4 + 8 + 4
    }
}

impl BinaryDecode for ChannelSecurityToken {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(ChannelSecurityToken {
            channel_id: reader.read_u32()?,
            token_id: reader.read_u32()?,
            created_at: DateTime::decode(reader)?,
            revised_lifetime: reader.read_u32()?,
        })
    }
}
