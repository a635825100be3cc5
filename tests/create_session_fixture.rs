//! Wire-level fixture test for CreateSessionResponse
//!
//! The serialized form was captured from an interoperating implementation;
//! decode, re-encode and size must all agree with it byte-for-byte.

use opcua::protocol::services::{
    ApplicationDescription, ApplicationType, EndpointDescription, MessageSecurityMode,
    ResponseHeader, ServiceMessage, SignatureData, UserTokenPolicy, UserTokenType,
};
use opcua::protocol::{
    BinaryEncode, DateTime, ExtensionObject, LocalizedText, NodeId, StatusCode,
};
use opcua::protocol::services::CreateSessionResponse;
use opcua::protocol::DiagnosticInfo;

const FIXTURE_HEX: &str = "\
0100d001009867ddfd30d40101000000\
00000000000000000000000002000001\
0000000500001000000008228762ba81\
e111a643f8777bc62fc8808d5b000000\
0000ffffffffffffffff020000000600\
000065702d75726c070000006170702d\
7572690800000070726f642d75726902\
080000006170702d6e616d6500000000\
0600000067772d757269080000007072\
6f662d757269020000000c0000006469\
73636f762d7572692d310c0000006469\
73636f762d7572692d32ffffffff0100\
0000070000007365632d757269020000\
000100000031000000000c0000006973\
737565642d746f6b656e0a0000006973\
737565722d757269070000007365632d\
7572690100000031000000000c000000\
6973737565642d746f6b656e0a000000\
6973737565722d757269070000007365\
632d757269090000007472616e732d75\
7269000600000065702d75726c070000\
006170702d7572690800000070726f64\
2d75726902080000006170702d6e616d\
65000000000600000067772d75726908\
00000070726f662d757269020000000c\
000000646973636f762d7572692d310c\
000000646973636f762d7572692d32ff\
ffffff01000000070000007365632d75\
7269020000000100000031000000000c\
0000006973737565642d746f6b656e0a\
0000006973737565722d757269070000\
007365632d7572690100000031000000\
000c0000006973737565642d746f6b65\
6e0a0000006973737565722d75726907\
0000007365632d757269090000007472\
616e732d75726900000000002a000000\
687474703a2f2f7777772e77332e6f72\
672f323030302f30392f786d6c647369\
67237273612d73686131fffffffffeff\
0000";

fn fixture_bytes() -> Vec<u8> {
    hex::decode(FIXTURE_HEX).unwrap()
}

fn user_token_policy() -> UserTokenPolicy {
    UserTokenPolicy {
        policy_id: Some("1".to_string()),
        token_type: UserTokenType::Anonymous,
        issued_token_type: Some("issued-token".to_string()),
        issuer_endpoint_url: Some("issuer-uri".to_string()),
        security_policy_uri: Some("sec-uri".to_string()),
    }
}

fn endpoint_description() -> EndpointDescription {
    EndpointDescription {
        endpoint_url: Some("ep-url".to_string()),
        server: ApplicationDescription {
            application_uri: Some("app-uri".to_string()),
            product_uri: Some("prod-uri".to_string()),
            application_name: LocalizedText::new("app-name"),
            application_type: ApplicationType::Server,
            gateway_server_uri: Some("gw-uri".to_string()),
            discovery_profile_uri: Some("prof-uri".to_string()),
            discovery_urls: Some(vec![
                "discov-uri-1".to_string(),
                "discov-uri-2".to_string(),
            ]),
        },
        server_certificate: None,
        security_mode: MessageSecurityMode::None,
        security_policy_uri: Some("sec-uri".to_string()),
        user_identity_tokens: Some(vec![user_token_policy(), user_token_policy()]),
        transport_profile_uri: Some("trans-uri".to_string()),
        security_level: 0,
    }
}

fn structured() -> ServiceMessage {
    ServiceMessage::CreateSessionResponse(CreateSessionResponse {
        response_header: ResponseHeader {
            // 2018-08-10T23:00:00Z
            timestamp: DateTime::from_ticks(131_784_156_000_000_000),
            request_handle: 1,
            service_result: StatusCode::GOOD,
            service_diagnostics: DiagnosticInfo::null(),
            string_table: Some(vec![]),
            additional_header: ExtensionObject::null(),
        },
        session_id: NodeId::Numeric {
            namespace: 0,
            id: 1,
        },
        authentication_token: NodeId::opaque(
            0,
            vec![
                0x08, 0x22, 0x87, 0x62, 0xba, 0x81, 0xe1, 0x11, 0xa6, 0x43, 0xf8, 0x77, 0x7b,
                0xc6, 0x2f, 0xc8,
            ],
        ),
        revised_session_timeout: 6_000_000,
        server_nonce: None,
        server_certificate: None,
        server_endpoints: Some(vec![endpoint_description(), endpoint_description()]),
        server_software_certificates: Some(vec![]),
        server_signature: SignatureData::new("http://www.w3.org/2000/09/xmldsig#rsa-sha1", None),
        max_request_message_size: 65534,
    })
}

#[test]
fn decode_matches_structured_form() {
    let decoded = ServiceMessage::decode_message(&fixture_bytes()).unwrap();
    assert_eq!(decoded, structured());
}

#[test]
fn encode_matches_fixture_bytes() {
    let encoded = structured().encode_message().unwrap();
    assert_eq!(encoded, fixture_bytes());
}

#[test]
fn byte_len_matches_fixture_length() {
    assert_eq!(structured().byte_len(), fixture_bytes().len());
}

#[test]
fn reencoding_the_decoded_message_is_lossless() {
    let bytes = fixture_bytes();
    let decoded = ServiceMessage::decode_message(&bytes).unwrap();
    assert_eq!(decoded.encode_message().unwrap(), bytes);
}
