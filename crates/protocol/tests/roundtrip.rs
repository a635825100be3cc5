//! Encode/decode property tests over generated service messages

use opcua_protocol::binary::{BinaryDecode, BinaryEncode, Reader, Writer};
use opcua_protocol::datatypes::{DateTime, ExtensionObject, NodeId, StatusCode};
use opcua_protocol::services::{
    ActivateSessionResponse, CloseSessionRequest, GetEndpointsRequest, OpenSecureChannelRequest,
    MessageSecurityMode, RequestHeader, ResponseHeader, SecurityTokenRequestType, ServiceMessage,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn opt_string() -> impl Strategy<Value = Option<String>> {
    option::of("[a-z0-9:/._-]{0,24}")
}

fn node_id_strategy() -> impl Strategy<Value = NodeId> {
    prop_oneof![
        any::<u8>().prop_map(|id| NodeId::TwoByte { id }),
        (any::<u8>(), any::<u16>()).prop_map(|(namespace, id)| NodeId::FourByte { namespace, id }),
        (any::<u16>(), any::<u32>()).prop_map(|(namespace, id)| NodeId::Numeric { namespace, id }),
        (any::<u16>(), "[a-zA-Z0-9]{0,16}").prop_map(|(ns, s)| NodeId::string(ns, s)),
        (any::<u16>(), vec(any::<u8>(), 0..24)).prop_map(|(ns, v)| NodeId::opaque(ns, v)),
    ]
}

prop_compose! {
    fn request_header_strategy()(
        authentication_token in node_id_strategy(),
        ticks in any::<i64>(),
        request_handle in any::<u32>(),
        return_diagnostics in any::<u32>(),
        audit_entry_id in opt_string(),
        timeout_hint in any::<u32>(),
    ) -> RequestHeader {
        RequestHeader {
            authentication_token,
            timestamp: DateTime::from_ticks(ticks),
            request_handle,
            return_diagnostics,
            audit_entry_id,
            timeout_hint,
            additional_header: ExtensionObject::null(),
        }
    }
}

prop_compose! {
    fn response_header_strategy()(
        ticks in any::<i64>(),
        request_handle in any::<u32>(),
        service_result in any::<u32>(),
        string_table in option::of(vec("[a-z ]{0,12}", 0..4)),
    ) -> ResponseHeader {
        ResponseHeader {
            timestamp: DateTime::from_ticks(ticks),
            request_handle,
            service_result: StatusCode(service_result),
            service_diagnostics: Default::default(),
            string_table,
            additional_header: ExtensionObject::null(),
        }
    }
}

fn message_strategy() -> impl Strategy<Value = ServiceMessage> {
    prop_oneof![
        (
            request_header_strategy(),
            opt_string(),
            option::of(vec("[a-z-]{0,8}", 0..3)),
            option::of(vec("[a-z:/]{0,12}", 0..3)),
        )
            .prop_map(|(request_header, endpoint_url, locale_ids, profile_uris)| {
                ServiceMessage::GetEndpointsRequest(GetEndpointsRequest {
                    request_header,
                    endpoint_url,
                    locale_ids,
                    profile_uris,
                })
            }),
        (
            request_header_strategy(),
            any::<u32>(),
            option::of(vec(any::<u8>(), 0..40)),
            any::<u32>(),
            any::<bool>(),
        )
            .prop_map(|(request_header, version, client_nonce, lifetime, renew)| {
                ServiceMessage::OpenSecureChannelRequest(OpenSecureChannelRequest {
                    request_header,
                    client_protocol_version: version,
                    request_type: if renew {
                        SecurityTokenRequestType::Renew
                    } else {
                        SecurityTokenRequestType::Issue
                    },
                    security_mode: MessageSecurityMode::SignAndEncrypt,
                    client_nonce,
                    requested_lifetime: lifetime,
                })
            }),
        (
            response_header_strategy(),
            option::of(vec(any::<u8>(), 0..40)),
            option::of(vec(any::<u32>(), 0..5)),
        )
            .prop_map(|(response_header, server_nonce, results)| {
                ServiceMessage::ActivateSessionResponse(ActivateSessionResponse {
                    response_header,
                    server_nonce,
                    results: results
                        .map(|codes| codes.into_iter().map(StatusCode).collect()),
                    diagnostic_infos: None,
                })
            }),
        (request_header_strategy(), any::<bool>()).prop_map(
            |(request_header, delete_subscriptions)| {
                ServiceMessage::CloseSessionRequest(CloseSessionRequest {
                    request_header,
                    delete_subscriptions,
                })
            }
        ),
    ]
}

proptest! {
    #[test]
    fn message_roundtrip_and_length_agreement(message in message_strategy()) {
        let encoded = message.encode_message().expect("encode");
        prop_assert_eq!(encoded.len(), message.byte_len());

        let decoded = ServiceMessage::decode_message(&encoded).expect("decode");
        prop_assert_eq!(&decoded, &message);

        // Re-encoding the decoded message reproduces the input bytes.
        prop_assert_eq!(decoded.encode_message().expect("encode"), encoded);
    }

    #[test]
    fn node_id_roundtrip(node_id in node_id_strategy()) {
        let mut writer = Writer::new();
        node_id.encode(&mut writer).expect("encode");
        prop_assert_eq!(writer.len(), node_id.byte_len());

        let bytes = writer.into_vec();
        let mut reader = Reader::new(&bytes);
        prop_assert_eq!(NodeId::decode(&mut reader).expect("decode"), node_id);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn numeric_constructor_is_minimal(namespace in any::<u16>(), id in any::<u32>()) {
        match NodeId::numeric(namespace, id) {
            NodeId::TwoByte { .. } => prop_assert!(namespace == 0 && id < 256),
            NodeId::FourByte { .. } => prop_assert!(namespace < 256 && id < 65536),
            NodeId::Numeric { .. } => prop_assert!(namespace >= 256 || id >= 65536),
            other => prop_assert!(false, "unexpected variant {:?}", other),
        }
    }
}
