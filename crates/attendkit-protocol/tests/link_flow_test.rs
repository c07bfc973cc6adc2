//! Integration tests for the camera-link wire protocol.
//!
//! Exercises the full path a real session takes over the link:
//! 1. Reader encodes a verification request
//! 2. Camera answers with tagged lines, possibly fragmented
//! 3. Reader reassembles and decodes the response messages

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use attendkit_protocol::{FaceLinkCodec, LineParser, RemoteMessage, VerificationRequest};

// ============================================================================
// Test Data Constants
// ============================================================================

mod test_data {
    /// Registered subject used across scenarios.
    pub const SUBJECT_NAME: &str = "Taz";

    /// Subject external identifier (student number).
    pub const SUBJECT_ID: &str = "202314100";
}

// ============================================================================
// Request Encoding
// ============================================================================

#[test]
fn test_request_wire_format() {
    use test_data::*;

    let mut codec = FaceLinkCodec::new();
    let mut wire = BytesMut::new();
    codec
        .encode(VerificationRequest::new(SUBJECT_NAME, SUBJECT_ID), &mut wire)
        .unwrap();

    let text = String::from_utf8(wire.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["FACE_REQUEST", "NAME:Taz", "ID:202314100", "END_REQUEST"]
    );
    assert!(text.ends_with('\n'));
}

// ============================================================================
// Response Decoding - Happy Path
// ============================================================================

#[test]
fn test_verified_response_flow() {
    use test_data::*;

    let mut codec = FaceLinkCodec::new();

    // Camera reports confidence first, then the verdict, then the upstream
    // logging result, all in one burst.
    let mut wire = BytesMut::from(
        &b"FACE_CONFIDENCE:88.4\nFACE_VERIFIED:Taz\nSHEETS_SUCCESS\n"[..],
    );

    assert_eq!(
        codec.decode(&mut wire).unwrap(),
        Some(RemoteMessage::FaceConfidence(88.4))
    );
    assert_eq!(
        codec.decode(&mut wire).unwrap(),
        Some(RemoteMessage::FaceVerified(SUBJECT_NAME.to_string()))
    );
    assert_eq!(
        codec.decode(&mut wire).unwrap(),
        Some(RemoteMessage::SheetsSuccess)
    );
    assert_eq!(codec.decode(&mut wire).unwrap(), None);
}

// ============================================================================
// Response Decoding - Fragmentation
// ============================================================================

#[test]
fn test_fragmented_response_reassembled_once() {
    let mut codec = FaceLinkCodec::new();

    // Response arrives split across three reads.
    let mut part1 = BytesMut::from(&b"FACE_VER"[..]);
    assert_eq!(codec.decode(&mut part1).unwrap(), None);

    let mut part2 = BytesMut::from(&b"IFIED:"[..]);
    assert_eq!(codec.decode(&mut part2).unwrap(), None);

    let mut part3 = BytesMut::from(&b"Taz\n"[..]);
    assert_eq!(
        codec.decode(&mut part3).unwrap(),
        Some(RemoteMessage::FaceVerified("Taz".to_string()))
    );

    // And only once.
    let mut empty = BytesMut::new();
    assert_eq!(codec.decode(&mut empty).unwrap(), None);
}

#[test]
fn test_byte_by_byte_decoding() {
    let mut codec = FaceLinkCodec::new();

    let mut decoded = Vec::new();
    for &byte in b"FACE_NOT_FOUND\nSHEETS_FAILED\n" {
        let mut buf = BytesMut::from(&[byte][..]);
        while let Some(msg) = codec.decode(&mut buf).unwrap() {
            decoded.push(msg);
        }
    }

    assert_eq!(
        decoded,
        vec![RemoteMessage::FaceNotFound, RemoteMessage::SheetsFailed]
    );
}

// ============================================================================
// Response Decoding - Noise Tolerance
// ============================================================================

#[test]
fn test_firmware_noise_surfaces_as_unknown() {
    let mut codec = FaceLinkCodec::new();
    let mut wire = BytesMut::from(&b"rst:0x1 (POWERON_RESET)\nFACE_UNKNOWN\n"[..]);

    assert_eq!(
        codec.decode(&mut wire).unwrap(),
        Some(RemoteMessage::Unknown("rst:0x1 (POWERON_RESET)".to_string()))
    );
    assert_eq!(
        codec.decode(&mut wire).unwrap(),
        Some(RemoteMessage::FaceUnknown)
    );
}

#[test]
fn test_request_echo_not_decoded_as_response() {
    // If the link echoes our own request lines back, none of them parse as
    // recognized camera messages.
    let mut codec = FaceLinkCodec::new();
    let mut wire = BytesMut::from(&b"FACE_REQUEST\nNAME:Taz\nID:202314100\nEND_REQUEST\n"[..]);

    while let Some(msg) = codec.decode(&mut wire).unwrap() {
        assert!(!msg.is_recognized(), "unexpected message: {msg:?}");
    }
}

// ============================================================================
// Raw Parser Interop
// ============================================================================

#[test]
fn test_line_parser_and_message_layer_agree() {
    // The polling path uses LineParser directly rather than through Framed;
    // both layers must see the same messages.
    let mut parser = LineParser::new();
    parser.feed(b"FACE_CONFIDENCE:69.9\r\nFACE_NOT_FOUND\r\n");

    let messages: Vec<_> = parser
        .drain_lines()
        .map(|line| RemoteMessage::parse(&line))
        .collect();

    assert_eq!(
        messages,
        vec![
            RemoteMessage::FaceConfidence(69.9),
            RemoteMessage::FaceNotFound
        ]
    );
}
