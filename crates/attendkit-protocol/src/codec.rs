//! Tokio codec for the reader-camera link.
//!
//! Wraps the [`LineParser`] so the link can be driven through Tokio's
//! `Framed` streams when it is carried over TCP (a serial-over-network
//! bridge, or the in-process loopback used in tests and demos).
//!
//! ```text
//! byte stream -> Decoder -> RemoteMessage
//! VerificationRequest -> Encoder -> byte stream
//! ```
//!
//! Decoding never fails on message content: parsing is total, so firmware
//! boot noise and malformed lines surface as [`RemoteMessage::Unknown`]
//! rather than stalling the framed stream with an error.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::{LineParser, RemoteMessage, VerificationRequest};
use attendkit_core::{Error, Result};

/// Tokio codec for camera-link messages.
///
/// Decodes inbound bytes into [`RemoteMessage`] values and encodes
/// [`VerificationRequest`] frames on the way out.
#[derive(Debug, Default)]
pub struct FaceLinkCodec {
    parser: LineParser,
}

impl FaceLinkCodec {
    pub fn new() -> Self {
        Self {
            parser: LineParser::new(),
        }
    }
}

impl Decoder for FaceLinkCodec {
    type Item = RemoteMessage;
    type Error = Error;

    /// Decode the next message from the byte stream.
    ///
    /// Returns `Ok(None)` when no complete line is available yet.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if !src.is_empty() {
            // LineParser copies into its own buffer; all bytes are consumed.
            self.parser.feed(src);
            src.clear();
        }

        Ok(self
            .parser
            .next_line()
            .map(|line| RemoteMessage::parse(&line)))
    }
}

impl Encoder<VerificationRequest> for FaceLinkCodec {
    type Error = Error;

    fn encode(&mut self, item: VerificationRequest, dst: &mut BytesMut) -> Result<()> {
        dst.extend_from_slice(&item.to_wire());
        Ok(())
    }
}
