//! Line-oriented message protocol spoken between the reader node and the
//! camera node.
//!
//! The link is a plain byte stream carrying ASCII text lines terminated by
//! `\n`. The reader sends a four-line verification request; the camera
//! answers with single-line tagged messages (`FACE_VERIFIED:<name>`,
//! `FACE_NOT_FOUND`, and so on).

pub mod codec;
pub mod line_parser;
pub mod message;
pub mod request;

pub use codec::FaceLinkCodec;
pub use line_parser::{DrainLines, LineParser};
pub use message::RemoteMessage;
pub use request::VerificationRequest;
