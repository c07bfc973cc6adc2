//! Inbound messages from the camera node.
//!
//! Every message is a single text line with a recognized tag. Lines that do
//! not match any tag are not errors at this layer: the link may carry boot
//! noise or diagnostics from the camera firmware, so parsing is total and
//! unrecognized lines land in [`RemoteMessage::Unknown`] for the caller to
//! log and drop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message from the camera node.
///
/// Messages are stateless and transient: each one is consumed immediately
/// when its full line arrives, and none of them carry framing beyond the
/// line terminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemoteMessage {
    /// The camera matched the live face to an enrolled identity.
    ///
    /// Carries the matched name. The reader compares it against the active
    /// session's subject; a different name is a mismatch, not a success.
    FaceVerified(String),

    /// A face was detected but matched no enrolled identity.
    FaceNotFound,

    /// No usable face was detected in the capture window.
    FaceUnknown,

    /// Match confidence report, in percent.
    ///
    /// Low values fail the session. High values carry no state effect on
    /// their own; acceptance is always signalled by a separate
    /// [`FaceVerified`](Self::FaceVerified) message.
    FaceConfidence(f32),

    /// The camera node logged the attendance record upstream.
    SheetsSuccess,

    /// The camera node failed to log the attendance record upstream.
    SheetsFailed,

    /// A line matching no recognized tag, carried verbatim.
    ///
    /// Includes tagged lines with malformed payloads (e.g. a non-numeric
    /// confidence value). Logged and ignored by the state machine.
    Unknown(String),
}

impl RemoteMessage {
    /// Parse a single line into a message.
    ///
    /// Total: any input yields a message, with unrecognized or malformed
    /// lines mapped to [`Unknown`](Self::Unknown) rather than an error.
    pub fn parse(line: &str) -> Self {
        if let Some(name) = line.strip_prefix("FACE_VERIFIED:") {
            return RemoteMessage::FaceVerified(name.to_string());
        }
        if let Some(value) = line.strip_prefix("FACE_CONFIDENCE:") {
            return match value.trim().parse::<f32>() {
                Ok(v) => RemoteMessage::FaceConfidence(v),
                Err(_) => RemoteMessage::Unknown(line.to_string()),
            };
        }
        match line {
            "FACE_NOT_FOUND" => RemoteMessage::FaceNotFound,
            "FACE_UNKNOWN" => RemoteMessage::FaceUnknown,
            "SHEETS_SUCCESS" => RemoteMessage::SheetsSuccess,
            "SHEETS_FAILED" => RemoteMessage::SheetsFailed,
            other => RemoteMessage::Unknown(other.to_string()),
        }
    }

    /// Whether this message matched a recognized tag.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RemoteMessage::Unknown(_))
    }
}

impl fmt::Display for RemoteMessage {
    /// Wire format of the message, without the line terminator.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemoteMessage::FaceVerified(name) => write!(f, "FACE_VERIFIED:{name}"),
            RemoteMessage::FaceNotFound => write!(f, "FACE_NOT_FOUND"),
            RemoteMessage::FaceUnknown => write!(f, "FACE_UNKNOWN"),
            RemoteMessage::FaceConfidence(v) => write!(f, "FACE_CONFIDENCE:{v}"),
            RemoteMessage::SheetsSuccess => write!(f, "SHEETS_SUCCESS"),
            RemoteMessage::SheetsFailed => write!(f, "SHEETS_FAILED"),
            RemoteMessage::Unknown(line) => write!(f, "{line}"),
        }
    }
}
