//! Outbound verification request frame.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A face-verification request from the reader node to the camera node.
///
/// The wire format is four lines sent as one logical message:
///
/// ```text
/// FACE_REQUEST
/// NAME:<name>
/// ID:<id>
/// END_REQUEST
/// ```
///
/// The request is fire-and-forget: no acknowledgement is defined, and the
/// reader relies on its own session timeout if the camera never answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Subject display name, as registered in the directory.
    pub name: String,

    /// Subject external identifier (student or employee number).
    pub id: String,
}

impl VerificationRequest {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Encode the request to its wire bytes, terminator included.
    pub fn to_wire(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for VerificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "FACE_REQUEST\nNAME:{}\nID:{}\nEND_REQUEST\n",
            self.name, self.id
        )
    }
}
