use crate::{Result, constants::UID_LENGTH, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Badge UID broadcast by an RFID tag (exactly 4 bytes).
///
/// Formatted as colon-separated uppercase hex (`9B:3D:42:05`), which is also
/// the accepted parse format. Plain hex without separators is accepted too.
///
/// # Security
/// Equality is constant-time to avoid leaking how many leading bytes of a
/// presented badge match an authorized one.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Uid([u8; UID_LENGTH]);

impl Uid {
    /// Create a UID from raw bytes.
    pub const fn new(bytes: [u8; UID_LENGTH]) -> Self {
        Uid(bytes)
    }

    /// Create a UID from a byte slice.
    ///
    /// # Errors
    /// Returns `Error::InvalidUid` if the slice is not exactly 4 bytes.
    /// Readers report longer UIDs for double/triple-size tags; those are
    /// rejected here so authorization fails closed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; UID_LENGTH] = bytes.try_into().map_err(|_| Error::InvalidUid {
            message: format!("UID must be {UID_LENGTH} bytes, got {}", bytes.len()),
        })?;
        Ok(Uid(arr))
    }

    /// Get the raw UID bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl std::str::FromStr for Uid {
    type Err = Error;

    /// Parse `AA:BB:CC:DD` or `AABBCCDD` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let hex: String = s.chars().filter(|c| *c != ':').collect();
        if hex.len() != UID_LENGTH * 2 {
            return Err(Error::InvalidUid {
                message: format!("expected {} hex digits, got '{s}'", UID_LENGTH * 2),
            });
        }
        let mut bytes = [0u8; UID_LENGTH];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| Error::InvalidUid {
                message: format!("non-ASCII digit in '{s}'"),
            })?;
            bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| Error::InvalidUid {
                message: format!("invalid hex digit in '{s}'"),
            })?;
        }
        Ok(Uid(bytes))
    }
}

/// Constant-time comparison, same rationale as for card numbers in
/// authentication paths: comparison cost must not depend on where the
/// first mismatching byte sits.
impl PartialEq for Uid {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl std::hash::Hash for Uid {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
