//! Hardware device trait definitions.
//!
//! These traits establish the contract between the reader loop and its
//! peripherals (RFID reader, camera link, feedback panel), enabling
//! substitution between mock and real hardware implementations.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024
//! RPITIT), eliminating the need for the `async_trait` macro.
//!
//! # Object Safety and Dynamic Dispatch
//!
//! These traits are NOT object-safe: `async fn` methods return opaque
//! `impl Future` types that cannot appear in trait objects. Use generic
//! type parameters instead:
//!
//! ```no_run
//! use attendkit_hardware::traits::RfidReader;
//! use attendkit_hardware::error::Result;
//!
//! async fn poll_once<R: RfidReader>(reader: &mut R) -> Result<()> {
//!     if let Some(scan) = reader.poll_card().await? {
//!         println!("badge {}", scan.uid);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::Notification;
use attendkit_core::Uid;
use attendkit_protocol::{RemoteMessage, VerificationRequest};

/// A badge presence event reported by an RFID reader.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScan {
    /// 4-byte badge UID.
    pub uid: Uid,

    /// When the badge entered the reader's field.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl CardScan {
    /// Create a scan event stamped with the current time.
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a scan event with an explicit timestamp, for replaying
    /// recorded events in tests.
    pub fn at(uid: Uid, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        Self { uid, timestamp }
    }
}

/// RFID reader abstraction.
pub trait RfidReader: Send + Sync {
    /// Poll for a badge in the reader's field.
    ///
    /// Non-blocking: returns `Ok(None)` immediately when no badge is
    /// present. The polling loop calls this once per tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is disconnected or a communication
    /// error occurs.
    async fn poll_card(&mut self) -> Result<Option<CardScan>>;
}

/// The serial link to the camera node.
///
/// Message-level: implementations own the byte-stream reassembly, so the
/// reader loop only ever sees whole requests and whole messages.
pub trait RemoteLink: Send + Sync {
    /// Send a verification request as one logical write.
    ///
    /// Fire-and-forget: the protocol defines no acknowledgement, and the
    /// caller's session timeout covers a camera that never answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the link is down or the write fails.
    async fn send_request(&mut self, request: &VerificationRequest) -> Result<()>;

    /// Poll for the next inbound message.
    ///
    /// Non-blocking: returns `Ok(None)` immediately when no complete
    /// message has arrived. Partial lines stay buffered inside the link
    /// until a later poll completes them.
    ///
    /// # Errors
    ///
    /// Returns an error if the link is down.
    async fn try_recv(&mut self) -> Result<Option<RemoteMessage>>;
}

/// The user-facing feedback panel (display, LEDs, buzzer).
pub trait NotificationSink: Send + Sync {
    /// Present a notification: both display lines, the LED, and the full
    /// buzzer pattern.
    ///
    /// Completes only after the buzzer pattern has finished; the caller is
    /// expected to be blocked for the pattern's duration, matching the
    /// panel's non-cancellable feedback behavior. Mock panels return
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel is disconnected.
    async fn present(&mut self, notification: &Notification) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_scan_with_explicit_timestamp() {
        use chrono::TimeZone;

        let when = chrono::Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let scan = CardScan::at(Uid::new([0x9B, 0x3D, 0x42, 0x05]), when);
        assert_eq!(scan.timestamp, when);
        assert_eq!(scan.uid.to_string(), "9B:3D:42:05");
    }

    #[test]
    fn test_card_scan_now_is_recent() {
        let before = chrono::Utc::now();
        let scan = CardScan::new(Uid::new([1, 2, 3, 4]));
        assert!(scan.timestamp >= before);
    }
}
