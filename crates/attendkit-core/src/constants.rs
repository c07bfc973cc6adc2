//! Shared constants for the attendance pipeline.
//!
//! These values define the timing and protocol behavior of the reader node.
//! They match the deployed two-node system: a reader node (RFID + feedback
//! panel) talking to a camera node over a line-oriented serial link.

// ============================================================================
// Badge Format
// ============================================================================

/// Length of a badge UID in bytes.
///
/// Only 4-byte (single-size) Mifare UIDs are accepted; tags with 7- or
/// 10-byte UIDs fail authorization closed.
pub const UID_LENGTH: usize = 4;

// ============================================================================
// Verification Timing
// ============================================================================

/// Maximum time to wait for a face-verification response (milliseconds).
///
/// Once a verification request is sent to the camera node, the session is
/// abandoned and the reader returns to idle if no response arrives within
/// this window. The boundary is inclusive: a session is expired exactly at
/// `started_at + FACE_TIMEOUT_MS`.
pub const FACE_TIMEOUT_MS: u64 = 15_000;

/// Polling loop period for the reader node (milliseconds).
///
/// Each iteration checks session expiry, drains the remote link, and polls
/// the RFID reader. Scan and response latency is bounded by this period plus
/// any feedback sequence in progress.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Minimum acceptable face-match confidence (percent).
///
/// A `FACE_CONFIDENCE` report below this value fails the session. Values at
/// or above the threshold carry no state effect on their own; acceptance is
/// always signalled by a separate `FACE_VERIFIED` message.
pub const CONFIDENCE_THRESHOLD: f32 = 70.0;

// ============================================================================
// Serial Link Framing
// ============================================================================

/// Line terminator on the serial link.
pub const LINE_FEED: u8 = b'\n';

/// Discarded wherever it appears in inbound data.
pub const CARRIAGE_RETURN: u8 = b'\r';

// ============================================================================
// Buzzer Pulse Timings (milliseconds)
// ============================================================================

/// Success pattern: three short pulses.
pub const BEEP_SUCCESS_ON_MS: u64 = 100;
pub const BEEP_SUCCESS_OFF_MS: u64 = 50;
pub const BEEP_SUCCESS_COUNT: usize = 3;

/// Error pattern: two long pulses.
pub const BEEP_ERROR_ON_MS: u64 = 500;
pub const BEEP_ERROR_OFF_MS: u64 = 200;
pub const BEEP_ERROR_COUNT: usize = 2;

/// Warning pattern: one medium pulse.
pub const BEEP_WARNING_ON_MS: u64 = 300;
pub const BEEP_WARNING_COUNT: usize = 1;
