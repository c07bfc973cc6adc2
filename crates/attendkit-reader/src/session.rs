//! Face-verification session lifecycle.
//!
//! A session is the bounded period between an authorized badge scan and
//! the camera node's verdict. At most one session exists at a time; a
//! second scan is rejected (busy), never queued.

use attendkit_core::{Error, Result, constants::FACE_TIMEOUT_MS};
use std::time::{Duration, Instant};

/// One in-flight face-verification attempt, tied to one authorized user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSession {
    /// The name the camera's verdict must match.
    pub subject_name: String,

    /// Subject external identifier, carried for logging and feedback.
    pub subject_id: String,

    /// When the verification request was issued.
    pub started_at: Instant,
}

impl VerificationSession {
    pub fn new(
        subject_name: impl Into<String>,
        subject_id: impl Into<String>,
        started_at: Instant,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            subject_id: subject_id.into(),
            started_at,
        }
    }

    /// Whether the session has outlived the response window.
    ///
    /// Boundary-inclusive: expired exactly at `started_at + 15 000 ms`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= Duration::from_millis(FACE_TIMEOUT_MS)
    }

    /// Whether a verified name belongs to this session's subject.
    pub fn matches(&self, name: &str) -> bool {
        self.subject_name == name
    }
}

/// The singleton session slot.
///
/// Enforces the one-session invariant: `start` fails while a session is
/// active, and the only way to make room is to `clear()` on success,
/// failure, mismatch, or timeout.
#[derive(Debug, Default)]
pub struct SessionSlot {
    current: Option<VerificationSession>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Begin a session for `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionAlreadyActive` if the slot is occupied.
    pub fn start(
        &mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        now: Instant,
    ) -> Result<&VerificationSession> {
        if let Some(active) = &self.current {
            return Err(Error::SessionAlreadyActive {
                subject: active.subject_name.clone(),
            });
        }
        self.current = Some(VerificationSession::new(name, id, now));
        // Just inserted above.
        self.current.as_ref().ok_or(Error::SessionNotActive)
    }

    /// The active session, if any.
    pub fn active(&self) -> Option<&VerificationSession> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// End the session, returning it for logging.
    pub fn clear(&mut self) -> Option<VerificationSession> {
        self.current.take()
    }
}
