//! The reader node's request/response state machine.
//!
//! Coordinates RFID authorization, the time-bounded verification handshake
//! with the camera node, and user-facing feedback. Transitions are pure:
//! each handler takes the current clock reading and returns the effects to
//! execute, so the whole machine is testable without devices.
//!
//! # State Machine
//!
//! ```text
//!               authorized scan / send request
//!   ┌────────┐ ───────────────────────────────> ┌──────────────────────┐
//!   │  IDLE  │                                  │ AWAITING_VERIFICATION │
//!   └────────┘ <─────────────────────────────── └──────────────────────┘
//!               verdict, low confidence, or
//!               15 s timeout / clear session
//! ```
//!
//! Denied scans keep the machine in `IDLE`; scans during a session are
//! dropped with busy feedback, never queued. `SHEETS_*` reports are
//! informational in any state.

use crate::feedback::FeedbackEvent;
use crate::session::SessionSlot;
use attendkit_core::constants::CONFIDENCE_THRESHOLD;
use attendkit_directory::UserDirectory;
use attendkit_hardware::CardScan;
use attendkit_protocol::{RemoteMessage, VerificationRequest};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Ready for a badge.
    Idle,

    /// Verification request sent; waiting for the camera's verdict.
    AwaitingVerification,
}

/// An action the polling loop must execute after a transition.
///
/// Effects are executed synchronously, in order, within the same loop
/// iteration that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write a verification request to the camera link.
    SendRequest(VerificationRequest),

    /// Present feedback on the panel.
    Notify(FeedbackEvent),
}

/// The attendance state machine.
///
/// Owns the user directory and the session slot. All mutation goes through
/// the three handlers, each driven by the polling loop.
#[derive(Debug)]
pub struct AttendanceController {
    directory: UserDirectory,
    slot: SessionSlot,
}

impl AttendanceController {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            slot: SessionSlot::new(),
        }
    }

    pub fn state(&self) -> ReaderState {
        if self.slot.is_active() {
            ReaderState::AwaitingVerification
        } else {
            ReaderState::Idle
        }
    }

    /// Process a badge scan.
    ///
    /// Authorized scans open a session and request verification; unknown
    /// badges are denied; any scan during an active session is dropped
    /// with busy feedback.
    pub fn handle_scan(&mut self, scan: &CardScan, now: Instant) -> Vec<Effect> {
        if let Some(session) = self.slot.active() {
            info!(
                uid = %scan.uid,
                subject = %session.subject_name,
                "scan dropped: verification in progress"
            );
            return vec![Effect::Notify(FeedbackEvent::Busy)];
        }

        match self.directory.lookup(&scan.uid) {
            Some(record) => {
                info!(uid = %scan.uid, name = %record.name, "badge authorized");
                let name = record.name.clone();
                let id = record.external_id.clone();

                // The slot was just checked empty; start cannot fail here,
                // but a denial keeps the machine consistent if it ever did.
                if self.slot.start(name.clone(), id.clone(), now).is_err() {
                    return vec![Effect::Notify(FeedbackEvent::Busy)];
                }

                info!(name = %name, "face verification requested");
                vec![
                    Effect::Notify(FeedbackEvent::Authorized {
                        name: name.clone(),
                        id: id.clone(),
                    }),
                    Effect::SendRequest(VerificationRequest::new(name, id)),
                ]
            }
            None => {
                info!(uid = %scan.uid, "badge denied: not in directory");
                vec![Effect::Notify(FeedbackEvent::Denied)]
            }
        }
    }

    /// Process a message from the camera node.
    pub fn handle_message(&mut self, message: RemoteMessage, _now: Instant) -> Vec<Effect> {
        match message {
            // Informational in any state, no session effect.
            RemoteMessage::SheetsSuccess => {
                info!("attendance record saved upstream");
                vec![Effect::Notify(FeedbackEvent::SheetsSaved)]
            }
            RemoteMessage::SheetsFailed => {
                warn!("attendance record not saved upstream");
                vec![Effect::Notify(FeedbackEvent::SheetsFailed)]
            }

            RemoteMessage::Unknown(line) => {
                debug!(line = %line, "unrecognized camera message ignored");
                vec![]
            }

            face_message if !self.slot.is_active() => {
                // A verdict with no session: late response after timeout,
                // or camera noise. Nothing to act on.
                debug!(message = %face_message, "face message dropped: no active session");
                vec![]
            }

            RemoteMessage::FaceVerified(name) => self.finish_verified(&name),

            RemoteMessage::FaceNotFound => self.finish_failed(FeedbackEvent::FaceNotDetected),

            RemoteMessage::FaceUnknown => self.finish_failed(FeedbackEvent::UnknownFace),

            RemoteMessage::FaceConfidence(value) => {
                if value < CONFIDENCE_THRESHOLD {
                    info!(confidence = value, "confidence below threshold");
                    self.finish_failed(FeedbackEvent::LowConfidence)
                } else {
                    // Acceptance is carried by a separate FACE_VERIFIED
                    // message; a high confidence report alone changes nothing.
                    debug!(confidence = value, "confidence accepted");
                    vec![]
                }
            }
        }
    }

    /// Expire the session if the response window has closed.
    ///
    /// Polled every loop iteration; no remote message is required for the
    /// machine to recover.
    pub fn check_timeout(&mut self, now: Instant) -> Vec<Effect> {
        let expired = self
            .slot
            .active()
            .is_some_and(|session| session.is_expired(now));
        if !expired {
            return vec![];
        }

        if let Some(session) = self.slot.clear() {
            warn!(subject = %session.subject_name, "face verification timed out");
        }
        vec![Effect::Notify(FeedbackEvent::Timeout)]
    }

    fn finish_verified(&mut self, verified_name: &str) -> Vec<Effect> {
        let matched = self
            .slot
            .active()
            .is_some_and(|session| session.matches(verified_name));
        let session = self.slot.clear();

        if matched {
            if let Some(session) = &session {
                info!(subject = %session.subject_name, "attendance recorded");
            }
            vec![Effect::Notify(FeedbackEvent::Verified {
                name: verified_name.to_string(),
            })]
        } else {
            if let Some(session) = &session {
                warn!(
                    subject = %session.subject_name,
                    verified = %verified_name,
                    "face mismatch"
                );
            }
            vec![Effect::Notify(FeedbackEvent::Mismatch)]
        }
    }

    fn finish_failed(&mut self, event: FeedbackEvent) -> Vec<Effect> {
        if let Some(session) = self.slot.clear() {
            info!(subject = %session.subject_name, event = ?event, "verification failed");
        }
        vec![Effect::Notify(event)]
    }
}
