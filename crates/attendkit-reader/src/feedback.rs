//! Feedback catalogue: one fixed notification per user-visible scenario.
//!
//! Texts fit the deployed 16x2 character display. LED and buzzer pairings
//! follow the panel's conventions: green + success beeps for grants, red +
//! error beeps for denials and verification failures, a single warning
//! pulse for contention and non-fatal conditions.

use attendkit_hardware::{BeepPattern, LedColor, Notification};

/// Every scenario the reader presents to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// Badge authorized; verification request sent.
    Authorized { name: String, id: String },

    /// Badge not in the directory (or deactivated).
    Denied,

    /// Scan arrived while a session was in flight; scan dropped.
    Busy,

    /// Camera confirmed the session's subject.
    Verified { name: String },

    /// Camera verified a different person than the badge holder.
    Mismatch,

    /// No face detected in the capture window.
    FaceNotDetected,

    /// A face was detected but matched nobody enrolled.
    UnknownFace,

    /// Match confidence below the acceptance threshold.
    LowConfidence,

    /// No camera response within the session window.
    Timeout,

    /// Attendance record stored upstream.
    SheetsSaved,

    /// Upstream storage failed; attendance was still granted.
    SheetsFailed,
}

impl FeedbackEvent {
    /// Render the event to its fixed notification.
    pub fn to_notification(&self) -> Notification {
        match self {
            FeedbackEvent::Authorized { name, id } => Notification::new(
                format!("Hello {name}"),
                format!("ID: {id}"),
                LedColor::Green,
                BeepPattern::Success,
            ),
            FeedbackEvent::Denied => Notification::new(
                "ACCESS DENIED",
                "Unknown card",
                LedColor::Red,
                BeepPattern::Error,
            ),
            FeedbackEvent::Busy => Notification::new(
                "Please wait...",
                "Processing user",
                LedColor::Off,
                BeepPattern::Warning,
            ),
            FeedbackEvent::Verified { name } => Notification::new(
                "VERIFIED!",
                format!("{name} present"),
                LedColor::Green,
                BeepPattern::Success,
            ),
            FeedbackEvent::Mismatch => Notification::new(
                "VERIFICATION",
                "Face mismatch",
                LedColor::Red,
                BeepPattern::Error,
            ),
            FeedbackEvent::FaceNotDetected => Notification::new(
                "VERIFICATION",
                "Face not detected",
                LedColor::Red,
                BeepPattern::Error,
            ),
            FeedbackEvent::UnknownFace => Notification::new(
                "VERIFICATION",
                "Unknown face",
                LedColor::Red,
                BeepPattern::Error,
            ),
            FeedbackEvent::LowConfidence => Notification::new(
                "VERIFICATION",
                "Low confidence",
                LedColor::Red,
                BeepPattern::Error,
            ),
            FeedbackEvent::Timeout => Notification::new(
                "TIMEOUT!",
                "Try again",
                LedColor::Red,
                BeepPattern::Warning,
            ),
            FeedbackEvent::SheetsSaved => Notification::new(
                "Data saved to",
                "Google Sheets!",
                LedColor::Off,
                BeepPattern::Success,
            ),
            FeedbackEvent::SheetsFailed => Notification::new(
                "Warning:",
                "Data not saved",
                LedColor::Off,
                BeepPattern::Warning,
            ),
        }
    }
}
