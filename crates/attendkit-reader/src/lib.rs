//! Reader-node logic: authorization, the verification state machine, the
//! feedback catalogue, and the polling loop.
//!
//! The crate splits the node into a pure core and a thin I/O shell:
//!
//! - [`AttendanceController`] holds all state and decides transitions; its
//!   handlers take a clock reading and return [`Effect`]s, nothing else.
//! - [`ReaderLoop`] owns the peripherals and executes those effects each
//!   polling iteration.
//!
//! This keeps every transition of the machine testable with plain values
//! while the loop-level tests run against the channel-driven mocks.

pub mod controller;
pub mod feedback;
pub mod runner;
pub mod session;

pub use controller::{AttendanceController, Effect, ReaderState};
pub use feedback::FeedbackEvent;
pub use runner::ReaderLoop;
pub use session::{SessionSlot, VerificationSession};
