//! Hardware abstraction layer for the attendance reader node.
//!
//! This crate defines trait-based abstractions for the reader's
//! peripherals: the RFID badge reader, the serial link to the camera node,
//! and the feedback panel (display, LEDs, buzzer). The traits enable
//! substitution between mock implementations (for development and testing)
//! and real device drivers.
//!
//! # Design Philosophy
//!
//! - **Async-first**: all I/O operations use native `async fn` in traits
//!   (Rust 1.90 + Edition 2024 RPITIT).
//! - **Non-blocking polling**: `poll_card()` and `try_recv()` return
//!   immediately, so a single cooperative loop can service every device.
//! - **Thread-safe**: all traits require `Send + Sync` for use with Tokio.
//! - **Error-aware**: all operations return [`Result<T>`][error::Result]
//!   with detailed failure context.
//!
//! # Mocks
//!
//! The [`mock`] module provides channel-driven mock devices with controller
//! handles, so the full reader loop can be exercised without hardware. The
//! mock camera link feeds raw byte chunks through the real line parser, so
//! even partial-line reassembly is covered.

pub mod error;
pub mod link;
pub mod mock;
pub mod traits;
pub mod types;

pub use error::{HardwareError, Result};
pub use link::TcpRemoteLink;
pub use traits::{CardScan, NotificationSink, RemoteLink, RfidReader};
pub use types::{BeepPattern, BeepPulse, LedColor, Notification};
