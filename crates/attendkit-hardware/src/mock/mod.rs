//! Mock device implementations for testing and development.
//!
//! Each mock comes with a controller handle: the device side implements the
//! hardware trait and is consumed by the reader loop, while the handle side
//! stays with the test to inject events and observe outputs.

pub mod link;
pub mod panel;
pub mod rfid;

pub use link::{MockRemoteLink, MockRemoteLinkHandle};
pub use panel::{MockPanel, MockPanelHandle};
pub use rfid::{MockRfid, MockRfidHandle};
