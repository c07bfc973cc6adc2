//! Mock RFID reader for testing and development.

use crate::{
    HardwareError, Result,
    traits::{CardScan, RfidReader},
};
use attendkit_core::Uid;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Mock RFID reader driven by a controller handle.
///
/// Simulates badge presentations without physical hardware: the handle
/// queues scan events, and `poll_card()` drains them one per call the way
/// a real polling driver reports one badge per field entry.
///
/// # Examples
///
/// ```
/// use attendkit_hardware::mock::MockRfid;
/// use attendkit_hardware::traits::RfidReader;
/// use attendkit_core::Uid;
///
/// #[tokio::main]
/// async fn main() -> attendkit_hardware::Result<()> {
///     let (mut reader, handle) = MockRfid::new();
///
///     assert!(reader.poll_card().await?.is_none());
///
///     handle.present_card(Uid::new([0x9B, 0x3D, 0x42, 0x05])).await?;
///     let scan = reader.poll_card().await?.unwrap();
///     assert_eq!(scan.uid.to_string(), "9B:3D:42:05");
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRfid {
    event_rx: mpsc::Receiver<CardScan>,
}

impl MockRfid {
    /// Create a mock reader and its controller handle.
    pub fn new() -> (Self, MockRfidHandle) {
        let (event_tx, event_rx) = mpsc::channel(32);
        (Self { event_rx }, MockRfidHandle { event_tx })
    }
}

impl RfidReader for MockRfid {
    async fn poll_card(&mut self) -> Result<Option<CardScan>> {
        match self.event_rx.try_recv() {
            Ok(scan) => Ok(Some(scan)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                Err(HardwareError::disconnected("mock RFID event channel"))
            }
        }
    }
}

/// Handle for presenting badges to a [`MockRfid`].
#[derive(Debug, Clone)]
pub struct MockRfidHandle {
    event_tx: mpsc::Sender<CardScan>,
}

impl MockRfidHandle {
    /// Present a badge, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader has been dropped.
    pub async fn present_card(&self, uid: Uid) -> Result<()> {
        self.present_scan(CardScan::new(uid)).await
    }

    /// Present a prepared scan event, e.g. with a fixed timestamp.
    pub async fn present_scan(&self, scan: CardScan) -> Result<()> {
        self.event_tx
            .send(scan)
            .await
            .map_err(|_| HardwareError::disconnected("mock RFID event channel"))
    }
}
