//! Mock camera link for testing and development.
//!
//! Inbound data is fed as raw byte chunks and goes through a real
//! [`LineParser`], so tests exercise the same partial-line reassembly the
//! wire path uses. Outbound requests are observable from the handle.

use crate::{
    HardwareError, Result,
    traits::RemoteLink,
};
use attendkit_protocol::{LineParser, RemoteMessage, VerificationRequest};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Mock camera link driven by a controller handle.
///
/// # Examples
///
/// ```
/// use attendkit_hardware::mock::MockRemoteLink;
/// use attendkit_hardware::traits::RemoteLink;
/// use attendkit_protocol::RemoteMessage;
///
/// #[tokio::main]
/// async fn main() -> attendkit_hardware::Result<()> {
///     let (mut link, handle) = MockRemoteLink::new();
///
///     // Response arrives split across two chunks.
///     handle.feed_bytes(b"FACE_VER").await?;
///     assert!(link.try_recv().await?.is_none());
///
///     handle.feed_bytes(b"IFIED:Taz\n").await?;
///     assert_eq!(
///         link.try_recv().await?,
///         Some(RemoteMessage::FaceVerified("Taz".to_string()))
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRemoteLink {
    inbound_rx: mpsc::Receiver<Vec<u8>>,
    outbound_tx: mpsc::Sender<VerificationRequest>,
    parser: LineParser,
}

impl MockRemoteLink {
    /// Create a mock link and its controller handle.
    pub fn new() -> (Self, MockRemoteLinkHandle) {
        let (inbound_tx, inbound_rx) = mpsc::channel(32);
        let (outbound_tx, outbound_rx) = mpsc::channel(32);

        let link = Self {
            inbound_rx,
            outbound_tx,
            parser: LineParser::new(),
        };
        let handle = MockRemoteLinkHandle {
            inbound_tx,
            outbound_rx,
        };
        (link, handle)
    }

    /// Drain every pending inbound chunk into the line parser.
    fn pump_inbound(&mut self) -> Result<()> {
        loop {
            match self.inbound_rx.try_recv() {
                Ok(chunk) => self.parser.feed(&chunk),
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    // Buffered lines are still deliverable after the handle
                    // goes away; only report disconnect once drained.
                    if self.parser.lines_available() == 0 {
                        return Err(HardwareError::disconnected("mock camera link"));
                    }
                    return Ok(());
                }
            }
        }
    }
}

impl RemoteLink for MockRemoteLink {
    async fn send_request(&mut self, request: &VerificationRequest) -> Result<()> {
        self.outbound_tx
            .send(request.clone())
            .await
            .map_err(|_| HardwareError::disconnected("mock camera link"))
    }

    async fn try_recv(&mut self) -> Result<Option<RemoteMessage>> {
        self.pump_inbound()?;
        Ok(self
            .parser
            .next_line()
            .map(|line| RemoteMessage::parse(&line)))
    }
}

/// Handle for controlling a [`MockRemoteLink`].
#[derive(Debug)]
pub struct MockRemoteLinkHandle {
    inbound_tx: mpsc::Sender<Vec<u8>>,
    outbound_rx: mpsc::Receiver<VerificationRequest>,
}

impl MockRemoteLinkHandle {
    /// Feed raw bytes into the link, as the camera's serial port would.
    ///
    /// Chunks need not align with line boundaries.
    pub async fn feed_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.inbound_tx
            .send(bytes.to_vec())
            .await
            .map_err(|_| HardwareError::disconnected("mock camera link"))
    }

    /// Feed one complete message line, terminator appended.
    pub async fn feed_line(&self, line: &str) -> Result<()> {
        self.feed_bytes(format!("{line}\n").as_bytes()).await
    }

    /// Take the next verification request the reader sent, if any.
    pub fn try_next_request(&mut self) -> Option<VerificationRequest> {
        self.outbound_rx.try_recv().ok()
    }

    /// Wait for the next verification request the reader sends.
    pub async fn next_request(&mut self) -> Option<VerificationRequest> {
        self.outbound_rx.recv().await
    }
}
