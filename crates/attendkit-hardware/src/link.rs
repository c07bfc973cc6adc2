//! Camera link over TCP.
//!
//! The deployed system carries the face link over a UART; development and
//! bench setups bridge that UART to TCP. This implementation runs the
//! [`FaceLinkCodec`] over a framed TCP stream, so the reader loop sees the
//! same message-level interface either way.

use crate::{HardwareError, Result, traits::RemoteLink};
use attendkit_protocol::{FaceLinkCodec, RemoteMessage, VerificationRequest};
use futures::{FutureExt, SinkExt, StreamExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::Framed;
use tracing::debug;

/// [`RemoteLink`] over a serial-to-TCP bridge.
pub struct TcpRemoteLink {
    framed: Framed<TcpStream, FaceLinkCodec>,
}

impl TcpRemoteLink {
    /// Connect to the bridge at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        debug!("camera link connected: {:?}", stream.peer_addr());
        Ok(Self {
            framed: Framed::new(stream, FaceLinkCodec::new()),
        })
    }

    /// Wrap an already-connected stream (e.g. the accept side in tests).
    pub fn from_stream(stream: TcpStream) -> Self {
        Self {
            framed: Framed::new(stream, FaceLinkCodec::new()),
        }
    }
}

impl RemoteLink for TcpRemoteLink {
    async fn send_request(&mut self, request: &VerificationRequest) -> Result<()> {
        self.framed
            .send(request.clone())
            .await
            .map_err(|e| HardwareError::communication(format!("send failed: {e}")))
    }

    async fn try_recv(&mut self) -> Result<Option<RemoteMessage>> {
        // Poll the framed stream exactly once; a pending read means no
        // complete message is buffered yet.
        match self.framed.next().now_or_never() {
            Some(Some(Ok(message))) => Ok(Some(message)),
            Some(Some(Err(e))) => Err(HardwareError::communication(format!("recv failed: {e}"))),
            Some(None) => Err(HardwareError::disconnected("camera link")),
            None => Ok(None),
        }
    }
}
