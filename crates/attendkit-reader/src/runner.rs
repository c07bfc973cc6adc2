//! The cooperative polling loop that drives the reader node.
//!
//! Single-threaded by construction: every iteration checks session expiry,
//! drains the camera link, polls the RFID reader, and sleeps. All session
//! mutations and feedback happen synchronously inside the iteration that
//! detected the triggering event, so the session slot is never shared.

use crate::controller::{AttendanceController, Effect, ReaderState};
use attendkit_core::constants::POLL_INTERVAL_MS;
use attendkit_hardware::{NotificationSink, RemoteLink, Result, RfidReader};
use std::time::{Duration, Instant};
use tracing::debug;

/// The reader node's main loop over its three peripherals.
pub struct ReaderLoop<R, L, P>
where
    R: RfidReader,
    L: RemoteLink,
    P: NotificationSink,
{
    controller: AttendanceController,
    rfid: R,
    link: L,
    panel: P,
}

impl<R, L, P> ReaderLoop<R, L, P>
where
    R: RfidReader,
    L: RemoteLink,
    P: NotificationSink,
{
    pub fn new(controller: AttendanceController, rfid: R, link: L, panel: P) -> Self {
        Self {
            controller,
            rfid,
            link,
            panel,
        }
    }

    pub fn state(&self) -> ReaderState {
        self.controller.state()
    }

    /// One loop iteration: expiry check, link drain, RFID poll.
    ///
    /// Exposed so tests can drive the loop deterministically without the
    /// inter-tick sleep.
    ///
    /// # Errors
    ///
    /// Returns an error if any peripheral fails; the loop treats device
    /// errors as fatal and leaves restart policy to the caller.
    pub async fn tick(&mut self) -> Result<()> {
        let now = Instant::now();

        let effects = self.controller.check_timeout(now);
        self.execute(effects).await?;

        // Drain every complete message the link has buffered; each may
        // finish the session, so effects run before the next message.
        while let Some(message) = self.link.try_recv().await? {
            debug!(message = %message, "camera message");
            let effects = self.controller.handle_message(message, now);
            self.execute(effects).await?;
        }

        if let Some(scan) = self.rfid.poll_card().await? {
            let effects = self.controller.handle_scan(&scan, now);
            self.execute(effects).await?;
        }

        Ok(())
    }

    /// Run until a peripheral fails.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.tick().await?;
            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }

    async fn execute(&mut self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::SendRequest(request) => self.link.send_request(&request).await?,
                Effect::Notify(event) => self.panel.present(&event.to_notification()).await?,
            }
        }
        Ok(())
    }
}
