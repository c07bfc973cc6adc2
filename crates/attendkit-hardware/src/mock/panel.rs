//! Mock feedback panel for testing and development.

use crate::{
    Result,
    traits::NotificationSink,
    types::Notification,
};
use std::sync::{Arc, Mutex};

/// Mock feedback panel that records every notification.
///
/// `present()` returns immediately instead of sleeping through the buzzer
/// pattern, so controller tests run in real time zero.
#[derive(Debug, Default)]
pub struct MockPanel {
    presented: Arc<Mutex<Vec<Notification>>>,
}

impl MockPanel {
    /// Create a mock panel and its observer handle.
    pub fn new() -> (Self, MockPanelHandle) {
        let presented = Arc::new(Mutex::new(Vec::new()));
        let handle = MockPanelHandle {
            presented: Arc::clone(&presented),
        };
        (Self { presented }, handle)
    }
}

impl NotificationSink for MockPanel {
    async fn present(&mut self, notification: &Notification) -> Result<()> {
        // Lock cannot be poisoned: the only writers are this method and
        // the handle's clear(), neither of which panics while holding it.
        if let Ok(mut presented) = self.presented.lock() {
            presented.push(notification.clone());
        }
        Ok(())
    }
}

/// Handle for inspecting what a [`MockPanel`] has shown.
#[derive(Debug, Clone)]
pub struct MockPanelHandle {
    presented: Arc<Mutex<Vec<Notification>>>,
}

impl MockPanelHandle {
    /// All notifications presented so far, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.presented.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.presented
            .lock()
            .ok()
            .and_then(|p| p.last().cloned())
    }

    /// Number of notifications presented so far.
    pub fn count(&self) -> usize {
        self.presented.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Forget everything presented so far.
    pub fn clear(&self) {
        if let Ok(mut presented) = self.presented.lock() {
            presented.clear();
        }
    }
}
