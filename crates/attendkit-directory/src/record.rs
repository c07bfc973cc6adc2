use attendkit_core::Uid;
use serde::{Deserialize, Serialize};

/// A registered badge holder.
///
/// Immutable after load; the directory owns one copy per known badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// 4-byte badge UID.
    pub uid: Uid,

    /// Display name, also the identity the camera node verifies against.
    pub name: String,

    /// External identifier (student or employee number).
    pub external_id: String,

    /// Department or program label, display-only.
    pub department: String,

    /// Deactivated records stay in the table but never authorize.
    pub active: bool,
}

impl UserRecord {
    pub fn new(
        uid: Uid,
        name: impl Into<String>,
        external_id: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            uid,
            name: name.into(),
            external_id: external_id.into(),
            department: department.into(),
            active: true,
        }
    }

    /// Same record with authorization revoked.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}
