use crate::UserRecord;
use attendkit_core::Uid;

/// Immutable roster of registered badge holders.
///
/// Built once at startup; no mutation operations. Lookup scans all records
/// in insertion order and returns the first active exact match, so a
/// duplicate UID resolves to whichever record was loaded first.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Authorize a scanned badge.
    ///
    /// Returns the first active record whose UID matches exactly, or `None`.
    /// Unknown and deactivated badges both fail closed to `None`; the
    /// caller cannot distinguish the two, which is intentional.
    pub fn lookup(&self, uid: &Uid) -> Option<&UserRecord> {
        self.records
            .iter()
            .find(|record| record.active && record.uid == *uid)
    }

    /// Number of records in the table, active or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }
}
