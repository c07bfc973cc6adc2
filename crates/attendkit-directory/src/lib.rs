//! Authorized-user table for the reader node.
//!
//! The directory is a small, immutable roster loaded once at startup. A
//! badge scan is authorized by an exact UID match against an active record;
//! everything else fails closed.

pub mod directory;
pub mod record;

pub use directory::UserDirectory;
pub use record::UserRecord;
