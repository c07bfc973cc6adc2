use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Badge / credential errors
    #[error("Invalid badge UID: {message}")]
    InvalidUid { message: String },

    // Protocol errors
    #[error("Invalid message format: {message}")]
    InvalidMessageFormat { message: String },

    // Session errors
    #[error("Verification session already active for {subject}")]
    SessionAlreadyActive { subject: String },

    #[error("No verification session active")]
    SessionNotActive,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
