//! Error types for archive operations

use thiserror::Error;

/// Archive operation result type
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Faults raised by an archive collaborator
///
/// A member that does not exist is never an error; readers report it as
/// `None`. These variants cover the container itself being unreadable.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O error while reading the container or a member
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container is corrupt or uses an unsupported feature
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Member name escapes the archive root or is otherwise unusable
    #[error("Invalid member name: {0:?}")]
    InvalidMemberName(String),
}

impl ArchiveError {
    /// Check if this error was caused by the caller's member name rather than
    /// the container
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidMemberName(_))
    }
}
