use crate::map::RoomId;

/// Alias for `Result<T, CrawlError>`.
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Errors that can occur when changing the shape of a room map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrawlError {
    /// The room already has an exit with this name.
    #[error("exit already exists: \"{0}\"")]
    ExitExists(String),

    /// The exit would lead to a room that does not exist.
    #[error("exit \"{0}\" has no target room")]
    NullTarget(String),

    /// The requested room is not part of the map.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
}
