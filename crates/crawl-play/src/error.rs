//! Error types for play sessions.

use crawl_core::CrawlError;
use thiserror::Error;

/// Result type for play operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The input isn't a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command needs an argument that wasn't given.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The player has lost; only `quit` and `help` still work.
    #[error("the game is over")]
    GameOver,

    /// Only builders may change the map.
    #[error("only a builder can dig")]
    NotBuilder,

    /// The player is no longer where the session expects.
    #[error("the player is missing from the map")]
    PlayerMissing,

    /// Changing the map broke one of its rules.
    #[error(transparent)]
    Map(#[from] CrawlError),
}
