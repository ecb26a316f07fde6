//! Playing a Crawl map from text commands.
//!
//! A [`Session`] owns a loaded map and the player in it. Each line of input
//! is parsed into a [`Command`] and answered with a string, so any front end
//! (a REPL, a test, a GUI) can drive it.

/// Session configuration.
pub mod config;
/// Error types for the play crate.
pub mod error;
/// Command parsing.
pub mod parser;
/// The play session.
pub mod session;
/// Close-name suggestions.
pub mod suggest;

/// Re-export of [`config::SessionConfig`].
pub use config::SessionConfig;
/// Re-exports of [`error::PlayError`] and [`error::PlayResult`].
pub use error::{PlayError, PlayResult};
/// Re-exports of parser types.
pub use parser::{Command, Direction, parse_command};
/// Re-export of [`session::Session`].
pub use session::Session;
