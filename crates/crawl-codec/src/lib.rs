//! The Crawl save format.
//!
//! Each thing has a one-line, `;`-separated representation starting with a
//! kind tag (see [`repr`]). A world file lists the rooms reachable from the
//! root in walk order, then every room's exits, then every room's contents
//! (see [`save`] and [`load`]). Loading is all or nothing: any malformed
//! line fails the whole load.

/// Codec error types.
pub mod error;
/// Reading world files.
pub mod load;
/// Per-thing text representations.
pub mod repr;
/// Writing world files.
pub mod save;

/// Re-exports of [`error::CodecError`] and [`error::CodecResult`].
pub use error::{CodecError, CodecResult};
/// Re-exports of loading entry points.
pub use load::{LoadedMap, decode_world, load_map};
/// Re-exports of representation helpers.
pub use repr::{Repr, decode_builder, decode_critter, decode_explorer, decode_thing, decode_treasure};
/// Re-exports of saving entry points.
pub use save::{encode_world, save_map};
