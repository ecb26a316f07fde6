//! Core types for Crawl: things, rooms, and the room map.
//!
//! This crate holds the leaves of the system. Things (treasure, critters and
//! players) know how to fight and be looted; rooms know their exits and
//! contents; the [`RoomMap`] arena owns every room and hands out [`RoomId`]
//! handles so exits can form cycles without any ownership trouble.

/// Error types used throughout the crate.
pub mod error;
/// Player inventories.
pub mod inventory;
/// The arena that owns every room.
pub mod map;
/// Rooms, exits, and room contents.
pub mod room;
/// Things that live in rooms: treasure, critters, and players.
pub mod thing;

/// Re-export error types.
pub use error::{CrawlError, CrawlResult};
/// Re-export inventory type.
pub use inventory::Inventory;
/// Re-export room map types.
pub use map::{RoomId, RoomMap};
/// Re-export room type.
pub use room::Room;
/// Re-export thing types and capabilities.
pub use thing::{
    Builder, Combatant, Critter, Explorer, Lootable, Thing, ThingId, ThingKind, Treasure, fight,
};
