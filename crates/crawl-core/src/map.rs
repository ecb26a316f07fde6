use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CrawlError, CrawlResult};
use crate::room::Room;
use crate::thing::ThingId;

/// Handle to a room inside a [`RoomMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every room. Exits refer to rooms by [`RoomId`], so cycles and
/// self-loops are just numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomMap {
    rooms: Vec<Room>,
}

impl RoomMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Add a new room and return its handle.
    pub fn add_room(&mut self, description: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(description));
        id
    }

    /// Get a room by handle.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable room by handle.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Check whether a handle belongs to this map.
    pub fn contains(&self, id: RoomId) -> bool {
        id.0 < self.rooms.len()
    }

    /// Iterate all rooms with their handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the map has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Add an exit from `from`. A target outside this map counts as absent.
    pub fn add_exit(
        &mut self,
        from: RoomId,
        name: impl Into<String>,
        target: Option<RoomId>,
    ) -> CrawlResult<()> {
        let target = target.filter(|t| self.contains(*t));
        self.room_mut(from)
            .ok_or(CrawlError::RoomNotFound(from))?
            .add_exit(name, target)
    }

    /// Remove an exit from `from`. A missing exit is not an error.
    pub fn remove_exit(&mut self, from: RoomId, name: &str) -> CrawlResult<()> {
        self.room_mut(from)
            .ok_or(CrawlError::RoomNotFound(from))?
            .remove_exit(name);
        Ok(())
    }

    /// Connect two rooms both ways. Nothing changes unless both exits can be
    /// added.
    pub fn make_exit_pair(
        &mut self,
        a: RoomId,
        b: RoomId,
        a_to_b: &str,
        b_to_a: &str,
    ) -> CrawlResult<()> {
        let room_a = self.room(a).ok_or(CrawlError::RoomNotFound(a))?;
        let room_b = self.room(b).ok_or(CrawlError::RoomNotFound(b))?;
        if room_a.exit(a_to_b).is_some() {
            return Err(CrawlError::ExitExists(a_to_b.to_string()));
        }
        if room_b.exit(b_to_a).is_some() || (a == b && a_to_b == b_to_a) {
            return Err(CrawlError::ExitExists(b_to_a.to_string()));
        }
        self.add_exit(a, a_to_b, Some(b))?;
        self.add_exit(b, b_to_a, Some(a))
    }

    /// The room currently holding a thing.
    pub fn find_thing(&self, id: ThingId) -> Option<RoomId> {
        self.iter()
            .find(|(_, room)| room.thing(id).is_some())
            .map(|(rid, _)| rid)
    }

    /// The first player found in any room, with the room holding it.
    pub fn find_player(&self) -> Option<(RoomId, ThingId)> {
        self.iter().find_map(|(rid, room)| {
            room.contents()
                .iter()
                .find(|t| t.is_player())
                .map(|t| (rid, t.id()))
        })
    }

    /// Total number of things across all rooms.
    pub fn thing_count(&self) -> usize {
        self.rooms.iter().map(|r| r.contents().len()).sum()
    }
}
