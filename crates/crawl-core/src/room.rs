use std::collections::BTreeMap;

use crate::error::{CrawlError, CrawlResult};
use crate::map::RoomId;
use crate::thing::{PLACEHOLDER, Thing, ThingId};

/// A location in the map: a description, named exits, and the things inside.
///
/// Exit names are arbitrary, case-sensitive strings. They are kept sorted so
/// every walk over the same map sees them in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    description: String,
    exits: BTreeMap<String, RoomId>,
    contents: Vec<Thing>,
}

impl Room {
    /// Create an empty room. Line breaks in the description become `*`.
    pub fn new(description: &str) -> Self {
        Self {
            description: flatten(description),
            exits: BTreeMap::new(),
            contents: Vec::new(),
        }
    }

    /// The room's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description. Line breaks become `*`.
    pub fn set_description(&mut self, description: &str) {
        self.description = flatten(description);
    }

    /// All exits, keyed by name.
    pub fn exits(&self) -> &BTreeMap<String, RoomId> {
        &self.exits
    }

    /// Target of the named exit.
    pub fn exit(&self, name: &str) -> Option<RoomId> {
        self.exits.get(name).copied()
    }

    /// Add a named exit.
    ///
    /// The name is checked before the target, so a duplicate name is
    /// reported as [`CrawlError::ExitExists`] even when `target` is `None`.
    pub fn add_exit(&mut self, name: impl Into<String>, target: Option<RoomId>) -> CrawlResult<()> {
        let name = name.into();
        if self.exits.contains_key(&name) {
            return Err(CrawlError::ExitExists(name));
        }
        let Some(target) = target else {
            return Err(CrawlError::NullTarget(name));
        };
        self.exits.insert(name, target);
        Ok(())
    }

    /// Remove a named exit. Does nothing if there is no such exit.
    pub fn remove_exit(&mut self, name: &str) {
        self.exits.remove(name);
    }

    /// Everything in the room, in arrival order.
    pub fn contents(&self) -> &[Thing] {
        &self.contents
    }

    /// Put a thing into the room.
    pub fn enter(&mut self, thing: Thing) {
        self.contents.push(thing);
    }

    /// Whether the thing could leave right now: true unless it is a
    /// combatant and another combatant here wants to fight it.
    pub fn can_leave(&self, id: ThingId) -> bool {
        let Some(leaving) = self.thing(id).and_then(Thing::as_combatant) else {
            return true;
        };
        !self
            .contents
            .iter()
            .filter(|t| t.id() != id)
            .filter_map(Thing::as_combatant)
            .any(|other| other.wants_to_fight(leaving))
    }

    /// Remove a thing by identity.
    ///
    /// Returns `None` if the thing is not here, or if it is a combatant and
    /// another combatant in the room wants to fight it.
    pub fn leave(&mut self, id: ThingId) -> Option<Thing> {
        if !self.can_leave(id) {
            tracing::debug!(thing = %id, "leave refused: something wants to fight it");
            return None;
        }
        let pos = self.position(id)?;
        Some(self.contents.remove(pos))
    }

    /// Look up a thing by identity.
    pub fn thing(&self, id: ThingId) -> Option<&Thing> {
        self.contents.iter().find(|t| t.id() == id)
    }

    /// Mutable lookup by identity.
    pub fn thing_mut(&mut self, id: ThingId) -> Option<&mut Thing> {
        self.contents.iter_mut().find(|t| t.id() == id)
    }

    /// Find the first thing with the given short description.
    pub fn find_named(&self, name: &str) -> Option<&Thing> {
        self.contents.iter().find(|t| t.short_description() == name)
    }

    /// Borrow two different things at once, e.g. both sides of a fight.
    pub fn pair_mut(&mut self, a: ThingId, b: ThingId) -> Option<(&mut Thing, &mut Thing)> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (left, right) = self.contents.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.contents.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    fn position(&self, id: ThingId) -> Option<usize> {
        self.contents.iter().position(|t| t.id() == id)
    }
}

fn flatten(raw: &str) -> String {
    raw.replace(['\n', '\r'], &PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thing::{Combatant, Critter, Explorer, Treasure};

    #[test]
    fn description_line_breaks_are_flattened() {
        let mut room = Room::new("a\nlong\r\nhall");
        assert_eq!(room.description(), "a*long**hall");
        room.set_description("two\nlines");
        assert_eq!(room.description(), "two*lines");
    }

    #[test]
    fn add_exit_rejects_duplicate_name_even_with_new_target() {
        let mut room = Room::new("hall");
        room.add_exit("North", Some(RoomId(1))).unwrap();
        let err = room.add_exit("North", Some(RoomId(2))).unwrap_err();
        assert_eq!(err, CrawlError::ExitExists("North".to_string()));
        assert_eq!(room.exit("North"), Some(RoomId(1)));
    }

    #[test]
    fn add_exit_rejects_missing_target() {
        let mut room = Room::new("hall");
        let err = room.add_exit("Up", None).unwrap_err();
        assert_eq!(err, CrawlError::NullTarget("Up".to_string()));
        assert!(room.exits().is_empty());
    }

    #[test]
    fn duplicate_check_precedes_target_check() {
        let mut room = Room::new("hall");
        room.add_exit("North", Some(RoomId(1))).unwrap();
        let err = room.add_exit("North", None).unwrap_err();
        assert_eq!(err, CrawlError::ExitExists("North".to_string()));
    }

    #[test]
    fn exit_names_are_case_sensitive() {
        let mut room = Room::new("hall");
        room.add_exit("North", Some(RoomId(1))).unwrap();
        room.add_exit("north", Some(RoomId(2))).unwrap();
        assert_eq!(room.exits().len(), 2);
    }

    #[test]
    fn remove_missing_exit_is_a_no_op() {
        let mut room = Room::new("hall");
        room.add_exit("East", Some(RoomId(1))).unwrap();
        room.remove_exit("West");
        assert_eq!(room.exits().len(), 1);
        room.remove_exit("East");
        assert!(room.exits().is_empty());
    }

    #[test]
    fn leave_refused_when_critter_wants_to_fight() {
        let mut room = Room::new("den");
        let explorer: Thing = Explorer::new("doris", "an explorer").into();
        let explorer_id = explorer.id();
        room.enter(Critter::new("cat", "a cat", 1.0, 5).into());
        room.enter(explorer);

        assert!(!room.can_leave(explorer_id));
        assert!(room.leave(explorer_id).is_none());
        assert_eq!(room.contents().len(), 2);
    }

    #[test]
    fn leave_allowed_once_critter_has_fainted() {
        let mut room = Room::new("den");
        let mut critter = Critter::new("cat", "a cat", 1.0, 5);
        critter.set_alive(false);
        let explorer: Thing = Explorer::new("doris", "an explorer").into();
        let explorer_id = explorer.id();
        room.enter(critter.into());
        room.enter(explorer);

        assert!(room.leave(explorer_id).is_some());
        assert_eq!(room.contents().len(), 1);
    }

    #[test]
    fn inanimate_things_always_leave() {
        let mut room = Room::new("vault");
        let treasure: Thing = Treasure::new("box", 1.0).into();
        let id = treasure.id();
        room.enter(Critter::new("cat", "a cat", 1.0, 5).into());
        room.enter(treasure);

        assert!(room.leave(id).is_some());
    }

    #[test]
    fn leave_reports_absent_things() {
        let mut room = Room::new("empty");
        let stranger: Thing = Treasure::new("box", 1.0).into();
        assert!(room.leave(stranger.id()).is_none());
    }

    #[test]
    fn critter_can_leave_alongside_explorer() {
        let mut room = Room::new("den");
        let critter: Thing = Critter::new("cat", "a cat", 1.0, 5).into();
        let critter_id = critter.id();
        room.enter(critter);
        room.enter(Explorer::new("doris", "an explorer").into());

        assert!(room.leave(critter_id).is_some());
    }

    #[test]
    fn pair_mut_borrows_both_sides() {
        let mut room = Room::new("den");
        let a: Thing = Critter::new("cat", "a cat", 1.0, 5).into();
        let b: Thing = Explorer::new("doris", "an explorer").into();
        let (ida, idb) = (a.id(), b.id());
        room.enter(a);
        room.enter(b);

        let (x, y) = room.pair_mut(idb, ida).unwrap();
        assert_eq!(x.id(), idb);
        assert_eq!(y.id(), ida);
        assert!(room.pair_mut(ida, ida).is_none());
    }
}
