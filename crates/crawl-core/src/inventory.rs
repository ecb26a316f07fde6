//! Things carried by a player.

use crate::thing::{Thing, ThingId};

/// An ordered collection of carried things.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    things: Vec<Thing>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self { things: Vec::new() }
    }

    /// Put a thing into the inventory.
    pub fn add(&mut self, thing: Thing) {
        self.things.push(thing);
    }

    /// Remove a thing by identity. Returns `None` if it isn't carried.
    pub fn drop(&mut self, id: ThingId) -> Option<Thing> {
        let pos = self.things.iter().position(|t| t.id() == id)?;
        Some(self.things.remove(pos))
    }

    /// Remove the first thing whose short description is `name`.
    pub fn drop_named(&mut self, name: &str) -> Option<Thing> {
        let pos = self
            .things
            .iter()
            .position(|t| t.short_description() == name)?;
        Some(self.things.remove(pos))
    }

    /// Find a carried thing by short description.
    pub fn find_named(&self, name: &str) -> Option<&Thing> {
        self.things.iter().find(|t| t.short_description() == name)
    }

    /// Check whether a thing is carried.
    pub fn contains(&self, id: ThingId) -> bool {
        self.things.iter().any(|t| t.id() == id)
    }

    /// Everything carried, in pickup order.
    pub fn contents(&self) -> &[Thing] {
        &self.things
    }

    /// Total worth of carried lootables.
    pub fn total_value(&self) -> f64 {
        self.things
            .iter()
            .filter_map(|t| t.as_lootable())
            .map(|l| l.value())
            .fold(0.0, |acc, v| acc + v)
    }

    /// Number of carried things.
    pub fn len(&self) -> usize {
        self.things.len()
    }

    /// Returns true if nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }
}
