use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::Inventory;
use crate::map::RoomId;

/// Character substituted for anything that would break the save format.
pub const PLACEHOLDER: char = '*';

/// Replace newlines, carriage returns and the field separator with
/// [`PLACEHOLDER`].
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\n' | '\r' | ';' => PLACEHOLDER,
            other => other,
        })
        .collect()
}

/// Stable identity of a single thing, independent of where it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThingId(pub Uuid);

impl ThingId {
    /// Generate a new random thing ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The closed set of thing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingKind {
    /// Lootable, never fights.
    Treasure,
    /// Lootable once fainted, fights explorers.
    Critter,
    /// A player who explores and fights.
    Explorer,
    /// A player who edits the map and cannot be hurt.
    Builder,
}

impl ThingKind {
    /// The one-character tag that starts this kind's encoded form.
    pub fn tag(self) -> char {
        match self {
            Self::Treasure => '$',
            Self::Critter => 'C',
            Self::Explorer => 'E',
            Self::Builder => 'B',
        }
    }

    /// Look up a kind from its tag character.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '$' => Some(Self::Treasure),
            'C' => Some(Self::Critter),
            'E' => Some(Self::Explorer),
            'B' => Some(Self::Builder),
            _ => None,
        }
    }

    /// Returns true for player-controlled kinds.
    pub fn is_player(self) -> bool {
        matches!(self, Self::Explorer | Self::Builder)
    }

    /// Returns true for kinds that implement [`Combatant`].
    pub fn is_combatant(self) -> bool {
        !matches!(self, Self::Treasure)
    }
}

impl fmt::Display for ThingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Treasure => write!(f, "treasure"),
            Self::Critter => write!(f, "critter"),
            Self::Explorer => write!(f, "explorer"),
            Self::Builder => write!(f, "builder"),
        }
    }
}

/// Anything a player can pick up and carry off.
pub trait Lootable {
    /// Worth of this thing to whoever loots it.
    fn value(&self) -> f64;

    /// Whether a thing of kind `looter` may take this.
    fn can_loot(&self, looter: ThingKind) -> bool;
}

/// Anything that can fight.
pub trait Combatant {
    /// The kind of this combatant.
    fn kind(&self) -> ThingKind;

    /// Current health, never negative.
    fn health(&self) -> i32;

    /// Whether health is above zero.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Damage dealt by one strike.
    fn damage(&self) -> i32;

    /// Apply one incoming strike. Health is floored at zero.
    fn take_damage(&mut self, amount: i32);

    /// Revive to full health, or knock down to zero.
    fn set_alive(&mut self, alive: bool);

    /// Whether this combatant starts a fight with `other` on sight.
    fn wants_to_fight(&self, other: &dyn Combatant) -> bool;
}

/// Fight until one side falls. `attacker` strikes first, then the two
/// alternate. Returns whether the attacker is still standing.
///
/// A side that is already down never strikes. If a full exchange leaves both
/// sides untouched (two builders, say) the fight stops as a stalemate.
pub fn fight<A, D>(attacker: &mut A, defender: &mut D) -> bool
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    while attacker.is_alive() && defender.is_alive() {
        let before = (attacker.health(), defender.health());

        defender.take_damage(attacker.damage());
        if defender.is_alive() {
            attacker.take_damage(defender.damage());
        }

        if (attacker.health(), defender.health()) == before {
            tracing::debug!(
                attacker = %attacker.kind(),
                defender = %defender.kind(),
                "fight ended in a stalemate"
            );
            break;
        }
    }
    attacker.is_alive()
}

fn floored(health: i32, amount: i32) -> i32 {
    health.saturating_sub(amount.max(0)).max(0)
}

/// A lootable object which doesn't fight.
#[derive(Debug, Clone, PartialEq)]
pub struct Treasure {
    id: ThingId,
    name: String,
    value: f64,
}

impl Treasure {
    /// Create a treasure. The short description doubles as the long one.
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            id: ThingId::new(),
            name: sanitize(name),
            value,
        }
    }

    /// Identity of this treasure.
    pub fn id(&self) -> ThingId {
        self.id
    }

    /// Short description (also the long description).
    pub fn short_description(&self) -> &str {
        &self.name
    }
}

impl Lootable for Treasure {
    fn value(&self) -> f64 {
        self.value
    }

    fn can_loot(&self, looter: ThingKind) -> bool {
        looter.is_player()
    }
}

/// A non-player mob that can be looted once it has fainted.
#[derive(Debug, Clone, PartialEq)]
pub struct Critter {
    id: ThingId,
    short: String,
    long: String,
    value: f64,
    health: i32,
}

impl Critter {
    /// Health restored by `set_alive(true)`.
    pub const MAX_HEALTH: i32 = 10;
    /// Damage dealt per strike.
    pub const DAMAGE: i32 = 2;

    /// Create a critter. Negative starting health is raised to zero.
    pub fn new(short: &str, long: &str, value: f64, health: i32) -> Self {
        Self {
            id: ThingId::new(),
            short: sanitize(short),
            long: sanitize(long),
            value,
            health: health.max(0),
        }
    }

    /// Identity of this critter.
    pub fn id(&self) -> ThingId {
        self.id
    }

    /// Short description.
    pub fn short_description(&self) -> &str {
        &self.short
    }

    /// Long description, without liveness decoration.
    pub fn long_description(&self) -> &str {
        &self.long
    }

    /// The worth of this critter regardless of its health.
    pub fn worth(&self) -> f64 {
        self.value
    }
}

impl Lootable for Critter {
    fn value(&self) -> f64 {
        if self.health > 0 { 0.0 } else { self.value }
    }

    fn can_loot(&self, looter: ThingKind) -> bool {
        looter.is_player() && self.health == 0
    }
}

impl Combatant for Critter {
    fn kind(&self) -> ThingKind {
        ThingKind::Critter
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn damage(&self) -> i32 {
        Self::DAMAGE
    }

    fn take_damage(&mut self, amount: i32) {
        self.health = floored(self.health, amount);
    }

    fn set_alive(&mut self, alive: bool) {
        self.health = if alive { Self::MAX_HEALTH } else { 0 };
    }

    fn wants_to_fight(&self, other: &dyn Combatant) -> bool {
        self.is_alive() && other.kind() == ThingKind::Explorer
    }
}

/// A player who doesn't modify the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    id: ThingId,
    short: String,
    long: String,
    health: i32,
    inventory: Inventory,
}

impl Explorer {
    /// Starting and maximum health.
    pub const MAX_HEALTH: i32 = 10;
    /// Damage dealt per strike.
    pub const DAMAGE: i32 = 1;

    /// Create an explorer at full health.
    pub fn new(short: &str, long: &str) -> Self {
        Self::with_health(short, long, Self::MAX_HEALTH)
    }

    /// Create an explorer with health clamped into `0..=MAX_HEALTH`.
    pub fn with_health(short: &str, long: &str, health: i32) -> Self {
        Self {
            id: ThingId::new(),
            short: sanitize(short),
            long: sanitize(long),
            health: health.clamp(0, Self::MAX_HEALTH),
            inventory: Inventory::new(),
        }
    }

    /// Copy name, description and health (but not inventory) from another
    /// player. Returns `None` if `player` is not a player.
    pub fn from_player(player: &Thing) -> Option<Self> {
        let health = player.as_combatant()?.health();
        if !player.is_player() {
            return None;
        }
        Some(Self::with_health(
            player.short_description(),
            player.long_description(),
            health,
        ))
    }

    /// Identity of this explorer.
    pub fn id(&self) -> ThingId {
        self.id
    }

    /// Short description.
    pub fn short_description(&self) -> &str {
        &self.short
    }

    /// Long description, without health decoration.
    pub fn long_description(&self) -> &str {
        &self.long
    }

    /// Things carried by this explorer.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to carried things.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

impl Combatant for Explorer {
    fn kind(&self) -> ThingKind {
        ThingKind::Explorer
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn damage(&self) -> i32 {
        Self::DAMAGE
    }

    fn take_damage(&mut self, amount: i32) {
        self.health = floored(self.health, amount);
    }

    fn set_alive(&mut self, alive: bool) {
        self.health = if alive { Self::MAX_HEALTH } else { 0 };
    }

    fn wants_to_fight(&self, _other: &dyn Combatant) -> bool {
        false
    }
}

/// A player who digs new rooms and cannot be hurt. Bound to the root room of
/// the map it was created for.
#[derive(Debug, Clone, PartialEq)]
pub struct Builder {
    id: ThingId,
    short: String,
    long: String,
    health: i32,
    root: RoomId,
    inventory: Inventory,
}

impl Builder {
    /// Health restored by `set_alive(true)`.
    pub const MAX_HEALTH: i32 = 10;
    /// Damage dealt per strike.
    pub const DAMAGE: i32 = 1000;

    /// Create a builder bound to `root`.
    pub fn new(short: &str, long: &str, root: RoomId) -> Self {
        Self {
            id: ThingId::new(),
            short: sanitize(short),
            long: sanitize(long),
            health: Self::MAX_HEALTH,
            root,
            inventory: Inventory::new(),
        }
    }

    /// Identity of this builder.
    pub fn id(&self) -> ThingId {
        self.id
    }

    /// Short description.
    pub fn short_description(&self) -> &str {
        &self.short
    }

    /// Long description.
    pub fn long_description(&self) -> &str {
        &self.long
    }

    /// The root room this builder belongs to.
    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Things carried by this builder.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to carried things.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

impl Combatant for Builder {
    fn kind(&self) -> ThingKind {
        ThingKind::Builder
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn damage(&self) -> i32 {
        Self::DAMAGE
    }

    fn take_damage(&mut self, _amount: i32) {}

    fn set_alive(&mut self, alive: bool) {
        self.health = if alive { Self::MAX_HEALTH } else { 0 };
    }

    fn wants_to_fight(&self, _other: &dyn Combatant) -> bool {
        false
    }
}

/// Anything that can sit in a room or an inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    /// See [`Treasure`].
    Treasure(Treasure),
    /// See [`Critter`].
    Critter(Critter),
    /// See [`Explorer`].
    Explorer(Explorer),
    /// See [`Builder`].
    Builder(Builder),
}

impl Thing {
    /// Identity of this thing.
    pub fn id(&self) -> ThingId {
        match self {
            Self::Treasure(t) => t.id(),
            Self::Critter(c) => c.id(),
            Self::Explorer(e) => e.id(),
            Self::Builder(b) => b.id(),
        }
    }

    /// The kind of this thing.
    pub fn kind(&self) -> ThingKind {
        match self {
            Self::Treasure(_) => ThingKind::Treasure,
            Self::Critter(_) => ThingKind::Critter,
            Self::Explorer(_) => ThingKind::Explorer,
            Self::Builder(_) => ThingKind::Builder,
        }
    }

    /// Returns true for explorers and builders.
    pub fn is_player(&self) -> bool {
        self.kind().is_player()
    }

    /// The name used to pick this thing out in commands and text.
    pub fn short_description(&self) -> &str {
        match self {
            Self::Treasure(t) => t.short_description(),
            Self::Critter(c) => c.short_description(),
            Self::Explorer(e) => e.short_description(),
            Self::Builder(b) => b.short_description(),
        }
    }

    /// The sanitized long description, as stored in the save format.
    pub fn long_description(&self) -> &str {
        match self {
            Self::Treasure(t) => t.short_description(),
            Self::Critter(c) => c.long_description(),
            Self::Explorer(e) => e.long_description(),
            Self::Builder(b) => b.long_description(),
        }
    }

    /// Display text. Critters and explorers note when they have fainted;
    /// living explorers report their health.
    pub fn description(&self) -> String {
        match self {
            Self::Critter(c) if !c.is_alive() => format!("{}(fainted)", c.long_description()),
            Self::Explorer(e) if e.is_alive() => {
                format!("{} with {} health", e.long_description(), e.health())
            }
            Self::Explorer(e) => format!("{}(fainted)", e.long_description()),
            other => other.long_description().to_string(),
        }
    }

    /// View as a combatant, if this kind fights.
    pub fn as_combatant(&self) -> Option<&dyn Combatant> {
        match self {
            Self::Treasure(_) => None,
            Self::Critter(c) => Some(c),
            Self::Explorer(e) => Some(e),
            Self::Builder(b) => Some(b),
        }
    }

    /// Mutable view as a combatant, if this kind fights.
    pub fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        match self {
            Self::Treasure(_) => None,
            Self::Critter(c) => Some(c),
            Self::Explorer(e) => Some(e),
            Self::Builder(b) => Some(b),
        }
    }

    /// View as lootable, if this kind can be carried off.
    pub fn as_lootable(&self) -> Option<&dyn Lootable> {
        match self {
            Self::Treasure(t) => Some(t),
            Self::Critter(c) => Some(c),
            Self::Explorer(_) | Self::Builder(_) => None,
        }
    }

    /// A player's inventory.
    pub fn inventory(&self) -> Option<&Inventory> {
        match self {
            Self::Explorer(e) => Some(e.inventory()),
            Self::Builder(b) => Some(b.inventory()),
            _ => None,
        }
    }

    /// Mutable access to a player's inventory.
    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match self {
            Self::Explorer(e) => Some(e.inventory_mut()),
            Self::Builder(b) => Some(b.inventory_mut()),
            _ => None,
        }
    }
}

impl From<Treasure> for Thing {
    fn from(t: Treasure) -> Self {
        Self::Treasure(t)
    }
}

impl From<Critter> for Thing {
    fn from(c: Critter) -> Self {
        Self::Critter(c)
    }
}

impl From<Explorer> for Thing {
    fn from(e: Explorer) -> Self {
        Self::Explorer(e)
    }
}

impl From<Builder> for Thing {
    fn from(b: Builder) -> Self {
        Self::Builder(b)
    }
}
