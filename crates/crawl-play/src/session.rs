//! Play session management.

use std::path::Path;

use crawl_codec::{LoadedMap, save_map};
use crawl_core::{CrawlError, Explorer, Room, RoomId, RoomMap, Thing, ThingId, ThingKind, fight};
use crawl_map::{Layout, render};

use crate::config::SessionConfig;
use crate::error::{PlayError, PlayResult};
use crate::parser::{Command, parse_command};
use crate::suggest::closest_name;

const HELP: &str = "\
Commands:
  north, south, east, west   move through a compass exit
  go <exit>                  move through any exit
  look                       describe the room and what you carry
  examine <name>             look closely at something
  take <name>                pick something up
  drop <name>                put something down
  fight <name>               attack a critter
  dig <exit> <back> <desc>   dig a new room (builders only)
  map                        draw the map
  inventory                  list what you carry
  save <file>                save the map
  quit                       leave the game";

/// A game in progress: a map, the player inside it, and where they stand.
pub struct Session {
    map: RoomMap,
    root: RoomId,
    player: ThingId,
    location: RoomId,
    config: SessionConfig,
    over: bool,
}

impl Session {
    /// Start a session on a loaded map with default configuration.
    pub fn new(loaded: LoadedMap) -> PlayResult<Self> {
        Self::with_config(loaded, SessionConfig::default())
    }

    /// Start a session on a loaded map.
    ///
    /// The player stays in the room they were saved in. A map without a
    /// player gets a fresh explorer in its root room, described by `config`.
    pub fn with_config(loaded: LoadedMap, config: SessionConfig) -> PlayResult<Self> {
        let LoadedMap {
            mut map,
            root,
            player,
        } = loaded;

        let (location, player) = match player {
            Some(found) => found,
            None => {
                let explorer: Thing = Explorer::with_health(
                    &config.fallback_name,
                    &config.fallback_description,
                    config.fallback_health,
                )
                .into();
                let id = explorer.id();
                map.room_mut(root)
                    .ok_or(PlayError::PlayerMissing)?
                    .enter(explorer);
                tracing::debug!(player = %id, "no player in map, created an explorer");
                (root, id)
            }
        };

        Ok(Self {
            map,
            root,
            player,
            location,
            config,
            over: false,
        })
    }

    /// The map being played.
    pub fn map(&self) -> &RoomMap {
        &self.map
    }

    /// The room saves start from.
    pub fn root(&self) -> RoomId {
        self.root
    }

    /// The room the player is in.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// The player.
    pub fn player(&self) -> Option<&Thing> {
        self.map.room(self.location)?.thing(self.player)
    }

    /// Whether the player has lost.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The opening line.
    pub fn intro(&self) -> String {
        let description = self.room().map(Room::description).unwrap_or_default();
        format!("You find yourself in {description}")
    }

    /// Process a player command and return a response.
    pub fn process(&mut self, input: &str) -> PlayResult<String> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> PlayResult<String> {
        tracing::debug!(?command, location = %self.location, "executing command");
        if self.over && !matches!(command, Command::Quit | Command::Help) {
            return Err(PlayError::GameOver);
        }

        match command {
            Command::Move { direction } => self.do_move(direction.exit_name()),
            Command::Go { exit } => self.do_move(&exit),
            Command::Look => self.do_look(),
            Command::Examine { name } => self.do_examine(&name),
            Command::Take { name } => self.do_take(&name),
            Command::Drop { name } => self.do_drop(&name),
            Command::Fight { name } => self.do_fight(&name),
            Command::Dig {
                exit,
                back,
                description,
            } => self.do_dig(&exit, &back, &description),
            Command::Save { path } => Ok(self.do_save(Path::new(&path))),
            Command::Map => Ok(self.do_map()),
            Command::Inventory => self.do_inventory(),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Goodbye!".to_string()),
            Command::Incomplete { question } => Err(PlayError::MissingArgument(question)),
            Command::Unknown { input } => Err(PlayError::UnknownCommand(input)),
        }
    }

    fn room(&self) -> PlayResult<&Room> {
        self.map.room(self.location).ok_or(PlayError::PlayerMissing)
    }

    fn room_mut(&mut self) -> PlayResult<&mut Room> {
        self.map
            .room_mut(self.location)
            .ok_or(PlayError::PlayerMissing)
    }

    fn player_thing(&self) -> PlayResult<&Thing> {
        self.room()?
            .thing(self.player)
            .ok_or(PlayError::PlayerMissing)
    }

    fn carried(&self) -> PlayResult<&[Thing]> {
        Ok(self
            .player_thing()?
            .inventory()
            .map(|inv| inv.contents())
            .unwrap_or_default())
    }

    fn do_move(&mut self, exit: &str) -> PlayResult<String> {
        let room = self.room()?;
        let Some(target) = room.exit(exit) else {
            return Ok("No door that way".to_string());
        };
        if !room.can_leave(self.player) {
            return Ok("Something prevents you from leaving".to_string());
        }

        let id = self.player;
        let player = self.room_mut()?.leave(id).ok_or(PlayError::PlayerMissing)?;
        let destination = self
            .map
            .room_mut(target)
            .ok_or(CrawlError::RoomNotFound(target))?;
        destination.enter(player);
        self.location = target;
        tracing::debug!(exit, to = %target, "player moved");

        let mut text = format!("You enter {}", self.room()?.description());
        if self.config.echo_room {
            text.push('\n');
            text.push_str(&self.do_look()?);
        }
        Ok(text)
    }

    fn do_look(&self) -> PlayResult<String> {
        let room = self.room()?;
        let mut lines = vec![format!("{} - you see:", room.description())];
        lines.extend(room.contents().iter().map(|t| format!(" {}", t.short_description())));
        lines.push(self.do_inventory()?);
        Ok(lines.join("\n"))
    }

    fn do_inventory(&self) -> PlayResult<String> {
        let carried = self.carried()?;
        let worth: f64 = self
            .player_thing()?
            .inventory()
            .map(|inv| inv.total_value())
            .unwrap_or_default();
        let mut lines = vec!["You are carrying:".to_string()];
        lines.extend(carried.iter().map(|t| format!(" {}", t.short_description())));
        lines.push(format!("worth {worth:.1} in total"));
        Ok(lines.join("\n"))
    }

    fn do_examine(&self, name: &str) -> PlayResult<String> {
        let carried = self.carried()?;
        let here = self.room()?.contents();
        if let Some(thing) = carried
            .iter()
            .chain(here)
            .find(|t| t.short_description() == name)
        {
            return Ok(thing.description());
        }

        let names = carried.iter().chain(here).map(Thing::short_description);
        Ok(match closest_name(name, names) {
            Some(close) => format!("Nothing found with that name. Did you mean \"{close}\"?"),
            None => "Nothing found with that name".to_string(),
        })
    }

    fn do_take(&mut self, name: &str) -> PlayResult<String> {
        let looter = self.player_thing()?.kind();
        let Some(thing) = self
            .room()?
            .contents()
            .iter()
            .find(|t| t.short_description() == name && !t.is_player())
        else {
            return Ok("Nothing found with that name".to_string());
        };

        if !thing.as_lootable().is_some_and(|l| l.can_loot(looter)) {
            return Ok(format!("You can't take {name}"));
        }
        let id = thing.id();
        let player = self.player;

        let room = self.room_mut()?;
        let Some(item) = room.leave(id) else {
            return Ok("Something prevents you from taking that".to_string());
        };
        room.thing_mut(player)
            .and_then(Thing::inventory_mut)
            .ok_or(PlayError::PlayerMissing)?
            .add(item);
        Ok(format!("You take {name}"))
    }

    fn do_drop(&mut self, name: &str) -> PlayResult<String> {
        let player = self.player;
        let room = self.room_mut()?;
        let dropped = room
            .thing_mut(player)
            .and_then(Thing::inventory_mut)
            .ok_or(PlayError::PlayerMissing)?
            .drop_named(name);
        Ok(match dropped {
            Some(item) => {
                room.enter(item);
                format!("You drop {name}")
            }
            None => "You aren't carrying that".to_string(),
        })
    }

    fn do_fight(&mut self, name: &str) -> PlayResult<String> {
        let target = self.room()?.contents().iter().find(|t| {
            t.kind() == ThingKind::Critter
                && t.short_description() == name
                && t.as_combatant().is_some_and(|c| c.is_alive())
        });
        let Some(target) = target.map(Thing::id) else {
            return Ok("Nothing here to fight by that name".to_string());
        };

        let player = self.player;
        let (attacker, defender) = self
            .room_mut()?
            .pair_mut(player, target)
            .ok_or(PlayError::PlayerMissing)?;
        let (Some(attacker), Some(defender)) =
            (attacker.as_combatant_mut(), defender.as_combatant_mut())
        else {
            return Err(PlayError::PlayerMissing);
        };

        if fight(attacker, defender) {
            tracing::debug!(critter = name, "player won a fight");
            Ok("You won".to_string())
        } else {
            tracing::debug!(critter = name, "player lost a fight");
            self.over = true;
            Ok("Game over".to_string())
        }
    }

    fn do_dig(&mut self, exit: &str, back: &str, description: &str) -> PlayResult<String> {
        if self.player_thing()?.kind() != ThingKind::Builder {
            return Err(PlayError::NotBuilder);
        }
        if self.room()?.exit(exit).is_some() {
            return Err(CrawlError::ExitExists(exit.to_string()).into());
        }

        let dug = self.map.add_room(description);
        self.map.make_exit_pair(self.location, dug, exit, back)?;
        tracing::debug!(room = %dug, exit, "dug a new room");
        Ok(format!(
            "You dig out {}",
            self.map.room(dug).map(Room::description).unwrap_or_default()
        ))
    }

    fn do_save(&self, path: &Path) -> String {
        match save_map(&self.map, self.root, path) {
            Ok(()) => "Saved".to_string(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                "Unable to save".to_string()
            }
        }
    }

    fn do_map(&self) -> String {
        let layout = Layout::infer(&self.map, self.root);
        render(&self.map, &layout, &self.config.render, Some(self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::{Builder, Critter, Treasure};

    /// hall (doris, box) -North-> kitchen (rat), hall -East-> den (bear).
    fn test_map(player: Thing) -> LoadedMap {
        let mut map = RoomMap::new();
        let hall = map.add_room("hall");
        let kitchen = map.add_room("kitchen");
        let den = map.add_room("den");
        map.make_exit_pair(hall, kitchen, "North", "South").unwrap();
        map.make_exit_pair(hall, den, "East", "West").unwrap();

        let player_id = player.id();
        let room = map.room_mut(hall).unwrap();
        room.enter(player);
        room.enter(Treasure::new("box", 14.5).into());
        map.room_mut(kitchen)
            .unwrap()
            .enter(Critter::new("rat", "a scruffy rat", 3.0, 2).into());
        map.room_mut(den)
            .unwrap()
            .enter(Critter::new("bear", "a huge bear", 100.0, 10).into());

        LoadedMap {
            map,
            root: hall,
            player: Some((hall, player_id)),
        }
    }

    fn explorer_session() -> Session {
        Session::new(test_map(Explorer::new("doris", "an explorer").into())).unwrap()
    }

    fn builder_session() -> Session {
        Session::new(test_map(Builder::new("robert", "a builder", RoomId(0)).into())).unwrap()
    }

    #[test]
    fn intro_names_starting_room() {
        assert_eq!(explorer_session().intro(), "You find yourself in hall");
    }

    #[test]
    fn moving_through_compass_exits() {
        let mut session = explorer_session();
        assert_eq!(session.process("west").unwrap(), "No door that way");
        assert_eq!(session.process("north").unwrap(), "You enter kitchen");
        assert_eq!(session.location(), RoomId(1));
        assert!(session.player().is_some());
        assert!(session.map().room(RoomId(0)).unwrap().thing(session.player).is_none());
    }

    #[test]
    fn living_critter_blocks_the_way_out() {
        let mut session = explorer_session();
        session.process("north").unwrap();
        assert_eq!(
            session.process("south").unwrap(),
            "Something prevents you from leaving"
        );
        assert_eq!(session.location(), RoomId(1));

        assert_eq!(session.process("fight rat").unwrap(), "You won");
        assert_eq!(session.player().unwrap().as_combatant().unwrap().health(), 8);
        assert_eq!(session.process("south").unwrap(), "You enter hall");
    }

    #[test]
    fn go_uses_exact_exit_names() {
        let mut session = explorer_session();
        assert_eq!(session.process("go north").unwrap(), "No door that way");
        assert_eq!(session.process("go North").unwrap(), "You enter kitchen");
        assert_eq!(session.process("go nowhere").unwrap(), "No door that way");
    }

    #[test]
    fn go_reaches_exits_shaped_like_compass_words() {
        let mut map = RoomMap::new();
        let hall = map.add_room("hall");
        let attic = map.add_room("attic");
        let cellar = map.add_room("cellar");
        map.add_exit(hall, "N", Some(attic)).unwrap();
        map.add_exit(hall, "north", Some(cellar)).unwrap();
        map.add_exit(attic, "back", Some(hall)).unwrap();
        let player: Thing = Explorer::new("doris", "an explorer").into();
        let player_id = player.id();
        map.room_mut(hall).unwrap().enter(player);
        let loaded = LoadedMap {
            map,
            root: hall,
            player: Some((hall, player_id)),
        };

        let mut session = Session::new(loaded).unwrap();
        assert_eq!(session.process("north").unwrap(), "No door that way");
        assert_eq!(session.process("go N").unwrap(), "You enter attic");
        assert_eq!(session.process("go back").unwrap(), "You enter hall");
        assert_eq!(session.process("go north").unwrap(), "You enter cellar");
        assert_eq!(session.location(), cellar);
    }

    #[test]
    fn look_lists_room_and_inventory() {
        let mut session = explorer_session();
        assert_eq!(
            session.process("look").unwrap(),
            "hall - you see:\n doris\n box\nYou are carrying:\nworth 0.0 in total"
        );
        session.process("take box").unwrap();
        assert_eq!(
            session.process("look").unwrap(),
            "hall - you see:\n doris\nYou are carrying:\n box\nworth 14.5 in total"
        );
    }

    #[test]
    fn take_and_drop() {
        let mut session = explorer_session();
        assert_eq!(session.process("take box").unwrap(), "You take box");
        assert_eq!(session.process("take box").unwrap(), "Nothing found with that name");
        assert_eq!(session.process("take doris").unwrap(), "Nothing found with that name");
        assert_eq!(session.process("drop box").unwrap(), "You drop box");
        assert_eq!(session.process("drop box").unwrap(), "You aren't carrying that");
        assert_eq!(session.map().room(RoomId(0)).unwrap().contents().len(), 2);
    }

    #[test]
    fn living_critters_cannot_be_taken() {
        let mut session = explorer_session();
        session.process("north").unwrap();
        assert_eq!(session.process("take rat").unwrap(), "You can't take rat");
        session.process("fight rat").unwrap();
        assert_eq!(session.process("take rat").unwrap(), "You take rat");
        assert!(session.process("inventory").unwrap().ends_with("worth 3.0 in total"));
    }

    #[test]
    fn examine_checks_inventory_then_room() {
        let mut session = explorer_session();
        assert_eq!(session.process("examine doris").unwrap(), "an explorer with 10 health");
        assert_eq!(session.process("examine box").unwrap(), "box");
        assert_eq!(
            session.process("examine boxx").unwrap(),
            "Nothing found with that name. Did you mean \"box\"?"
        );
        assert_eq!(
            session.process("examine dragon").unwrap(),
            "Nothing found with that name"
        );
    }

    #[test]
    fn losing_a_fight_ends_the_game() {
        let mut session = explorer_session();
        session.process("east").unwrap();
        assert_eq!(session.process("fight bear").unwrap(), "Game over");
        assert!(session.is_over());
        assert!(matches!(session.process("look"), Err(PlayError::GameOver)));
        assert!(matches!(session.process("west"), Err(PlayError::GameOver)));
        assert_eq!(session.process("quit").unwrap(), "Goodbye!");
    }

    #[test]
    fn fight_needs_a_living_critter() {
        let mut session = explorer_session();
        assert_eq!(
            session.process("fight box").unwrap(),
            "Nothing here to fight by that name"
        );
        session.process("north").unwrap();
        session.process("fight rat").unwrap();
        assert_eq!(
            session.process("fight rat").unwrap(),
            "Nothing here to fight by that name"
        );
    }

    #[test]
    fn builder_digs_new_rooms() {
        let mut session = builder_session();
        assert_eq!(
            session.process("dig Up Down a dusty attic").unwrap(),
            "You dig out a dusty attic"
        );
        assert_eq!(session.map().len(), 4);
        assert_eq!(session.process("go Up").unwrap(), "You enter a dusty attic");
        assert_eq!(session.process("go Down").unwrap(), "You enter hall");

        let err = session.process("dig Up Down another attic").unwrap_err();
        assert!(matches!(err, PlayError::Map(CrawlError::ExitExists(_))));
        assert_eq!(session.map().len(), 4);
    }

    #[test]
    fn explorers_cannot_dig() {
        let mut session = explorer_session();
        assert!(matches!(
            session.process("dig Up Down attic"),
            Err(PlayError::NotBuilder)
        ));
    }

    #[test]
    fn builder_walks_past_critters() {
        let mut session = builder_session();
        session.process("north").unwrap();
        assert_eq!(session.process("south").unwrap(), "You enter hall");
    }

    #[test]
    fn save_reports_outcome() {
        let mut session = explorer_session();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.map");
        let command = format!("save {}", path.display());
        assert_eq!(session.process(&command).unwrap(), "Saved");
        let loaded = crawl_codec::load_map(&path).unwrap();
        assert_eq!(loaded.map.len(), 3);
        assert!(loaded.player.is_some());

        let bad = dir.path().join("no").join("such").join("dir.map");
        let command = format!("save {}", bad.display());
        assert_eq!(session.process(&command).unwrap(), "Unable to save");
    }

    #[test]
    fn map_marks_player_room() {
        let mut session = explorer_session();
        assert!(session.process("map").unwrap().contains("@0"));
        session.process("north").unwrap();
        assert!(session.process("map").unwrap().contains("@1"));
    }

    #[test]
    fn missing_player_gets_fallback_explorer() {
        let mut loaded = test_map(Treasure::new("coin", 1.0).into());
        loaded.player = None;
        let config = SessionConfig::new().with_fallback_player("newbie", "a newcomer");
        let mut session = Session::with_config(loaded, config).unwrap();

        let player = session.player().unwrap();
        assert_eq!(player.short_description(), "newbie");
        assert_eq!(session.location(), RoomId(0));
        assert!(session.process("look").unwrap().contains(" newbie"));
    }

    #[test]
    fn echo_room_follows_moves_with_look() {
        let loaded = test_map(Explorer::new("doris", "an explorer").into());
        let mut session =
            Session::with_config(loaded, SessionConfig::new().with_echo_room(true)).unwrap();
        let text = session.process("north").unwrap();
        assert!(text.starts_with("You enter kitchen\nkitchen - you see:\n rat\n doris"));
    }

    #[test]
    fn bad_input_is_an_error() {
        let mut session = explorer_session();
        assert!(matches!(
            session.process("dance"),
            Err(PlayError::UnknownCommand(_))
        ));
        let err = session.process("take").unwrap_err();
        assert_eq!(err.to_string(), "Take what?");
    }
}
