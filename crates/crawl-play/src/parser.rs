//! Command parsing for player input.

/// One of the four exits that have buttons of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The exit name this direction follows.
    pub fn exit_name(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move through one of the compass exits.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Move through an exit by its exact name, compass names included.
    Go {
        /// The exit name.
        exit: String,
    },
    /// Describe the room and what the player carries.
    Look,
    /// Show the long description of something carried or nearby.
    Examine {
        /// Short description of the thing.
        name: String,
    },
    /// Pick something up.
    Take {
        /// Short description of the thing.
        name: String,
    },
    /// Put something down.
    Drop {
        /// Short description of the thing.
        name: String,
    },
    /// Attack a critter.
    Fight {
        /// Short description of the critter.
        name: String,
    },
    /// Dig a new room off the current one (builders only).
    Dig {
        /// Exit from the current room to the new one.
        exit: String,
        /// Exit from the new room back.
        back: String,
        /// Description of the new room.
        description: String,
    },
    /// Save the map.
    Save {
        /// Destination file.
        path: String,
    },
    /// Draw the map.
    Map,
    /// List carried things.
    Inventory,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// A command missing its argument, with the question to ask.
    Incomplete {
        /// What to ask the player.
        question: &'static str,
    },
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const GO_VERBS: &[&str] = &["go", "move", "walk"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "ex", "x", "inspect"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab"];
const DROP_VERBS: &[&str] = &["drop", "discard"];
const FIGHT_VERBS: &[&str] = &["fight", "attack", "hit"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a player input string into a command.
///
/// Names after the verb are kept verbatim (apart from surrounding
/// whitespace), since things and exits are matched exactly.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_lowercase(), rest.trim()),
        None => (input.to_lowercase(), ""),
    };
    let verb = verb.as_str();

    if rest.is_empty() {
        if let Some(direction) = Direction::parse(verb) {
            return Command::Move { direction };
        }
    }

    if GO_VERBS.contains(&verb) {
        return parse_go(rest);
    }
    if LOOK_VERBS.contains(&verb) {
        return if rest.is_empty() {
            Command::Look
        } else {
            Command::Examine {
                name: strip_at(rest).to_string(),
            }
        };
    }
    if EXAMINE_VERBS.contains(&verb) {
        return named(rest, "Examine what?", |name| Command::Examine { name });
    }
    if TAKE_VERBS.contains(&verb) {
        return named(rest, "Take what?", |name| Command::Take { name });
    }
    if DROP_VERBS.contains(&verb) {
        return named(rest, "Item to drop?", |name| Command::Drop { name });
    }
    if FIGHT_VERBS.contains(&verb) {
        return named(rest, "Fight what?", |name| Command::Fight { name });
    }
    if verb == "dig" {
        return parse_dig(rest);
    }
    if verb == "save" {
        return named(rest, "Save filename?", |path| Command::Save { path });
    }
    if verb == "map" {
        return Command::Map;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn named(rest: &str, question: &'static str, build: impl FnOnce(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Incomplete { question }
    } else {
        build(rest.to_string())
    }
}

fn strip_at(rest: &str) -> &str {
    match rest.split_once(char::is_whitespace) {
        Some((first, tail)) if first.eq_ignore_ascii_case("at") => tail.trim(),
        _ => rest,
    }
}

fn parse_go(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Incomplete {
            question: "Go where?",
        };
    }
    Command::Go {
        exit: rest.to_string(),
    }
}

fn parse_dig(rest: &str) -> Command {
    let mut parts = rest.splitn(3, char::is_whitespace);
    let exit = parts.next().unwrap_or_default();
    let back = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or_default().trim();
    if exit.is_empty() || back.is_empty() || description.is_empty() {
        return Command::Incomplete {
            question: "Dig how? (dig <exit> <way back> <description>)",
        };
    }
    Command::Dig {
        exit: exit.to_string(),
        back: back.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_direction() {
        assert_eq!(
            parse_command("north"),
            Command::Move {
                direction: Direction::North
            }
        );
        assert_eq!(
            parse_command("W"),
            Command::Move {
                direction: Direction::West
            }
        );
    }

    #[test]
    fn parse_go() {
        assert_eq!(
            parse_command("go east"),
            Command::Go {
                exit: "east".to_string()
            }
        );
        assert_eq!(
            parse_command("go N"),
            Command::Go {
                exit: "N".to_string()
            }
        );
        assert_eq!(
            parse_command("go down the stairs"),
            Command::Go {
                exit: "down the stairs".to_string()
            }
        );
        assert_eq!(
            parse_command("go"),
            Command::Incomplete {
                question: "Go where?"
            }
        );
    }

    #[test]
    fn parse_look_and_examine() {
        assert_eq!(parse_command(""), Command::Look);
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(
            parse_command("look at the box"),
            Command::Examine {
                name: "the box".to_string()
            }
        );
        assert_eq!(
            parse_command("x box"),
            Command::Examine {
                name: "box".to_string()
            }
        );
    }

    #[test]
    fn names_keep_case_and_inner_spacing() {
        assert_eq!(
            parse_command("TAKE Gold  Bar "),
            Command::Take {
                name: "Gold  Bar".to_string()
            }
        );
    }

    #[test]
    fn parse_missing_arguments() {
        assert_eq!(
            parse_command("take"),
            Command::Incomplete {
                question: "Take what?"
            }
        );
        assert_eq!(
            parse_command("fight"),
            Command::Incomplete {
                question: "Fight what?"
            }
        );
        assert!(matches!(parse_command("dig Up"), Command::Incomplete { .. }));
    }

    #[test]
    fn parse_dig() {
        assert_eq!(
            parse_command("dig Up Down a dusty attic"),
            Command::Dig {
                exit: "Up".to_string(),
                back: "Down".to_string(),
                description: "a dusty attic".to_string(),
            }
        );
    }

    #[test]
    fn parse_misc() {
        assert_eq!(
            parse_command("save /tmp/world.map"),
            Command::Save {
                path: "/tmp/world.map".to_string()
            }
        );
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("map"), Command::Map);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
    }

    #[test]
    fn direction_words_with_arguments_are_not_moves() {
        assert!(matches!(parse_command("n box"), Command::Unknown { .. }));
    }
}
