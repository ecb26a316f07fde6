use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load(path)?;
    let map = &loaded.map;

    println!("  {} '{}'", "Loaded".bold(), path.display());
    println!("  {} rooms, {} things", map.len(), map.thing_count());

    match loaded.player {
        Some((room, id)) => {
            let name = map
                .room(room)
                .and_then(|r| r.thing(id))
                .map(|t| t.short_description().to_string())
                .unwrap_or_default();
            println!("  player: {name} in room {room}");
        }
        None => println!("  {}", "no player".dimmed()),
    }

    Ok(())
}
