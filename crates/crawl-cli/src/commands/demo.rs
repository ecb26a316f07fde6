use std::path::Path;

use crawl_codec::save_map;
use crawl_core::{Critter, Explorer, RoomId, RoomMap, Thing, Treasure};

fn link(map: &mut RoomMap, a: RoomId, b: RoomId, there: &str, back: &str) -> Result<(), String> {
    map.make_exit_pair(a, b, there, back)
        .map_err(|e| format!("failed to build demo world: {e}"))
}

fn place(map: &mut RoomMap, room: RoomId, thing: Thing) -> Result<(), String> {
    map.room_mut(room)
        .ok_or_else(|| format!("demo room {room} is missing"))?
        .enter(thing);
    Ok(())
}

/// Build the sample world: a hall with rooms off three sides and a cellar.
fn demo_world() -> Result<RoomMap, String> {
    let mut map = RoomMap::new();
    let hall = map.add_room("a draughty hall");
    let kitchen = map.add_room("a greasy kitchen");
    let study = map.add_room("a dusty study");
    let garden = map.add_room("an overgrown garden");
    let cellar = map.add_room("a damp cellar");

    link(&mut map, hall, kitchen, "North", "South")?;
    link(&mut map, hall, study, "East", "West")?;
    link(&mut map, hall, garden, "South", "North")?;
    link(&mut map, kitchen, cellar, "down the stairs", "up the stairs")?;

    place(&mut map, hall, Explorer::new("you", "a curious explorer").into())?;
    place(&mut map, kitchen, Critter::new("rat", "a scruffy rat", 1.0, 2).into())?;
    place(&mut map, study, Treasure::new("book", 12.5).into())?;
    place(&mut map, garden, Treasure::new("coin", 1.0).into())?;
    place(&mut map, cellar, Critter::new("spider", "a fat spider", 20.0, 6).into())?;
    place(&mut map, cellar, Treasure::new("crown", 100.0).into())?;

    Ok(map)
}

pub fn run(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let map = demo_world()?;
    save_map(&map, RoomId(0), path)
        .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;

    println!("  Wrote demo world to '{}'", path.display());
    println!("  {} rooms, {} things", map.len(), map.thing_count());

    Ok(())
}
