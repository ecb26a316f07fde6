use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use crawl_map::Layout;

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load(path)?;
    let map = &loaded.map;
    let layout = Layout::infer(map, loaded.root);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Coord", "Description", "Exits", "Contents"]);

    for (id, room) in map.iter() {
        let coord = layout
            .coord(id)
            .map(|c| format!("({}, {})", c.x, c.y))
            .unwrap_or_else(|| "-".to_string());
        let exits = room
            .exits()
            .iter()
            .map(|(name, target)| format!("{name} -> {target}"))
            .collect::<Vec<_>>()
            .join("\n");
        let contents = room
            .contents()
            .iter()
            .map(|t| format!("{} ({})", t.short_description(), t.kind()))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![id.to_string(), coord, room.description().to_string(), exits, contents]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms, {} placed on the grid", map.len(), layout.len());

    Ok(())
}
