use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crawl_core::{CrawlError, RoomId, RoomMap};
use crawl_map::walk_order;

use crate::error::{CodecError, CodecResult};
use crate::repr::Repr;

/// Encode every room reachable from `root` as world-file text.
///
/// Rooms are numbered in walk order, so `root` is always room 0. The result
/// ends with a newline.
pub fn encode_world(map: &RoomMap, root: RoomId) -> CodecResult<String> {
    let order = walk_order(map, root);
    let index: HashMap<RoomId, usize> = order.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let rooms: Vec<_> = order.iter().filter_map(|&id| map.room(id)).collect();

    let mut lines = vec![rooms.len().to_string()];
    lines.extend(rooms.iter().map(|room| room.description().to_string()));

    for room in &rooms {
        lines.push(room.exits().len().to_string());
        for (name, target) in room.exits() {
            if name.contains(['\n', '\r']) {
                return Err(CodecError::Unencodable(name.clone()));
            }
            let target = index
                .get(target)
                .ok_or_else(|| CrawlError::NullTarget(name.clone()))?;
            lines.push(format!("{target} {name}"));
        }
    }

    for room in &rooms {
        lines.push(room.contents().len().to_string());
        lines.extend(room.contents().iter().map(Repr::repr));
    }

    tracing::debug!(rooms = rooms.len(), lines = lines.len(), "encoded world");
    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// Write the world reachable from `root` to `path`.
///
/// The text is encoded before the file is touched, so an unencodable map
/// leaves any existing file alone.
pub fn save_map(map: &RoomMap, root: RoomId, path: &Path) -> CodecResult<()> {
    let text = encode_world(map, root)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "saved world");
    Ok(())
}
