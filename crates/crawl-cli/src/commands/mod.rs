pub mod check;
pub mod demo;
pub mod map;
pub mod play;
pub mod rooms;

use std::path::Path;

use crawl_codec::{LoadedMap, load_map};

/// Load a world file, turning failures into a message naming the file.
fn load(path: &Path) -> Result<LoadedMap, String> {
    load_map(path).map_err(|e| format!("failed to load '{}': {e}", path.display()))
}
