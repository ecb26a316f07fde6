use std::collections::HashMap;

use crawl_core::{RoomId, RoomMap};

use crate::config::RenderConfig;
use crate::layout::Layout;

/// Draw a layout as an ASCII grid, North up and East to the right.
///
/// Each room is labelled with its index. `-` links a room to its `East`
/// exit and `|` to its `South` exit. Rooms sharing a coordinate are drawn
/// as the first one's label followed by `+`. The `highlight` room, if any,
/// is prefixed with the configured marker.
pub fn render(
    map: &RoomMap,
    layout: &Layout,
    config: &RenderConfig,
    highlight: Option<RoomId>,
) -> String {
    if layout.is_empty() {
        return String::new();
    }

    let extrema = layout.extrema();
    let mut cells: HashMap<(usize, usize), Vec<RoomId>> = HashMap::new();
    for placement in layout.placements() {
        let row = (extrema.y_max - placement.coord.y).unsigned_abs() as usize;
        let col = (extrema.x_max - placement.coord.x).unsigned_abs() as usize;
        cells.entry((row, col)).or_default().push(placement.room);
    }

    let cell = Cell {
        map,
        width: config.cell_width.max(2),
        marker: config.marker,
        highlight,
    };
    let mut lines = Vec::new();
    for row in 0..extrema.height() {
        for line in 0..config.cell_height.max(1) {
            let text: String = (0..extrema.width())
                .map(|col| {
                    let rooms = cells.get(&(row, col)).map(Vec::as_slice).unwrap_or(&[]);
                    cell.line(rooms, line)
                })
                .collect();
            lines.push(text.trim_end().to_string());
        }
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

struct Cell<'a> {
    map: &'a RoomMap,
    width: usize,
    marker: char,
    highlight: Option<RoomId>,
}

impl Cell<'_> {
    fn line(&self, rooms: &[RoomId], line: usize) -> String {
        let inner = self.width - 1;
        if line == 0 {
            let link = if self.has_exit(rooms, "East") { '-' } else { ' ' };
            format!("{:^inner$}{link}", self.label(rooms))
        } else {
            let link = if self.has_exit(rooms, "South") { "|" } else { "" };
            format!("{link:^inner$} ")
        }
    }

    fn label(&self, rooms: &[RoomId]) -> String {
        let Some(first) = rooms.first() else {
            return String::new();
        };
        let mut label = String::new();
        if self.highlight.is_some_and(|h| rooms.contains(&h)) {
            label.push(self.marker);
        }
        label.push_str(&first.0.to_string());
        if rooms.len() > 1 {
            label.push('+');
        }
        label
    }

    fn has_exit(&self, rooms: &[RoomId], name: &str) -> bool {
        rooms
            .iter()
            .filter_map(|&id| self.map.room(id))
            .any(|room| room.exit(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> RenderConfig {
        RenderConfig::default().with_cell_width(4).with_cell_height(2)
    }

    #[test]
    fn north_is_drawn_above() {
        let mut map = RoomMap::new();
        let root = map.add_room("root");
        let up = map.add_room("up");
        map.make_exit_pair(root, up, "North", "South").unwrap();
        let layout = Layout::infer(&map, root);

        assert_eq!(render(&map, &layout, &narrow(), None), " 1\n |\n 0");
        assert_eq!(render(&map, &layout, &narrow(), Some(root)), " 1\n |\n@0");
    }

    #[test]
    fn east_is_drawn_to_the_right() {
        let mut map = RoomMap::new();
        let root = map.add_room("root");
        let east = map.add_room("east");
        map.make_exit_pair(root, east, "East", "West").unwrap();
        let layout = Layout::infer(&map, root);
        let config = narrow().with_cell_height(1);

        assert_eq!(render(&map, &layout, &config, None), " 0 - 1");
    }

    #[test]
    fn shared_coordinates_are_flagged() {
        let mut map = RoomMap::new();
        let root = map.add_room("root");
        let hidden = map.add_room("hidden");
        map.add_exit(root, "portal", Some(hidden)).unwrap();
        let layout = Layout::infer(&map, root);

        assert_eq!(render(&map, &layout, &narrow(), Some(hidden)), "@0+");
    }

    #[test]
    fn empty_layout_renders_nothing() {
        let map = RoomMap::new();
        let layout = Layout::infer(&map, RoomId(0));
        assert_eq!(render(&map, &layout, &RenderConfig::default(), None), "");
    }
}
