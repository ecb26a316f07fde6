use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crawl_core::{RoomId, RoomMap};

use crate::walker::MapWalker;

/// Exit names that carry a position, in the order they are consulted, with
/// the offset from the neighbor's coordinate.
const COMPASS: [(&str, i32, i32); 4] = [
    ("North", 0, -1),
    ("South", 0, 1),
    ("East", 1, 0),
    ("West", -1, 0),
];

/// An integer grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounding box of all placed rooms. All zero when nothing is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extrema {
    /// Smallest x.
    pub x_min: i32,
    /// Largest x.
    pub x_max: i32,
    /// Smallest y.
    pub y_min: i32,
    /// Largest y.
    pub y_max: i32,
}

impl Extrema {
    /// Number of columns spanned.
    pub fn width(&self) -> usize {
        (self.x_max - self.x_min).unsigned_abs() as usize + 1
    }

    /// Number of rows spanned.
    pub fn height(&self) -> usize {
        (self.y_max - self.y_min).unsigned_abs() as usize + 1
    }

    fn of<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> Self {
        let mut coords = coords.into_iter();
        let Some(first) = coords.next() else {
            return Self::default();
        };
        coords.fold(
            Self {
                x_min: first.x,
                x_max: first.x,
                y_min: first.y,
                y_max: first.y,
            },
            |e, c| Self {
                x_min: e.x_min.min(c.x),
                x_max: e.x_max.max(c.x),
                y_min: e.y_min.min(c.y),
                y_max: e.y_max.max(c.y),
            },
        )
    }
}

/// One room and where it was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed room.
    pub room: RoomId,
    /// Its inferred coordinate.
    pub coord: Coord,
}

/// Coordinates inferred for every room reachable from a root.
///
/// A room is placed relative to the first of its `North`, `South`, `East`,
/// `West` exits (in that order) whose target has already been placed. A room
/// with no such neighbor lands on the origin, so several rooms may share
/// `(0, 0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    placements: Vec<Placement>,
    #[serde(skip)]
    coords: HashMap<RoomId, Coord>,
    extrema: Extrema,
}

impl Layout {
    /// Lay out every room reachable from `root`.
    pub fn infer(map: &RoomMap, root: RoomId) -> Self {
        let mut layout = Self::default();
        let mut walker = MapWalker::new();
        walker.walk(map, root, |map, id| layout.place(map, id));
        tracing::debug!(
            rooms = layout.placements.len(),
            extrema = ?layout.extrema,
            "layout inferred"
        );
        layout
    }

    fn place(&mut self, map: &RoomMap, id: RoomId) {
        let coord = map
            .room(id)
            .and_then(|room| {
                COMPASS.iter().find_map(|&(name, dx, dy)| {
                    let neighbor = self.coords.get(&room.exit(name)?)?;
                    Some(Coord::new(neighbor.x + dx, neighbor.y + dy))
                })
            })
            .unwrap_or_default();

        tracing::trace!(room = %id, x = coord.x, y = coord.y, "placed room");
        self.coords.insert(id, coord);
        self.placements.push(Placement { room: id, coord });
        self.extrema = Extrema::of(self.coords.values());
    }

    /// The coordinate of a room, if it was reached.
    pub fn coord(&self, room: RoomId) -> Option<Coord> {
        self.coords.get(&room).copied()
    }

    /// Every placement, in walk order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Bounding box of all placements.
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// Number of placed rooms.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if no room was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
