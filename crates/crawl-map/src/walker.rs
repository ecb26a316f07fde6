use std::collections::{HashSet, VecDeque};

use crawl_core::{RoomId, RoomMap};

/// Breadth-first walker over a [`RoomMap`].
///
/// Every room reachable from the root is visited exactly once, however many
/// paths lead to it. Exit names don't matter to the walk.
#[derive(Debug, Default)]
pub struct MapWalker {
    visited: HashSet<RoomId>,
    order: Vec<RoomId>,
}

impl MapWalker {
    /// Create a walker with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from a previous walk.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.order.clear();
    }

    /// Walk the map from `root`, calling `visit` once per newly discovered
    /// room in discovery order.
    ///
    /// All exit targets of a room are queued before the room is marked, and
    /// each call starts from a clean slate. A root that isn't in the map
    /// produces an empty walk.
    pub fn walk<F>(&mut self, map: &RoomMap, root: RoomId, mut visit: F)
    where
        F: FnMut(&RoomMap, RoomId),
    {
        self.reset();
        if !map.contains(root) {
            tracing::debug!(%root, "walk root is not in the map");
            return;
        }

        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            if self.visited.contains(&current) {
                continue;
            }
            let Some(room) = map.room(current) else {
                tracing::warn!(room = %current, "exit leads outside the map");
                continue;
            };
            queue.extend(room.exits().values().copied());
            visit(map, current);
            self.visited.insert(current);
            self.order.push(current);
        }

        tracing::trace!(%root, rooms = self.order.len(), "walk finished");
    }

    /// Whether the last walk reached `room`.
    pub fn has_visited(&self, room: RoomId) -> bool {
        self.visited.contains(&room)
    }

    /// Rooms reached by the last walk, in discovery order.
    pub fn order(&self) -> &[RoomId] {
        &self.order
    }
}

/// Rooms reachable from `root`, in discovery order.
pub fn walk_order(map: &RoomMap, root: RoomId) -> Vec<RoomId> {
    let mut walker = MapWalker::new();
    walker.walk(map, root, |_, _| {});
    walker.order
}
