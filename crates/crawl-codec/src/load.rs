use std::path::Path;
use std::str::Lines;

use crawl_core::{CrawlError, RoomId, RoomMap, ThingId};

use crate::error::{CodecError, CodecResult};
use crate::repr::decode_thing;

/// A successfully decoded world.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    /// Every room in the file.
    pub map: RoomMap,
    /// Room 0, where the walk that wrote the file began.
    pub root: RoomId,
    /// The single player, if the file has one, and the room holding it.
    pub player: Option<(RoomId, ThingId)>,
}

/// Hands out lines with their 1-based numbers.
struct Reader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next(&mut self, what: &'static str) -> CodecResult<&'a str> {
        let text = self
            .lines
            .next()
            .ok_or_else(|| CodecError::Truncated(what).at_line(self.line + 1))?;
        self.line += 1;
        Ok(text)
    }

    fn count(&mut self, what: &'static str) -> CodecResult<usize> {
        let text = self.next(what)?;
        text.trim().parse().map_err(|_| self.fail(CodecError::BadNumber {
            field: what,
            text: text.to_string(),
        }))
    }

    fn fail(&self, err: CodecError) -> CodecError {
        err.at_line(self.line)
    }
}

/// Rebuild a world from world-file text.
///
/// Rooms come first, then exits (checked by the room map's own rules), then
/// contents. Any problem fails the whole load.
pub fn decode_world(text: &str) -> CodecResult<LoadedMap> {
    let mut reader = Reader::new(text);
    let count = reader.count("room count")?;
    if count == 0 {
        return Err(reader.fail(CodecError::NoRooms));
    }

    let mut map = RoomMap::new();
    for _ in 0..count {
        map.add_room(reader.next("a room description")?);
    }
    let root = RoomId(0);

    for from in (0..count).map(RoomId) {
        let exits = reader.count("exit count")?;
        for _ in 0..exits {
            let line = reader.next("an exit")?;
            let (index, name) = line
                .split_once(' ')
                .ok_or_else(|| reader.fail(CodecError::MalformedExit(line.to_string())))?;
            let index: usize = index.parse().map_err(|_| {
                reader.fail(CodecError::BadNumber {
                    field: "exit target",
                    text: index.to_string(),
                })
            })?;
            if index >= count {
                return Err(reader.fail(CodecError::IndexOutOfRange { index, count }));
            }
            map.add_exit(from, name, Some(RoomId(index)))
                .map_err(|e| reader.fail(e.into()))?;
        }
    }

    let mut player = None;
    for id in (0..count).map(RoomId) {
        let things = reader.count("content count")?;
        for _ in 0..things {
            let thing = decode_thing(reader.next("an entity")?, root).map_err(|e| reader.fail(e))?;
            if thing.is_player() {
                if player.is_some() {
                    return Err(reader.fail(CodecError::MultiplePlayers));
                }
                player = Some((id, thing.id()));
            }
            map.room_mut(id)
                .ok_or(CodecError::Exit(CrawlError::RoomNotFound(id)))?
                .enter(thing);
        }
    }

    tracing::debug!(rooms = count, things = map.thing_count(), "decoded world");
    Ok(LoadedMap { map, root, player })
}

/// Read and decode a world file.
pub fn load_map(path: &Path) -> CodecResult<LoadedMap> {
    let result = std::fs::read_to_string(path)
        .map_err(CodecError::from)
        .and_then(|text| decode_world(&text));
    if let Err(e) = &result {
        tracing::warn!(path = %path.display(), error = %e, "failed to load world");
    }
    result
}
