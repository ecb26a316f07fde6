use std::str::{FromStr, Split};

use crawl_core::{Builder, Combatant, Critter, Explorer, Lootable, RoomId, Thing, ThingKind, Treasure};

use crate::error::{CodecError, CodecResult};

/// Field separator inside one representation.
pub const SEPARATOR: char = ';';

/// Stable one-line text form of a thing.
///
/// | kind     | form                                  |
/// |----------|---------------------------------------|
/// | treasure | `$;<value>;<short>`                   |
/// | critter  | `C;<value>;<health>;<short>;<long>`   |
/// | explorer | `E;<health>;<short>;<long>`           |
/// | builder  | `B;<short>;<long>`                    |
///
/// Values are written with five decimal places. Descriptions are already
/// free of separators and line breaks, so nothing is escaped.
pub trait Repr {
    /// Encode as one line, without the trailing newline.
    fn repr(&self) -> String;
}

impl Repr for Treasure {
    fn repr(&self) -> String {
        format!("$;{:.5};{}", self.value(), self.short_description())
    }
}

impl Repr for Critter {
    fn repr(&self) -> String {
        format!(
            "C;{:.5};{};{};{}",
            self.worth(),
            self.health(),
            self.short_description(),
            self.long_description()
        )
    }
}

impl Repr for Explorer {
    fn repr(&self) -> String {
        format!(
            "E;{};{};{}",
            self.health(),
            self.short_description(),
            self.long_description()
        )
    }
}

impl Repr for Builder {
    fn repr(&self) -> String {
        format!("B;{};{}", self.short_description(), self.long_description())
    }
}

impl Repr for Thing {
    fn repr(&self) -> String {
        match self {
            Thing::Treasure(t) => t.repr(),
            Thing::Critter(c) => c.repr(),
            Thing::Explorer(e) => e.repr(),
            Thing::Builder(b) => b.repr(),
        }
    }
}

/// Splits a representation and hands out its fields in order.
struct Fields<'a> {
    parts: Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn open(encoded: &'a str, kind: ThingKind) -> CodecResult<Self> {
        let mut parts = encoded.split(SEPARATOR);
        let tag = parts.next().unwrap_or_default();
        let expected = kind.tag();
        if tag.len() != expected.len_utf8() || !tag.starts_with(expected) {
            return Err(CodecError::TagMismatch {
                expected,
                found: tag.to_string(),
            });
        }
        Ok(Self { parts })
    }

    fn text(&mut self, field: &'static str) -> CodecResult<&'a str> {
        self.parts.next().ok_or(CodecError::MissingField(field))
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> CodecResult<T> {
        let text = self.text(field)?;
        text.trim().parse().map_err(|_| CodecError::BadNumber {
            field,
            text: text.to_string(),
        })
    }
}

/// Decode `$;<value>;<short>`.
pub fn decode_treasure(encoded: &str) -> CodecResult<Treasure> {
    let mut fields = Fields::open(encoded, ThingKind::Treasure)?;
    let value: f64 = fields.number("value")?;
    let short = fields.text("short description")?;
    Ok(Treasure::new(short, value))
}

/// Decode `C;<value>;<health>;<short>;<long>`.
pub fn decode_critter(encoded: &str) -> CodecResult<Critter> {
    let mut fields = Fields::open(encoded, ThingKind::Critter)?;
    let value: f64 = fields.number("value")?;
    let health: i32 = fields.number("health")?;
    let short = fields.text("short description")?;
    let long = fields.text("long description")?;
    Ok(Critter::new(short, long, value, health))
}

/// Decode `E;<health>;<short>;<long>`.
pub fn decode_explorer(encoded: &str) -> CodecResult<Explorer> {
    let mut fields = Fields::open(encoded, ThingKind::Explorer)?;
    let health: i32 = fields.number("health")?;
    let short = fields.text("short description")?;
    let long = fields.text("long description")?;
    Ok(Explorer::with_health(short, long, health))
}

/// Decode `B;<short>;<long>`, binding the builder to `root`.
pub fn decode_builder(encoded: &str, root: RoomId) -> CodecResult<Builder> {
    let mut fields = Fields::open(encoded, ThingKind::Builder)?;
    let short = fields.text("short description")?;
    let long = fields.text("long description")?;
    Ok(Builder::new(short, long, root))
}

/// Decode any thing, dispatching on its leading tag. Builders are bound to
/// `root`.
pub fn decode_thing(encoded: &str, root: RoomId) -> CodecResult<Thing> {
    let tag = encoded.split(SEPARATOR).next().unwrap_or_default();
    let mut chars = tag.chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => ThingKind::from_tag(c),
        _ => None,
    };
    match kind {
        Some(ThingKind::Treasure) => decode_treasure(encoded).map(Thing::from),
        Some(ThingKind::Critter) => decode_critter(encoded).map(Thing::from),
        Some(ThingKind::Explorer) => decode_explorer(encoded).map(Thing::from),
        Some(ThingKind::Builder) => decode_builder(encoded, root).map(Thing::from),
        None if encoded.is_empty() => Err(CodecError::Truncated("an entity line")),
        None => Err(CodecError::UnknownTag(tag.to_string())),
    }
}
