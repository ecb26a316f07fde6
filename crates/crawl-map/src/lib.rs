//! Walking a Crawl room map and laying it out on a grid.
//!
//! [`MapWalker`] enumerates every room reachable from a root exactly once.
//! [`Layout`] is built on top of it and assigns each room an integer
//! coordinate from its canonically named exits (`North`, `South`, `East`,
//! `West`). [`render`] turns a layout into a small ASCII map.

/// Renderer configuration.
pub mod config;
/// Coordinate inference.
pub mod layout;
/// ASCII rendering of a layout.
pub mod render;
/// Breadth-first room traversal.
pub mod walker;

/// Re-export of [`config::RenderConfig`].
pub use config::RenderConfig;
/// Re-exports of layout types.
pub use layout::{Coord, Extrema, Layout, Placement};
/// Re-export of [`render::render`].
pub use render::render;
/// Re-exports of walker types.
pub use walker::{MapWalker, walk_order};
