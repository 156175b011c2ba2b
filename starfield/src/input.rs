//! Cursor tracking and click hit-testing.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::HIT_SLOP_PX;
use crate::field::Star;
use crate::geom::{Point, distance};

/// Cursor position relative to the surface, or the left-the-surface sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorState {
    /// The cursor is over the surface at this point.
    Active(Point),
    /// The cursor has left the surface; no cursor links are drawn.
    #[default]
    FarAway,
}

/// Resolve a click to the first star within `radius + HIT_SLOP_PX` of it.
///
/// The scan runs in collection order, so overlapping stars resolve to the
/// earliest-generated one.
#[must_use]
pub fn hit_test(stars: &[Star], click: Point) -> Option<&Star> {
    stars
        .iter()
        .find(|s| distance(s.position(), click) < s.radius + HIT_SLOP_PX)
}
