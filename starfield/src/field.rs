//! The star record and the procedural generator.
//!
//! A field is a `Vec<Star>` in insertion order. Collection order is load
//! bearing: it is the hit-test tie-break ([`crate::input::hit_test`]) and
//! the sign pattern for scroll parallax ([`crate::parallax`]). The whole
//! collection is dropped and regenerated on every viewport resize, so no
//! star identity survives a resize.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{
    OPACITY_CEIL, OPACITY_FLOOR, STAR_COUNT, STAR_RADIUS_MAX, STAR_RADIUS_MIN, TWINKLE_SPEED_MAX,
    TWINKLE_SPEED_MIN,
};
use crate::geom::Point;

/// A single star in the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position in surface space.
    pub x: f64,
    /// Vertical position in surface space. Mutated by scroll parallax.
    pub y: f64,
    /// Draw radius in pixels, within `[0.5, 2.0)`.
    pub radius: f64,
    /// Opacity delta applied per tick; the sign flips at the opacity bounds.
    pub twinkle_speed: f64,
    /// Current opacity. Held to `[0.3, 1.0]` at tick boundaries, but may
    /// overshoot by up to one `twinkle_speed` increment on the tick that
    /// reverses direction.
    pub opacity: f64,
}

impl Star {
    /// The star's position as a [`Point`].
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance the twinkle phase by one tick.
    ///
    /// Adds `twinkle_speed` to `opacity` and negates `twinkle_speed` once the
    /// updated opacity reaches either bound. The overshooting value itself is
    /// not clamped; it is drawn as-is and walks back on the next tick.
    pub fn twinkle_step(&mut self) {
        self.opacity += self.twinkle_speed;
        if self.opacity >= OPACITY_CEIL || self.opacity <= OPACITY_FLOOR {
            self.twinkle_speed = -self.twinkle_speed;
        }
    }
}

/// Generate the star population for a viewport of `width` × `height`.
///
/// Produces exactly [`STAR_COUNT`] stars with positions uniform over the
/// viewport, radius in `[0.5, 2.0)`, twinkle speed in `[0.01, 0.03)`, and
/// opacity in `[0, 1)`. Pure in `(width, height, rng)`: the same seed and
/// dimensions reproduce the same field.
#[must_use]
pub fn generate<R: Rng>(width: f64, height: f64, rng: &mut R) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            radius: rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX),
            twinkle_speed: rng.random_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
            opacity: rng.random::<f64>(),
        })
        .collect()
}
