//! Shared numeric constants for the starfield crate.

// ── Generation ──────────────────────────────────────────────────

/// Number of stars generated for any viewport size.
pub const STAR_COUNT: usize = 100;

/// Smallest star radius in pixels (inclusive).
pub const STAR_RADIUS_MIN: f64 = 0.5;

/// Largest star radius in pixels (exclusive).
pub const STAR_RADIUS_MAX: f64 = 2.0;

/// Slowest twinkle speed in opacity units per tick (inclusive).
pub const TWINKLE_SPEED_MIN: f64 = 0.01;

/// Fastest twinkle speed in opacity units per tick (exclusive).
pub const TWINKLE_SPEED_MAX: f64 = 0.03;

// ── Twinkle ─────────────────────────────────────────────────────

/// Opacity floor; crossing it reverses the twinkle direction.
pub const OPACITY_FLOOR: f64 = 0.3;

/// Opacity ceiling; crossing it reverses the twinkle direction.
pub const OPACITY_CEIL: f64 = 1.0;

// ── Constellation links ─────────────────────────────────────────

/// Two stars (or a star and the cursor) closer than this are linked.
pub const LINK_DISTANCE: f64 = 100.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels added to a star's radius on click.
pub const HIT_SLOP_PX: f64 = 5.0;

// ── Parallax ────────────────────────────────────────────────────

/// Scroll position is divided by this before displacing star rows.
pub const SCROLL_DIVISOR: f64 = 5.0;
