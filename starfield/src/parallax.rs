//! Scroll-driven vertical drift.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::SCROLL_DIVISOR;
use crate::field::Star;

/// Displace every star's `y` for a scroll event at position `scroll_y`.
///
/// Even collection indices drift down, odd indices up, each by
/// `scroll_y / SCROLL_DIVISOR`. The offset is added to the star's current
/// `y`, so successive scroll events compound rather than track the absolute
/// scroll position: repeating the same scroll position moves the stars
/// again.
pub fn apply_scroll(stars: &mut [Star], scroll_y: f64) {
    for (idx, star) in stars.iter_mut().enumerate() {
        let sign = if idx % 2 == 0 { 1.0 } else { -1.0 };
        star.y += (scroll_y / SCROLL_DIVISOR) * sign;
    }
}
