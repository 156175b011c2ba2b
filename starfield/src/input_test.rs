#![allow(clippy::float_cmp)]

use super::*;

fn star_at(x: f64, y: f64, radius: f64, opacity: f64) -> Star {
    Star { x, y, radius, twinkle_speed: 0.01, opacity }
}

// --- CursorState ---

#[test]
fn cursor_default_is_far_away() {
    assert_eq!(CursorState::default(), CursorState::FarAway);
}

#[test]
fn cursor_active_carries_the_point() {
    let state = CursorState::Active(Point::new(3.0, 4.0));
    assert_eq!(state, CursorState::Active(Point::new(3.0, 4.0)));
    assert_ne!(state, CursorState::FarAway);
}

// --- hit_test ---

#[test]
fn direct_hit_selects_the_star() {
    let stars = [star_at(10.0, 10.0, 1.0, 0.5)];
    let hit = hit_test(&stars, Point::new(10.0, 10.0));
    assert!(hit.is_some());
}

#[test]
fn hit_inside_slop_selects_the_star() {
    // radius 1 + slop 5 = 6; distance 5.9 is a hit.
    let stars = [star_at(0.0, 0.0, 1.0, 0.5)];
    assert!(hit_test(&stars, Point::new(5.9, 0.0)).is_some());
}

#[test]
fn hit_at_exact_slop_boundary_misses() {
    let stars = [star_at(0.0, 0.0, 1.0, 0.5)];
    assert!(hit_test(&stars, Point::new(6.0, 0.0)).is_none());
}

#[test]
fn miss_returns_none() {
    let stars = [star_at(10.0, 10.0, 1.0, 0.5)];
    assert!(hit_test(&stars, Point::new(10_000.0, 10_000.0)).is_none());
}

#[test]
fn empty_field_never_hits() {
    assert!(hit_test(&[], Point::new(0.0, 0.0)).is_none());
}

#[test]
fn overlapping_stars_resolve_to_the_first() {
    // Identical positions; opacity marks which record came back.
    let stars = [star_at(10.0, 10.0, 1.0, 0.1), star_at(10.0, 10.0, 1.0, 0.9)];
    let hit = hit_test(&stars, Point::new(10.0, 10.0));
    assert_eq!(hit.map(|s| s.opacity), Some(0.1));
}

#[test]
fn larger_radius_extends_the_hit_area() {
    let stars = [star_at(0.0, 0.0, 1.9, 0.5)];
    assert!(hit_test(&stars, Point::new(6.5, 0.0)).is_some());
}
