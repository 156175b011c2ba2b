#![allow(clippy::float_cmp)]

use super::*;

fn field_of(ys: &[f64]) -> Vec<Star> {
    ys.iter()
        .map(|&y| Star { x: 0.0, y, radius: 1.0, twinkle_speed: 0.01, opacity: 0.5 })
        .collect()
}

#[test]
fn even_indices_drift_down() {
    let mut stars = field_of(&[100.0]);
    apply_scroll(&mut stars, 50.0);
    assert_eq!(stars[0].y, 110.0);
}

#[test]
fn odd_indices_drift_up() {
    let mut stars = field_of(&[100.0, 100.0]);
    apply_scroll(&mut stars, 50.0);
    assert_eq!(stars[0].y, 110.0);
    assert_eq!(stars[1].y, 90.0);
}

#[test]
fn repeated_events_compound() {
    let mut stars = field_of(&[100.0]);
    apply_scroll(&mut stars, 50.0);
    assert_eq!(stars[0].y, 110.0);
    // Same scroll position again: another +10, not a return to 110.
    apply_scroll(&mut stars, 50.0);
    assert_eq!(stars[0].y, 120.0);
}

#[test]
fn zero_scroll_is_a_no_op() {
    let mut stars = field_of(&[100.0, 200.0]);
    apply_scroll(&mut stars, 0.0);
    assert_eq!(stars[0].y, 100.0);
    assert_eq!(stars[1].y, 200.0);
}

#[test]
fn negative_scroll_inverts_both_directions() {
    let mut stars = field_of(&[100.0, 100.0]);
    apply_scroll(&mut stars, -50.0);
    assert_eq!(stars[0].y, 90.0);
    assert_eq!(stars[1].y, 110.0);
}

#[test]
fn x_is_untouched() {
    let mut stars = field_of(&[100.0]);
    stars[0].x = 42.0;
    apply_scroll(&mut stars, 50.0);
    assert_eq!(stars[0].x, 42.0);
}
