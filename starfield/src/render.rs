//! Rendering: draws one star-field frame to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! frame's segments and stars and produces pixels — it does not mutate any
//! field state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::tick`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::constellation::Segment;
use crate::field::Star;

/// Stroke style for constellation links.
const LINK_STROKE: &str = "rgba(255, 255, 255, 0.2)";

/// Link line width in pixels.
const LINK_WIDTH: f64 = 0.8;

/// Glow color for star circles.
const GLOW_COLOR: &str = "white";

/// Glow radius for star circles, in pixels.
const GLOW_BLUR: f64 = 4.0;

/// Draw one frame: clear, stroke every link in a single pass, then fill
/// each star as a glowing circle at its current opacity.
///
/// `width` and `height` are the surface dimensions in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    segments: &[Segment],
    stars: &[Star],
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 1: constellation links, one stroked path for all of them.
    ctx.set_stroke_style_str(LINK_STROKE);
    ctx.set_line_width(LINK_WIDTH);
    ctx.begin_path();
    for seg in segments {
        ctx.move_to(seg.a.x, seg.a.y);
        ctx.line_to(seg.b.x, seg.b.y);
    }
    ctx.stroke();

    // Layer 2: stars. The glow state is scoped so it does not bleed into
    // the next frame's link pass.
    ctx.save();
    ctx.set_shadow_color(GLOW_COLOR);
    ctx.set_shadow_blur(GLOW_BLUR);
    for star in stars {
        let alpha = star.opacity;
        ctx.begin_path();
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {alpha})"));
        ctx.arc(star.x, star.y, star.radius, 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    ctx.restore();

    Ok(())
}
