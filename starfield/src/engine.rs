use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::constellation;
use crate::field::{self, Star};
use crate::geom::Point;
use crate::input::{self, CursorState};
use crate::parallax;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    StarSelected(Star),
}

/// Core field state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct FieldCore {
    pub stars: Vec<Star>,
    pub cursor: CursorState,
    pub selected: Option<Star>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    rng: ChaCha8Rng,
}

impl FieldCore {
    /// Create an empty core whose generator is seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stars: Vec::new(),
            cursor: CursorState::FarAway,
            selected: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // --- Lifecycle ---

    /// Replace the entire star population for a new viewport size.
    ///
    /// Runs at startup and on every resize notification; the previous
    /// collection is discarded wholesale.
    pub fn reseed(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.stars = field::generate(width, height, &mut self.rng);
        log::debug!("reseeded {} stars for {width}x{height}", self.stars.len());
    }

    /// Advance every star's twinkle phase by one tick, in collection order.
    pub fn advance_twinkle(&mut self) {
        for star in &mut self.stars {
            star.twinkle_step();
        }
    }

    // --- Input events ---

    /// Record the cursor position relative to the surface.
    pub fn on_cursor_move(&mut self, point: Point) {
        self.cursor = CursorState::Active(point);
    }

    /// Record that the cursor left the surface.
    pub fn on_cursor_leave(&mut self) {
        self.cursor = CursorState::FarAway;
    }

    /// Resolve a click against the field.
    ///
    /// A hit stores a copy of the star as the selection and reports it to
    /// the host; a miss leaves any existing selection untouched.
    pub fn on_click(&mut self, point: Point) -> Action {
        match input::hit_test(&self.stars, point) {
            Some(star) => {
                let star = star.clone();
                self.selected = Some(star.clone());
                Action::StarSelected(star)
            }
            None => Action::None,
        }
    }

    /// Displace the field for a scroll event at `scroll_y`.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        parallax::apply_scroll(&mut self.stars, scroll_y);
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- Queries ---

    /// The currently selected star, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Star> {
        self.selected.as_ref()
    }
}

/// The full star-field engine. Wraps `FieldCore` and owns the browser canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    pub core: FieldCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// `seed` feeds the star generator; hosts seed from the clock, tests
    /// from a fixed value.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Self {
        let ctx = context_of(&canvas);
        if ctx.is_none() {
            log::warn!("2d context unavailable; the field will not draw");
        }
        Self { canvas, ctx, core: FieldCore::new(seed) }
    }

    // --- Viewport ---

    /// Resize the canvas backing store and regenerate the field to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.core.reseed(width, height);
    }

    // --- Animation ---

    /// One animation tick: build the constellation for the current state,
    /// advance the twinkle phases, and draw the frame.
    ///
    /// A missing 2d context makes this a no-op; a failed draw call aborts
    /// the frame and is logged.
    pub fn tick(&mut self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        let segments = constellation::segments(&self.core.stars, self.core.cursor);
        self.core.advance_twinkle();
        if let Err(err) = render::draw(
            ctx,
            self.core.viewport_width,
            self.core.viewport_height,
            &segments,
            &self.core.stars,
        ) {
            log::warn!("frame draw failed: {err:?}");
        }
    }

    // --- Delegated input events ---

    pub fn on_pointer_move(&mut self, point: Point) {
        self.core.on_cursor_move(point);
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_cursor_leave();
    }

    pub fn on_click(&mut self, point: Point) -> Action {
        self.core.on_click(point)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.core.on_scroll(scroll_y);
    }

    pub fn clear_selection(&mut self) {
        self.core.clear_selection();
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&Star> {
        self.core.selection()
    }
}

fn context_of(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let raw = match canvas.get_context("2d") {
        Ok(Some(raw)) => raw,
        _ => return None,
    };
    match raw.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
