//! Frame scheduling: a cancellable requestAnimationFrame loop.
//!
//! The loop is a two-state machine: **idle** (no callback pending) and
//! **running** (exactly one callback pending). [`FrameLoop::start`] moves
//! idle → running; each dispatched callback runs the tick and reschedules
//! itself; [`FrameLoop::stop`] cancels the pending callback so no tick fires
//! after teardown. Dropping the handle stops the loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type TickClosure = Closure<dyn FnMut(f64)>;

struct LoopState {
    raf_id: Option<i32>,
    closure: Option<TickClosure>,
}

/// Handle to a running animation loop.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    /// Start invoking `tick` once per display frame.
    #[must_use]
    pub fn start(mut tick: impl FnMut() + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState { raf_id: None, closure: None }));

        let state_for_cb = Rc::clone(&state);
        let cb = Closure::wrap(Box::new(move |_timestamp: f64| {
            tick();
            // Re-arm unless stop() ran inside the tick.
            if state_for_cb.borrow().raf_id.is_some() {
                schedule(&state_for_cb);
            }
        }) as Box<dyn FnMut(f64)>);

        state.borrow_mut().closure = Some(cb);
        schedule(&state);
        log::debug!("frame loop started");
        Self { state }
    }

    /// Cancel the pending tick. Running → idle; a second call is a no-op.
    pub fn stop(&self) {
        let Some(id) = self.state.borrow_mut().raf_id.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {err:?}");
            }
        }
        log::debug!("frame loop stopped");
    }

    /// Whether a tick is currently scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().raf_id.is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.state.borrow_mut().closure = None;
    }
}

fn schedule(state: &Rc<RefCell<LoopState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let requested = {
        let guard = state.borrow();
        let Some(cb) = guard.closure.as_ref() else {
            return;
        };
        window.request_animation_frame(cb.as_ref().unchecked_ref())
    };
    match requested {
        Ok(id) => state.borrow_mut().raf_id = Some(id),
        Err(err) => log::warn!("request_animation_frame failed: {err:?}"),
    }
}
