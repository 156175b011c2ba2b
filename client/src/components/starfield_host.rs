//! Bridge component between the Leptos UI and the imperative
//! `starfield::Engine`.
//!
//! Mounts the full-viewport `<canvas>`, creates the engine seeded from the
//! clock, wires window resize/scroll and canvas pointer events into it, and
//! owns the frame loop lifecycle: started once the canvas exists, stopped on
//! component cleanup so no tick fires against a torn-down surface.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use starfield::engine::{Action, Engine};
use starfield::field::Star;
use starfield::geom::Point;
use starfield::sched::FrameLoop;

/// Current window size in CSS pixels.
fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Current vertical scroll position of the page.
fn scroll_position() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Event position relative to the canvas's top-left corner.
fn relative_point(canvas: &web_sys::HtmlCanvasElement, ev: &ev::MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}

/// Canvas host for the star field.
///
/// `selected` is set whenever a click resolves to a star; the card that
/// displays it writes `None` back, which clears the engine-side selection
/// too.
#[component]
pub fn StarfieldHost(selected: RwSignal<Option<Star>>) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let engine = Rc::new(RefCell::new(None::<Engine>));
    let frame_loop = Rc::new(RefCell::new(None::<FrameLoop>));

    // Mount: create the engine, seed the field to the viewport, start ticking.
    {
        let engine = Rc::clone(&engine);
        let frame_loop = Rc::clone(&frame_loop);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seed = js_sys::Date::now() as u64;
            let mut instance = Engine::new(canvas, seed);
            let (width, height) = viewport_size();
            instance.set_viewport(width, height);
            *engine.borrow_mut() = Some(instance);

            let engine_for_tick = Rc::clone(&engine);
            *frame_loop.borrow_mut() = Some(FrameLoop::start(move || {
                if let Some(engine) = engine_for_tick.borrow_mut().as_mut() {
                    engine.tick();
                }
            }));
        });
    }

    // Window resize replaces the field; scroll drifts it.
    {
        let engine = Rc::clone(&engine);
        let resize = window_event_listener(ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let (width, height) = viewport_size();
                engine.set_viewport(width, height);
            }
        });
        on_cleanup(move || resize.remove());
    }
    {
        let engine = Rc::clone(&engine);
        let scroll = window_event_listener(ev::scroll, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_scroll(scroll_position());
            }
        });
        on_cleanup(move || scroll.remove());
    }

    // The card cleared the selection; mirror that into the engine.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            if selected.get().is_none() {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.clear_selection();
                }
            }
        });
    }

    // Teardown: cancel the pending tick and drop the engine.
    {
        let engine = Rc::clone(&engine);
        let frame_loop = Rc::clone(&frame_loop);
        let teardown = send_wrapper::SendWrapper::new(move || {
            if let Some(frame_loop) = frame_loop.borrow_mut().take() {
                frame_loop.stop();
            }
            engine.borrow_mut().take();
        });
        on_cleanup(move || teardown.take()());
    }

    let on_mouse_move = {
        let engine = Rc::clone(&engine);
        move |ev: ev::MouseEvent| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_move(relative_point(&canvas, &ev));
            }
        }
    };

    let on_mouse_leave = {
        let engine = Rc::clone(&engine);
        move |_ev: ev::MouseEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_leave();
            }
        }
    };

    let on_click = {
        let engine = Rc::clone(&engine);
        move |ev: ev::MouseEvent| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                match engine.on_click(relative_point(&canvas, &ev)) {
                    Action::StarSelected(star) => selected.set(Some(star)),
                    Action::None => {}
                }
            }
        }
    };

    view! {
        <canvas
            class="starfield-host"
            node_ref=canvas_ref
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
            on:click=on_click
        ></canvas>
    }
}
