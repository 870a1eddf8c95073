use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use web_sys::js_sys::Math;

use crate::graph::{DrawOp, NetworkGraph};
use crate::state::{use_theme, Theme};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Keeps the requestAnimationFrame loop alive. Dropping it cancels the pending frame and
/// releases the self referencing callback.
struct Animation {
    window: Window,
    frame_id: Rc<Cell<i32>>,
    callback: FrameCallback,
}

impl Drop for Animation {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.frame_id.get());
        self.callback.borrow_mut().take();
    }
}

fn viewport() -> (f64, f64) {
    web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

fn draw(context: &CanvasRenderingContext2d, op: &DrawOp, (r, g, b): (u8, u8, u8)) {
    match *op {
        DrawOp::Line { from, to, alpha } => {
            context.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, alpha));
            context.begin_path();
            context.move_to(from.0, from.1);
            context.line_to(to.0, to.1);
            context.stroke();
        }
        DrawOp::Dot { at, radius, alpha } => {
            context.set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, alpha));
            context.begin_path();
            let _ = context.arc(at.0, at.1, radius, 0.0, PI * 2.0);
            context.fill();
        }
    }
}

fn start(canvas: HtmlCanvasElement, width: f64, height: f64, theme: Theme) -> Result<Animation, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut graph = NetworkGraph::new(width, height, Math::random);
    let ink = theme.ink();

    let frame_id = Rc::new(Cell::new(0));
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    {
        let next_frame = callback.clone();
        let frame_id = frame_id.clone();
        let window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            context.clear_rect(0.0, 0.0, width, height);
            for op in graph.step() {
                draw(&context, &op, ink);
            }
            if let Some(next) = next_frame.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    frame_id.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }

    if let Some(first) = callback.borrow().as_ref() {
        frame_id.set(window.request_animation_frame(first.as_ref().unchecked_ref())?);
    }

    Ok(Animation { window, frame_id, callback })
}

/// Decorative full screen background. Re-seeded whenever the viewport or the theme changes.
#[function_component(NetworkGraphBackground)]
pub fn network_graph_background() -> Html {
    let canvas_ref = use_node_ref();
    let dimensions = use_state(viewport);
    let theme = use_theme();

    {
        let dimensions = dimensions.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let resize_callback = Closure::wrap(Box::new(move || {
                dimensions.set(viewport());
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        let canvas_ref = canvas_ref.clone();
        let (width, height) = *dimensions;
        use_effect_with_deps(move |_| {
            let animation = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| match start(canvas, width, height, theme) {
                    Ok(animation) => Some(animation),
                    Err(e) => {
                        log::warn!("Background animation disabled: {:?}", e);
                        None
                    }
                });
            move || drop(animation)
        }, (width as i64, height as i64, theme));
    }

    html! {
        <>
            <style>
            {r#"
                .network-graph {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
            "#}
            </style>
            <canvas ref={canvas_ref} class="network-graph" />
        </>
    }
}
