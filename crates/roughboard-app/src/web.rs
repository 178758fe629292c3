//! WebAssembly entry point and platform-specific code.

use crate::canvas2d::Canvas2dSurface;
use roughboard_core::render::RenderLoop;
use roughboard_core::{BoardConfig, Canvas, ToolKind};
use roughboard_render::RoughGenerator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlInputElement, MouseEvent, Window};

/// Id of the drawing canvas element.
const CANVAS_ID: &str = "canvas";
/// Class shared by the toolbar radio inputs; each input's id names its tool.
const TOOL_CLASS: &str = "tool";

type WebCanvas = Canvas<RoughGenerator, RenderLoop<Canvas2dSurface>>;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Viewport size in CSS pixels.
fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Read the optional JSON configuration from the canvas `data-config` attribute.
fn load_config(canvas: &HtmlCanvasElement) -> Result<BoardConfig, JsValue> {
    match canvas.get_attribute("data-config") {
        Some(json) => BoardConfig::from_json(&json).map_err(js_error),
        None => Ok(BoardConfig::default()),
    }
}

/// Register a listener that lives as long as the page.
fn listen<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_pointer(board: &Rc<RefCell<WebCanvas>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let down = Rc::clone(board);
    listen(canvas, "mousedown", move |e: MouseEvent| {
        down.borrow_mut()
            .pointer_down(e.client_x() as f64, e.client_y() as f64);
    })?;

    let moved = Rc::clone(board);
    let style = canvas.style();
    listen(canvas, "mousemove", move |e: MouseEvent| {
        let hint = moved
            .borrow_mut()
            .pointer_move(e.client_x() as f64, e.client_y() as f64);
        if let Some(hint) = hint {
            if let Err(err) = style.set_property("cursor", hint.css()) {
                log::warn!("Failed to set cursor: {:?}", err);
            }
        }
    })?;

    let up = Rc::clone(board);
    listen(canvas, "mouseup", move |_: MouseEvent| {
        up.borrow_mut().pointer_up();
    })
}

/// Wire the toolbar radio inputs. Inputs whose id is not a tool name are
/// rejected instead of falling back to a default tool.
fn attach_toolbar(board: &Rc<RefCell<WebCanvas>>, document: &Document) -> Result<(), JsValue> {
    let inputs = document.get_elements_by_class_name(TOOL_CLASS);
    let current = board.borrow().tool();

    for index in 0..inputs.length() {
        let Some(element) = inputs.item(index) else {
            continue;
        };
        let input: HtmlInputElement = element.dyn_into()?;
        let tool: ToolKind = input.id().parse().map_err(js_error)?;
        input.set_checked(tool == current);

        let board = Rc::clone(board);
        listen(&input, "change", move |_: Event| {
            board.borrow_mut().set_tool(tool);
        })?;
    }
    Ok(())
}

fn attach_resize(board: &Rc<RefCell<WebCanvas>>, window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let board = Rc::clone(board);
    let resize_window = window.clone();
    let canvas = canvas.clone();
    listen(window, "resize", move |_: Event| {
        let (width, height) = viewport_size(&resize_window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let mut board = board.borrow_mut();
        board.observer_mut().surface_mut().resize(width, height);
        board.refresh();
    })
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).map_err(js_error)?;
    log::info!("Starting Roughboard (WASM)");

    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| js_error(format!("missing #{CANVAS_ID} element")))?
        .dyn_into()?;

    let (width, height) = viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let config = load_config(&canvas)?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| js_error("2d context unavailable"))?
        .dyn_into()?;

    let surface = Canvas2dSurface::new(context, width, height);
    let generator = RoughGenerator::new(config.sketch.clone());
    let board = Rc::new(RefCell::new(Canvas::with_config(&config, generator, RenderLoop::new(surface))));

    attach_pointer(&board, &canvas)?;
    attach_toolbar(&board, &document)?;
    attach_resize(&board, &window, &canvas)?;

    board.borrow_mut().refresh();
    log::info!("Board ready ({}x{}), tool {}", width, height, board.borrow().tool());
    Ok(())
}
