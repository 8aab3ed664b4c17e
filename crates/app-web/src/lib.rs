#![cfg(target_arch = "wasm32")]
use app_core::{Camera, SceneState, CATALOG, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN, SPEED_STEP};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_toggle_buttons(document: &web::Document, scene: &Rc<RefCell<SceneState>>) {
    for (index, button) in dom::build_toggle_buttons(document) {
        let body = &CATALOG[index];
        dom::set_button_active(&button, scene.borrow().is_active(body.name));
        let scene_btn = scene.clone();
        dom::add_click_listener(document, &format!("toggle-{}", body.name), move || {
            match scene_btn.borrow_mut().toggle(body.name) {
                Ok(active) => dom::set_button_active(&button, active),
                Err(e) => log::warn!("[toggle] {e}"),
            }
        });
    }
}

fn wire_speed_slider(document: &web::Document, scene: &Rc<RefCell<SceneState>>) {
    if let Some(el) = document.get_element_by_id("speed-slider") {
        if let Ok(slider) = el.dyn_into::<web::HtmlInputElement>() {
            slider.set_min(&SPEED_MIN.to_string());
            slider.set_max(&SPEED_MAX.to_string());
            slider.set_step(&SPEED_STEP.to_string());
            slider.set_value(&SPEED_DEFAULT.to_string());
        }
    }
    let scene_slider = scene.clone();
    dom::add_slider_listener(document, "speed-slider", move |value| {
        scene_slider.borrow_mut().set_speed_multiplier(value);
    });
}

fn wire_mouse_tracking(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    {
        let canvas_move = canvas.clone();
        let mouse_move = mouse.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            // Convert client (CSS px) to canvas internal pixel coords
            let rect = canvas_move.get_bounding_client_rect();
            let x_css = ev.client_x() as f32 - rect.left() as f32;
            let y_css = ev.client_y() as f32 - rect.top() as f32;
            let mut ms = mouse_move.borrow_mut();
            ms.x = (x_css / rect.width() as f32) * canvas_move.width() as f32;
            ms.y = (y_css / rect.height() as f32) * canvas_move.height() as f32;
            ms.inside = true;
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let mouse_leave = mouse.clone();
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            mouse_leave.borrow_mut().inside = false;
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // Initialize WebGPU (leak a canvas clone to satisfy 'static lifetime for surface)
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas).await?;

    let scene = Rc::new(RefCell::new(SceneState::new()));
    {
        // Start with Earth and Moon visible.
        let mut s = scene.borrow_mut();
        for name in ["Earth", "Moon"] {
            _ = s.toggle(name);
        }
    }

    wire_toggle_buttons(&document, &scene);
    wire_speed_slider(&document, &scene);

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    wire_mouse_tracking(&canvas, &mouse);

    // Render loop driven by requestAnimationFrame
    let camera = Camera::new(gpu.aspect());
    let mut ctx = frame::FrameContext {
        scene,
        camera,
        gpu,
        canvas: canvas.clone(),
        mouse,
        last_instant: Instant::now(),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    Ok(())
}
