use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` listener on a range slider, parsing its value as f32.
pub fn add_slider_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f32) + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{element_id}");
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("[dom] #{element_id} is not an input element");
        return;
    };
    let input_for_read = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Ok(value) = input_for_read.value().parse::<f32>() {
            handler(value);
        }
    }) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create one toggle button per catalog body inside `#controls`, returning
/// the created elements so callers can wire click handlers.
pub fn build_toggle_buttons(document: &web::Document) -> Vec<(usize, web::Element)> {
    let mut buttons = Vec::new();
    let Some(container) = document.get_element_by_id("controls") else {
        log::warn!("[dom] missing #controls");
        return buttons;
    };
    for (i, body) in app_core::CATALOG.iter().enumerate() {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_id(&format!("toggle-{}", body.name));
        button.set_text_content(Some(body.name));
        let _ = button.class_list().add_1("toggle");
        let _ = container.append_child(&button);
        buttons.push((i, button));
    }
    buttons
}

/// Reflect a body's active state on its toggle button.
pub fn set_button_active(button: &web::Element, active: bool) {
    let class_list = button.class_list();
    if active {
        let _ = class_list.add_1("active");
    } else {
        let _ = class_list.remove_1("active");
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
