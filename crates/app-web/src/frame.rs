use crate::input;
use crate::render;
use app_core::{Camera, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the per-frame callback needs to own.
pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Camera,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        scene.advance(dt);

        // Keep the surface sized to the canvas backing store.
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        self.camera.aspect = self.gpu.aspect();
        self.camera.apply(scene.camera_config());

        // Hover pick against the current placements.
        let hover = {
            let mouse = self.mouse.borrow();
            if mouse.inside {
                let (ro, rd) = input::screen_to_world_ray(
                    self.canvas.width() as f32,
                    self.canvas.height() as f32,
                    mouse.x,
                    mouse.y,
                    &self.camera,
                );
                input::pick_placement(scene.placements(), ro, rd)
            } else {
                None
            }
        };
        scene.set_hover(hover);

        let instances = scene.instances();
        drop(scene);
        if let Err(e) = self.gpu.render(&self.camera, &instances) {
            log::error!("render error: {:?}", e);
        }
    }
}
