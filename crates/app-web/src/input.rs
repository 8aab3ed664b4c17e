// Pure picking math, kept free of DOM types so it can be tested host-side.

use app_core::{Camera, Placement};
use glam::{Vec3, Vec4};

/// Pointer position in canvas backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

/// Compute a world-space ray from screen-space canvas coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space, starting at the
/// camera eye.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera: &Camera,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest placement hit by the ray, if any.
pub fn pick_placement(placements: &[Placement], ray_o: Vec3, ray_d: Vec3) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, p) in placements.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_o, ray_d, p.position, p.radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
