//! Camera framing for the current set of placements.
//!
//! The arithmetic is a pure function from placements to a
//! [`CameraConfig`] triple; the stateful [`Camera`] applies a config and
//! builds matrices for the renderers. These types avoid platform-specific
//! APIs and are usable on both native and web targets.

use crate::constants::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_FAR, DEFAULT_NEAR, DISTANCE_RADIUS_FACTOR, FAR_RADIUS_FACTOR,
    FOV_Y_DEGREES, MULTI_BODY_PADDING, NEAR_RADIUS_FACTOR, SINGLE_BODY_PADDING,
};
use crate::layout::Placement;
use glam::{Mat4, Vec3};

/// Viewing distance and clip planes that keep every placement in frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

/// Derive the camera configuration from the placed bodies.
///
/// The eye sits on +Z looking at the origin, so the framing distance is
/// driven by the farthest silhouette extent from the origin, with extra
/// padding when a single body has nothing to anchor its scale against. Clip
/// planes follow the *largest* visible radius so big bodies never clip at
/// close range.
pub fn compute_camera_config(placements: &[Placement]) -> CameraConfig {
    if placements.is_empty() {
        return CameraConfig {
            distance: DEFAULT_CAMERA_DISTANCE,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        };
    }

    let max_radius = placements.iter().map(|p| p.radius).fold(0.0_f32, f32::max);
    let max_extent = placements
        .iter()
        .map(|p| p.position.length() + p.radius)
        .fold(0.0_f32, f32::max);

    let padding = if placements.len() == 1 {
        SINGLE_BODY_PADDING
    } else {
        MULTI_BODY_PADDING
    };

    CameraConfig {
        distance: (max_extent * padding).max(max_radius * DISTANCE_RADIUS_FACTOR),
        near: (max_radius * NEAR_RADIUS_FACTOR).max(DEFAULT_NEAR),
        far: (max_radius * FAR_RADIUS_FACTOR).max(DEFAULT_FAR),
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera for an empty scene: origin-facing at the default distance.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, DEFAULT_CAMERA_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: FOV_Y_DEGREES.to_radians(),
            znear: DEFAULT_NEAR,
            zfar: DEFAULT_FAR,
        }
    }

    /// Apply a framing config. Only the eye distance and clip planes vary;
    /// the camera keeps facing the origin along the fixed +Z axis.
    pub fn apply(&mut self, config: CameraConfig) {
        self.eye = Vec3::new(0.0, 0.0, config.distance);
        self.znear = config.near;
        self.zfar = config.far;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Combined view-projection, column-major, for the uniform buffer.
    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        (self.projection_matrix() * self.view_matrix()).to_cols_array_2d()
    }
}
