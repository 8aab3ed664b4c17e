//! Scene state shared by the web and native frontends.
//!
//! Owns the active selection and everything derived from it. A toggle runs
//! the full top-down recomputation (selection -> layout -> camera framing);
//! per-frame work is limited to advancing spin angles and emitting instance
//! records for the renderer. Each display instance owns its own `SceneState`.

use std::time::Duration;

use glam::Vec3;

use crate::camera::{compute_camera_config, CameraConfig};
use crate::catalog::{find_body, Body, CatalogError, CATALOG};
use crate::constants::{
    HOVER_BRIGHTNESS, NOMINAL_FRAME_RATE, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN,
};
use crate::layout::{compute_layout, Placement};
use crate::selection::Selection;

/// Per-body draw record consumed by both renderers. Matches the instance
/// vertex buffer layout in `shaders/scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub spin: f32,
}

pub struct SceneState {
    selection: Selection,
    active: Vec<(usize, &'static Body)>,
    placements: Vec<Placement>,
    camera_config: CameraConfig,
    spin_angles: Vec<f32>,
    speed_multiplier: f32,
    hover: Option<usize>,
}

impl SceneState {
    pub fn new() -> Self {
        let mut state = Self {
            selection: Selection::new(),
            active: Vec::new(),
            placements: Vec::new(),
            camera_config: compute_camera_config(&[]),
            spin_angles: vec![0.0; CATALOG.len()],
            speed_multiplier: SPEED_DEFAULT,
            hover: None,
        };
        state.recompute();
        state
    }

    /// Flip a body's visibility and recompute placements and camera.
    /// Returns whether the body is now active.
    pub fn toggle(&mut self, name: &str) -> Result<bool, CatalogError> {
        let (_, body) = find_body(name)?;
        let now_active = self.selection.toggle(body.name);
        log::info!(
            "[toggle] {} -> {}",
            body.name,
            if now_active { "on" } else { "off" }
        );
        self.recompute();
        Ok(now_active)
    }

    fn recompute(&mut self) {
        self.active = self.selection.active_bodies();
        let bodies: Vec<&Body> = self.active.iter().map(|&(_, b)| b).collect();
        self.placements = compute_layout(&bodies);
        self.camera_config = compute_camera_config(&self.placements);
        self.hover = None;
        log::debug!(
            "[layout] {} active, camera distance {:.2} near {:.2} far {:.0}",
            self.active.len(),
            self.camera_config.distance,
            self.camera_config.near,
            self.camera_config.far
        );
    }

    pub fn set_speed_multiplier(&mut self, value: f32) {
        self.speed_multiplier = value.clamp(SPEED_MIN, SPEED_MAX);
    }

    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Advance spin angles for the visible bodies. The speed multiplier is
    /// radians per frame at [`NOMINAL_FRAME_RATE`], scaled by `dt` so the
    /// visual rate does not depend on the real frame rate.
    pub fn advance(&mut self, dt: Duration) {
        let step = self.speed_multiplier * dt.as_secs_f32() * NOMINAL_FRAME_RATE;
        for &(catalog_index, body) in &self.active {
            let angle = &mut self.spin_angles[catalog_index];
            *angle = (*angle + step * body.spin_rate()).rem_euclid(std::f32::consts::TAU);
        }
    }

    /// Hover slot in active-list order, as picked by the frontend.
    pub fn set_hover(&mut self, slot: Option<usize>) {
        self.hover = slot.filter(|&s| s < self.active.len());
    }

    #[inline]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    #[inline]
    pub fn is_active(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    #[inline]
    pub fn camera_config(&self) -> CameraConfig {
        self.camera_config
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Active bodies with their catalog indices, in placement order.
    #[inline]
    pub fn active_bodies(&self) -> &[(usize, &'static Body)] {
        &self.active
    }

    pub fn spin_angle(&self, catalog_index: usize) -> f32 {
        self.spin_angles[catalog_index]
    }

    /// Build the instance records for the current frame.
    pub fn instances(&self) -> Vec<SphereInstance> {
        let mut out = Vec::with_capacity(self.active.len());
        for (slot, (&(catalog_index, body), placement)) in
            self.active.iter().zip(self.placements.iter()).enumerate()
        {
            let mut color = Vec3::from(body.color);
            if self.hover == Some(slot) {
                color = (color * HOVER_BRIGHTNESS).min(Vec3::ONE);
            }
            out.push(SphereInstance {
                pos: placement.position.to_array(),
                radius: placement.radius,
                color: [color.x, color.y, color.z, 1.0],
                spin: self.spin_angles[catalog_index],
            });
        }
        out
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
