//! Static catalog of displayable bodies.
//!
//! Diameters are in thousands of kilometres, rotation periods in Earth days.
//! The catalog is configuration data: entries are immutable and every name is
//! unique. Texture paths are carried as references only; the renderers shade
//! procedurally from `color`.

use thiserror::Error;

#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub name: &'static str,
    pub diameter: f32,
    /// Rotation period in days; `None` spins at the default rate of 1.
    pub rotation_period_days: Option<f32>,
    pub color: [f32; 3],
    pub texture: Option<&'static str>,
}

impl Body {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Spin rate relative to Earth's: the reciprocal of the rotation period.
    #[inline]
    pub fn spin_rate(&self) -> f32 {
        match self.rotation_period_days {
            Some(period) => 1.0 / period,
            None => 1.0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown body name: {0}")]
    UnknownBody(String),
}

pub const CATALOG: &[Body] = &[
    Body {
        name: "Sun",
        diameter: 1390.0,
        rotation_period_days: Some(27.0),
        color: [0.98, 0.85, 0.35],
        texture: Some("textures/sun.png"),
    },
    Body {
        name: "Mercury",
        diameter: 4.879,
        rotation_period_days: Some(58.6),
        color: [0.62, 0.58, 0.55],
        texture: None,
    },
    Body {
        name: "Venus",
        diameter: 12.104,
        rotation_period_days: Some(243.0),
        color: [0.87, 0.76, 0.55],
        texture: None,
    },
    Body {
        name: "Earth",
        diameter: 12.742,
        rotation_period_days: Some(1.0),
        color: [0.25, 0.45, 0.85],
        texture: Some("textures/earth.png"),
    },
    Body {
        name: "Moon",
        diameter: 3.4748,
        rotation_period_days: Some(29.5),
        color: [0.65, 0.65, 0.66],
        texture: Some("textures/moon.png"),
    },
    Body {
        name: "Mars",
        diameter: 6.779,
        rotation_period_days: Some(1.03),
        color: [0.80, 0.40, 0.25],
        texture: None,
    },
    Body {
        name: "Jupiter",
        diameter: 139.82,
        rotation_period_days: Some(0.41),
        color: [0.78, 0.65, 0.48],
        texture: None,
    },
    Body {
        name: "Saturn",
        diameter: 116.46,
        rotation_period_days: Some(0.45),
        color: [0.85, 0.76, 0.55],
        texture: None,
    },
    Body {
        name: "Uranus",
        diameter: 50.724,
        rotation_period_days: Some(0.72),
        color: [0.55, 0.78, 0.82],
        texture: None,
    },
    Body {
        name: "Neptune",
        diameter: 49.244,
        rotation_period_days: Some(0.67),
        color: [0.30, 0.42, 0.85],
        texture: None,
    },
    // A 250 km comparison sphere, for scale against the planets.
    Body {
        name: "Reference",
        diameter: 0.25,
        rotation_period_days: None,
        color: [0.90, 0.30, 0.30],
        texture: None,
    },
];

/// Look up a catalog entry by name, returning its index and record.
pub fn find_body(name: &str) -> Result<(usize, &'static Body), CatalogError> {
    CATALOG
        .iter()
        .enumerate()
        .find(|(_, b)| b.name == name)
        .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))
}
