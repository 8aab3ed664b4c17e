pub mod camera;
pub mod catalog;
pub mod constants;
pub mod layout;
pub mod scene;
pub mod selection;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use layout::*;
pub use scene::*;
pub use selection::*;
