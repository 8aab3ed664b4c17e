// Shared layout/camera/interaction tuning constants used by both frontends.

// Layout
pub const SPACING_FACTOR: f32 = 3.0; // grid spacing as a multiple of the largest radius
pub const MIN_CLEARANCE: f32 = 2.0; // required gap between sphere surfaces
pub const NUDGE_EXTRA: f32 = 1.0; // extra distance added to every overlap correction
pub const MAX_NUDGE_ATTEMPTS: u32 = 100; // corrections per body before accepting overlap

// Camera framing
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0; // empty-scene eye distance
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 10_000.0;
pub const SINGLE_BODY_PADDING: f32 = 4.0; // lone bodies need headroom to read as "framed"
pub const MULTI_BODY_PADDING: f32 = 1.5;
pub const DISTANCE_RADIUS_FACTOR: f32 = 4.0; // distance floor relative to the largest radius
pub const NEAR_RADIUS_FACTOR: f32 = 0.01;
pub const FAR_RADIUS_FACTOR: f32 = 10.0;
pub const FOV_Y_DEGREES: f32 = 75.0;

// Rotation speed slider
pub const SPEED_MIN: f32 = 0.000_05;
pub const SPEED_MAX: f32 = 1.0;
pub const SPEED_STEP: f32 = 0.000_01;
pub const SPEED_DEFAULT: f32 = SPEED_MIN;

// The slider value is a per-frame rotation increment at this frame rate;
// scaling the step by dt keeps the visual speed frame-rate independent.
pub const NOMINAL_FRAME_RATE: f32 = 60.0;

// Interaction
pub const HOVER_BRIGHTNESS: f32 = 1.4; // color multiplier for the hovered body
