// Integration tests for the camera framer.

use app_core::{
    compute_camera_config, compute_layout, find_body, Body, Camera, CATALOG,
    DEFAULT_CAMERA_DISTANCE, DEFAULT_FAR, DEFAULT_NEAR,
};

fn body(name: &str) -> &'static Body {
    find_body(name).expect("catalog body").1
}

#[test]
fn empty_scene_uses_documented_defaults() {
    let config = compute_camera_config(&[]);
    assert_eq!(config.distance, DEFAULT_CAMERA_DISTANCE);
    assert_eq!(config.near, DEFAULT_NEAR);
    assert_eq!(config.far, DEFAULT_FAR);
}

#[test]
fn lone_sun_framing() {
    // A single body is placed at the grid center, so its silhouette extent
    // equals its radius: distance = max(695 * 4.0, 695 * 4) = 2780.
    let placements = compute_layout(&[body("Sun")]);
    let config = compute_camera_config(&placements);
    assert!((config.distance - 2780.0).abs() < 1e-2, "{}", config.distance);
    assert!((config.near - 6.95).abs() < 1e-3, "{}", config.near);
    assert_eq!(config.far, 10_000.0);
    assert!(config.near < config.far);
}

#[test]
fn earth_and_moon_framing() {
    let placements = compute_layout(&[body("Earth"), body("Moon")]);
    let config = compute_camera_config(&placements);

    // Earth is the farther silhouette: |x| + radius = 9.5565 + 6.371.
    let max_extent = 9.5565 + 6.371;
    let expected = (max_extent * 1.5_f32).max(6.371 * 4.0);
    assert!((config.distance - expected).abs() < 1e-2, "{}", config.distance);
    assert_eq!(config.near, DEFAULT_NEAR);
    assert_eq!(config.far, DEFAULT_FAR);
}

#[test]
fn tiny_lone_body_keeps_positive_near_plane() {
    let placements = compute_layout(&[body("Reference")]);
    let config = compute_camera_config(&placements);
    assert_eq!(config.near, DEFAULT_NEAR);
    assert_eq!(config.far, DEFAULT_FAR);
    assert!((config.distance - 0.5).abs() < 1e-4);
}

#[test]
fn near_is_below_far_for_all_catalog_prefixes() {
    for k in 0..=CATALOG.len() {
        let bodies: Vec<&Body> = CATALOG.iter().take(k).collect();
        let placements = compute_layout(&bodies);
        let config = compute_camera_config(&placements);
        assert!(config.near > 0.0, "near must stay positive ({k} bodies)");
        assert!(
            config.near < config.far,
            "near {} >= far {} with {k} bodies",
            config.near,
            config.far
        );
        assert!(config.distance > 0.0);
    }
}

#[test]
fn single_body_gets_extra_padding() {
    let lone = compute_camera_config(&compute_layout(&[body("Earth")]));
    // With no second body to anchor scale the padding factor is 4.0.
    assert!((lone.distance - 6.371 * 4.0).abs() < 1e-3);
}

#[test]
fn camera_applies_config_along_fixed_axis() {
    let placements = compute_layout(&[body("Sun")]);
    let config = compute_camera_config(&placements);

    let mut camera = Camera::new(16.0 / 9.0);
    camera.apply(config);
    assert_eq!(camera.eye.x, 0.0);
    assert_eq!(camera.eye.y, 0.0);
    assert_eq!(camera.eye.z, config.distance);
    assert_eq!(camera.znear, config.near);
    assert_eq!(camera.zfar, config.far);

    let vp = camera.view_proj();
    for col in vp.iter() {
        for v in col {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn recomputation_is_idempotent() {
    let placements = compute_layout(&[body("Jupiter"), body("Saturn"), body("Moon")]);
    assert_eq!(
        compute_camera_config(&placements),
        compute_camera_config(&placements)
    );
}
