// Host-side tests for the pure picking functions.
// The crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use app_core::{compute_camera_config, compute_layout, find_body, Camera};
use glam::Vec3;
use input::*;

fn framed_camera(placements: &[app_core::Placement]) -> Camera {
    let mut camera = Camera::new(16.0 / 9.0);
    camera.apply(compute_camera_config(placements));
    camera
}

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = Vec3::new(0.0, 0.0, 5.0);
    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);

    // Ray goes in X, sphere is in Z
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_behind_origin() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere entirely behind the ray
    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn screen_center_ray_points_at_origin() {
    let placements = compute_layout(&[find_body("Earth").unwrap().1]);
    let camera = framed_camera(&placements);

    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, &camera);
    assert_eq!(ro, camera.eye);
    assert!(rd.z < 0.0);
    assert!(rd.x.abs() < 1e-4, "{}", rd.x);
    assert!(rd.y.abs() < 1e-4, "{}", rd.y);
    assert!((rd.length() - 1.0).abs() < 1e-4);
}

#[test]
fn pick_hits_the_body_under_the_cursor() {
    let earth = find_body("Earth").unwrap().1;
    let moon = find_body("Moon").unwrap().1;
    let placements = compute_layout(&[earth, moon]);
    let camera = framed_camera(&placements);

    // Aim straight at each center from the eye.
    for (slot, placement) in placements.iter().enumerate() {
        let rd = (placement.position - camera.eye).normalize();
        assert_eq!(
            pick_placement(&placements, camera.eye, rd),
            Some(slot),
            "expected to pick slot {slot}"
        );
    }

    // Straight ahead passes between the two bodies.
    let rd = (Vec3::ZERO - camera.eye).normalize();
    assert_eq!(pick_placement(&placements, camera.eye, rd), None);
}

#[test]
fn pick_prefers_the_nearest_hit() {
    let placements = vec![
        app_core::Placement {
            position: Vec3::new(0.0, 0.0, -20.0),
            radius: 5.0,
            nudges: 0,
        },
        app_core::Placement {
            position: Vec3::new(0.0, 0.0, -5.0),
            radius: 2.0,
            nudges: 0,
        },
    ];
    // Both spheres sit on the ray; the closer one wins.
    let picked = pick_placement(&placements, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(picked, Some(1));
}
