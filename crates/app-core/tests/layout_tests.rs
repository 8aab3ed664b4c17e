// Integration tests for the grid layout engine.

use app_core::{compute_layout, find_body, Body, CATALOG, MAX_NUDGE_ATTEMPTS, MIN_CLEARANCE};

fn body(name: &str) -> &'static Body {
    find_body(name).expect("catalog body").1
}

#[test]
fn empty_input_yields_empty_layout() {
    let placements = compute_layout(&[]);
    assert!(placements.is_empty());
}

#[test]
fn output_preserves_length_and_order() {
    let bodies: Vec<&Body> = CATALOG.iter().collect();
    let placements = compute_layout(&bodies);
    assert_eq!(placements.len(), bodies.len());
    for (b, p) in bodies.iter().zip(placements.iter()) {
        assert!(
            (p.radius - b.radius()).abs() < 1e-6,
            "placement radius out of order for {}",
            b.name
        );
    }
}

#[test]
fn single_body_sits_at_origin() {
    let placements = compute_layout(&[body("Sun")]);
    assert_eq!(placements.len(), 1);
    assert!(placements[0].position.length() < 1e-6);
    assert_eq!(placements[0].nudges, 0);
}

#[test]
fn earth_and_moon_form_symmetric_two_column_row() {
    let earth = body("Earth");
    let moon = body("Moon");
    let placements = compute_layout(&[earth, moon]);

    // spacing = maxRadius * 3 = 6.371 * 3; a 2-column, 1-row grid puts the
    // bodies at +/- spacing/2 on the x axis.
    let half_spacing = 6.371 * 3.0 / 2.0;
    assert!((placements[0].position.x + half_spacing).abs() < 1e-3);
    assert!((placements[1].position.x - half_spacing).abs() < 1e-3);
    assert!(placements[0].position.y.abs() < 1e-3);
    assert!(placements[1].position.y.abs() < 1e-3);
    assert!(placements[0].position.z.abs() < 1e-6);
    assert!(placements[1].position.z.abs() < 1e-6);

    // Wide enough apart that no correction was needed.
    let dist = placements[0].position.distance(placements[1].position);
    assert!(dist >= earth.radius() + moon.radius() + MIN_CLEARANCE);
    assert_eq!(placements[0].nudges, 0);
    assert_eq!(placements[1].nudges, 0);
}

#[test]
fn first_body_is_never_nudged() {
    // Nothing is placed before index 0, so it always keeps its grid cell.
    for k in 1..=CATALOG.len() {
        let bodies: Vec<&Body> = CATALOG.iter().take(k).collect();
        let placements = compute_layout(&bodies);
        assert_eq!(placements[0].nudges, 0, "first of {k} bodies was nudged");
    }
}

#[test]
fn catalog_subsets_are_clear_or_exhausted() {
    // The clearance guarantee is best-effort: every pair must either respect
    // the minimum clearance or involve a body whose nudge budget ran out.
    for k in 1..=CATALOG.len() {
        let bodies: Vec<&Body> = CATALOG.iter().take(k).collect();
        let placements = compute_layout(&bodies);
        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                let a = &placements[i];
                let b = &placements[j];
                let dist = a.position.distance(b.position);
                let required = a.radius + b.radius + MIN_CLEARANCE;
                let exhausted =
                    a.nudges >= MAX_NUDGE_ATTEMPTS || b.nudges >= MAX_NUDGE_ATTEMPTS;
                assert!(
                    dist >= required - 1e-3 || exhausted,
                    "bodies {i} and {j} of {k} overlap without exhausting corrections: \
                     dist {dist}, required {required}"
                );
            }
        }
    }
}

#[test]
fn dense_equal_bodies_stay_clear_or_exhausted() {
    // Tiny equal spheres get a grid pitch far below the required clearance,
    // forcing the correction loop to do real work.
    static PEBBLE: Body = Body {
        name: "Pebble",
        diameter: 0.25,
        rotation_period_days: None,
        color: [0.5, 0.5, 0.5],
        texture: None,
    };
    let bodies: Vec<&Body> = std::iter::repeat(&PEBBLE).take(9).collect();
    let placements = compute_layout(&bodies);
    assert_eq!(placements.len(), 9);

    for p in &placements {
        assert!(p.position.is_finite(), "non-finite position after nudging");
    }
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let a = &placements[i];
            let b = &placements[j];
            let dist = a.position.distance(b.position);
            let required = a.radius + b.radius + MIN_CLEARANCE;
            let exhausted = a.nudges >= MAX_NUDGE_ATTEMPTS || b.nudges >= MAX_NUDGE_ATTEMPTS;
            assert!(
                dist >= required - 1e-3 || exhausted,
                "pebbles {i} and {j}: dist {dist}, required {required}"
            );
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let bodies: Vec<&Body> = CATALOG.iter().collect();
    let first = compute_layout(&bodies);
    let second = compute_layout(&bodies);
    assert_eq!(first, second);
}
