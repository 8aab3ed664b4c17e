// Tests for the active-selection set: membership-only semantics.

use app_core::Selection;

#[test]
fn toggle_flips_membership() {
    let mut selection = Selection::new();
    assert!(selection.is_empty());

    assert!(selection.toggle("Earth"));
    assert!(selection.contains("Earth"));
    assert_eq!(selection.len(), 1);

    assert!(!selection.toggle("Earth"));
    assert!(!selection.contains("Earth"));
    assert!(selection.is_empty());
}

#[test]
fn active_bodies_follow_catalog_order() {
    let mut selection = Selection::new();
    // Toggle in reverse catalog order; the derived list must not care.
    selection.toggle("Neptune");
    selection.toggle("Moon");
    selection.toggle("Sun");

    let names: Vec<&str> = selection.active_bodies().iter().map(|(_, b)| b.name).collect();
    assert_eq!(names, vec!["Sun", "Moon", "Neptune"]);
}

#[test]
fn derived_state_depends_on_membership_only() {
    let mut a = Selection::new();
    a.toggle("Earth");
    a.toggle("Moon");
    a.toggle("Mars");

    let mut b = Selection::new();
    b.toggle("Mars");
    b.toggle("Earth");
    b.toggle("Jupiter");
    b.toggle("Moon");
    b.toggle("Jupiter"); // off again

    let names_a: Vec<&str> = a.active_bodies().iter().map(|(_, b)| b.name).collect();
    let names_b: Vec<&str> = b.active_bodies().iter().map(|(_, b)| b.name).collect();
    assert_eq!(names_a, names_b);
}

#[test]
fn active_bodies_carry_catalog_indices() {
    let mut selection = Selection::new();
    selection.toggle("Sun");
    let active = selection.active_bodies();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0, 0);
    assert_eq!(active[0].1.name, "Sun");
}
