//! Scene and Transform Tests
//!
//! Tests for:
//! - Name-to-handle registry (constant-time resolution, uniqueness)
//! - Numbered-suffix assignment on name collisions
//! - Rename and removal bookkeeping
//! - Transform matrix caching and dirty checking

use glam::{Quat, Vec3};

use waypath::scene::{Node, Scene, Transform};

// ============================================================================
// Name registry
// ============================================================================

#[test]
fn names_resolve_to_handles() {
    let mut scene = Scene::new();
    let cube = scene.add_node(Node::new("Cube"));
    let lamp = scene.add_node(Node::new("Lamp"));

    assert_eq!(scene.handle_by_name("Cube"), Some(cube));
    assert_eq!(scene.handle_by_name("Lamp"), Some(lamp));
    assert_eq!(scene.handle_by_name("Missing"), None);
}

#[test]
fn colliding_names_get_numbered_suffixes() {
    let mut scene = Scene::new();
    let first = scene.add_node(Node::new("Cube"));
    let second = scene.add_node(Node::new("Cube"));
    let third = scene.add_node(Node::new("Cube"));

    assert_eq!(scene.get_node(first).unwrap().name(), "Cube");
    assert_eq!(scene.get_node(second).unwrap().name(), "Cube.001");
    assert_eq!(scene.get_node(third).unwrap().name(), "Cube.002");
    assert_eq!(scene.handle_by_name("Cube.002"), Some(third));
}

#[test]
fn empty_names_fall_back_to_a_default() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new(""));
    assert_eq!(scene.get_node(handle).unwrap().name(), "Object");
}

#[test]
fn removal_frees_the_name() {
    let mut scene = Scene::new();
    let first = scene.add_node(Node::new("Cube"));
    scene.remove_node(first);

    assert_eq!(scene.handle_by_name("Cube"), None);
    assert!(scene.is_empty());

    // The freed name is available again, unsuffixed.
    let second = scene.add_node(Node::new("Cube"));
    assert_eq!(scene.get_node(second).unwrap().name(), "Cube");

    // Stale handles fail lookup instead of aliasing the new node.
    assert!(scene.get_node(first).is_none());
}

#[test]
fn rename_updates_the_registry() {
    let mut scene = Scene::new();
    let cube = scene.add_node(Node::new("Cube"));
    let lamp = scene.add_node(Node::new("Lamp"));

    let assigned = scene.rename_node(cube, "Hero").unwrap();
    assert_eq!(assigned, "Hero");
    assert_eq!(scene.handle_by_name("Hero"), Some(cube));
    assert_eq!(scene.handle_by_name("Cube"), None);

    // Renaming onto a taken name collides into a suffix.
    let assigned = scene.rename_node(lamp, "Hero").unwrap();
    assert_eq!(assigned, "Hero.001");
    assert_eq!(scene.handle_by_name("Hero.001"), Some(lamp));

    // Renaming to the current name is a no-op, not a self-collision.
    let assigned = scene.rename_node(cube, "Hero").unwrap();
    assert_eq!(assigned, "Hero");

    // Invalid handles are reported, not suffixed.
    scene.remove_node(cube);
    assert_eq!(scene.rename_node(cube, "Zombie"), None);
}

#[test]
fn nodes_iterates_everything() {
    let mut scene = Scene::new();
    scene.add_node(Node::new("a"));
    scene.add_node(Node::new("b"));
    scene.add_node(Node::new("c"));

    assert_eq!(scene.len(), 3);
    assert_eq!(scene.nodes().count(), 3);
}

// ============================================================================
// Transform dirty checking
// ============================================================================

#[test]
fn matrix_updates_only_when_trs_changes() {
    let mut transform = Transform::new();

    // Fresh transforms force one initial compute.
    assert!(transform.update_matrix());
    assert!(!transform.update_matrix(), "no change, no recompute");

    transform.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(transform.update_matrix());
    assert!(!transform.update_matrix());

    transform.rotation = Quat::from_rotation_y(0.5);
    assert!(transform.update_matrix());

    transform.mark_dirty();
    assert!(transform.update_matrix(), "mark_dirty forces a recompute");
}

#[test]
fn matrix_reflects_position_writes() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("Cube"));

    scene.get_node_mut(handle).unwrap().transform.position = Vec3::new(4.0, 5.0, 6.0);
    scene.update_matrices();

    let matrix = *scene.get_node(handle).unwrap().transform.matrix();
    let translation = Vec3::from(matrix.translation);
    assert!(translation.distance(Vec3::new(4.0, 5.0, 6.0)) < 1e-5);
}
