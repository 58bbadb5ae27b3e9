#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

// --- StrokeStyle ---

#[test]
fn style_new_stores_colour() {
    let style = StrokeStyle::new("red");
    assert_eq!(style.colour, "red");
}

#[test]
fn style_default_is_black() {
    assert_eq!(StrokeStyle::default().colour, "black");
}

// --- PathStore: creation ---

#[test]
fn new_store_is_empty() {
    let store = PathStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn create_path_returns_distinct_ids() {
    let mut store = PathStore::new();
    let a = store.create_path(StrokeStyle::default());
    let b = store.create_path(StrokeStyle::default());
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn create_path_stores_style() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::new("blue"));
    let stroke = store.get(&id).unwrap();
    assert_eq!(stroke.style.colour, "blue");
}

#[test]
fn created_path_starts_empty() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    assert_eq!(store.point_count(&id), 0);
    assert!(store.last_point(&id).is_none());
}

// --- PathStore: points ---

#[test]
fn append_point_grows_path() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    store.append_point(&id, pt(1.0, 2.0));
    store.append_point(&id, pt(3.0, 4.0));
    assert_eq!(store.point_count(&id), 2);
}

#[test]
fn append_point_preserves_order() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    store.append_point(&id, pt(1.0, 2.0));
    store.append_point(&id, pt(3.0, 4.0));
    let stroke = store.get(&id).unwrap();
    assert_eq!(stroke.points, vec![pt(1.0, 2.0), pt(3.0, 4.0)]);
}

#[test]
fn last_point_is_most_recent() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    store.append_point(&id, pt(1.0, 1.0));
    store.append_point(&id, pt(2.0, 2.0));
    assert_eq!(store.last_point(&id), Some(pt(2.0, 2.0)));
}

// --- PathStore: unknown ids ---

#[test]
fn append_to_unknown_id_is_noop() {
    let mut store = PathStore::new();
    store.append_point(&Uuid::new_v4(), pt(1.0, 1.0));
    assert!(store.is_empty());
}

#[test]
fn simplify_unknown_id_is_noop() {
    let mut store = PathStore::new();
    store.simplify(&Uuid::new_v4(), 10.0);
    assert!(store.is_empty());
}

#[test]
fn queries_on_unknown_id_are_empty() {
    let store = PathStore::new();
    let id = Uuid::new_v4();
    assert!(store.last_point(&id).is_none());
    assert_eq!(store.point_count(&id), 0);
    assert!(store.get(&id).is_none());
}

// --- PathStore: iteration ---

#[test]
fn strokes_iterates_in_creation_order() {
    let mut store = PathStore::new();
    let a = store.create_path(StrokeStyle::new("red"));
    let b = store.create_path(StrokeStyle::new("green"));
    let c = store.create_path(StrokeStyle::new("blue"));
    let ids: Vec<PathId> = store.strokes().map(|s| s.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

// --- simplify ---

#[test]
fn simplify_collapses_collinear_points() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    for i in 0..4 {
        store.append_point(&id, pt(f64::from(i), f64::from(i)));
    }
    store.simplify(&id, 0.05);
    let stroke = store.get(&id).unwrap();
    assert_eq!(stroke.points, vec![pt(0.0, 0.0), pt(3.0, 3.0)]);
}

#[test]
fn simplify_keeps_corners() {
    let mut store = PathStore::new();
    let id = store.create_path(StrokeStyle::default());
    for p in [pt(0.0, 0.0), pt(50.0, 0.0), pt(100.0, 0.0), pt(100.0, 50.0), pt(100.0, 100.0)] {
        store.append_point(&id, p);
    }
    store.simplify(&id, 1.0);
    let stroke = store.get(&id).unwrap();
    assert_eq!(stroke.points, vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0)]);
}

// --- rdp_simplify ---

#[test]
fn rdp_passes_through_two_or_fewer_points() {
    assert!(rdp_simplify(&[], 10.0).is_empty());
    assert_eq!(rdp_simplify(&[pt(1.0, 1.0)], 10.0), vec![pt(1.0, 1.0)]);
    assert_eq!(
        rdp_simplify(&[pt(0.0, 0.0), pt(9.0, 9.0)], 10.0),
        vec![pt(0.0, 0.0), pt(9.0, 9.0)]
    );
}

#[test]
fn rdp_drops_small_wiggles() {
    let points = [pt(0.0, 0.0), pt(5.0, 0.5), pt(10.0, 0.0)];
    assert_eq!(rdp_simplify(&points, 10.0), vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
}

#[test]
fn rdp_keeps_points_beyond_tolerance() {
    let points = [pt(0.0, 0.0), pt(5.0, 20.0), pt(10.0, 0.0)];
    assert_eq!(rdp_simplify(&points, 10.0), points.to_vec());
}

#[test]
fn rdp_handles_closed_loops() {
    // First and last point coincide, so the chord is degenerate.
    let points = [pt(0.0, 0.0), pt(5.0, 5.0), pt(0.0, 0.0)];
    assert_eq!(rdp_simplify(&points, 1.0), points.to_vec());
}
