//! Integration tests for reference resolution
//!
//! Covers the resolution contract end to end: forward and backward
//! references, circle-center chains, cycles, dangling references, and
//! idempotence across repeated resolve cycles.

use sketch_parser::sketch::ast::Point;
use sketch_parser::sketch::pipeline::parse_program;
use sketch_parser::sketch::resolve::{resolve, Drawable, SegmentKind};
use sketch_parser::sketch::scene::Scene;
use rstest::rstest;

fn circle_center(drawable: &Option<Drawable>) -> Point {
    match drawable {
        Some(Drawable::Circle { center, .. }) => center.at,
        other => panic!("expected a resolved circle, got {:?}", other),
    }
}

#[rstest]
#[case("point P 3 4\ncircle C P 2\n", 1)]
#[case("circle C P 2\npoint P 3 4\n", 0)]
fn test_reference_direction_does_not_matter(#[case] source: &str, #[case] circle_idx: usize) {
    let program = parse_program(source);
    let resolution = resolve(&program);
    assert_eq!(circle_center(&resolution.drawables[circle_idx]), Point::new(3, 4));
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_segment_endpoint_via_circle_is_the_center() {
    // C names a circle around P; `segment A C` must end at P's coordinates,
    // not anywhere derived from C's own declaration.
    let program = parse_program(
        "point P 3 4\n\
         point A 0 0\n\
         circle C P 2\n\
         segment A C\n",
    );
    let resolution = resolve(&program);
    match &resolution.drawables[3] {
        Some(Drawable::Segment { from, to, kind }) => {
            assert_eq!(from.at, Point::new(0, 0));
            assert_eq!(to.at, Point::new(3, 4));
            assert_eq!(*kind, SegmentKind::Segment);
        }
        other => panic!("expected a segment, got {:?}", other),
    }
}

#[test]
fn test_chord_with_undeclared_endpoint_not_drawable() {
    let program = parse_program("point X 0 0\npoint Z 1 1\nchord X Y\nchord X Z\n");
    let resolution = resolve(&program);
    assert_eq!(resolution.drawables[2], None);
    assert!(resolution.drawables[3].is_some());
    assert_eq!(resolution.drawable_count(), 3);
    let unresolved: Vec<_> = resolution
        .diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some("unresolved-reference"))
        .collect();
    assert_eq!(unresolved.len(), 1);
    assert!(unresolved[0].message.contains("'Y'"));
}

#[rstest]
#[case::self_cycle("circle C C 2\n")]
#[case::two_step("circle A B 1\ncircle B A 1\n")]
#[case::three_step("circle A B 1\ncircle B C 1\ncircle C A 1\n")]
fn test_cycles_terminate_with_error(#[case] source: &str) {
    let program = parse_program(source);
    let resolution = resolve(&program);
    assert!(resolution.drawables.iter().all(|d| d.is_none()));
    assert!(resolution
        .diagnostics
        .iter()
        .all(|d| d.code.as_deref() == Some("cyclic-reference")));
}

#[test]
fn test_deep_forward_chain() {
    // Every circle's center chains through the next; the point comes last.
    let program = parse_program(
        "circle C1 C2 1\n\
         circle C2 C3 1\n\
         circle C3 P 1\n\
         point P 7 -2\n",
    );
    let resolution = resolve(&program);
    for idx in 0..3 {
        assert_eq!(circle_center(&resolution.drawables[idx]), Point::new(7, -2));
    }
}

#[test]
fn test_resolving_twice_yields_identical_coordinates() {
    let program = parse_program(
        "point P 3 4\n\
         circle C P 2\n\
         circle D C 1\n\
         segment P D\n\
         radius C P\n\
         chord P C\n",
    );
    let first = resolve(&program);
    let second = resolve(&program);
    assert_eq!(first.drawables, second.drawables);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_resolution_does_not_touch_the_symbol_table() {
    let program = parse_program("point P 1 1\ncircle C P 2\nchord P Q\n");
    let before: Vec<(String, usize)> = program
        .symbols
        .iter()
        .map(|(name, idx)| (name.to_string(), idx))
        .collect();
    let _ = resolve(&program);
    let after: Vec<(String, usize)> = program
        .symbols
        .iter()
        .map(|(name, idx)| (name.to_string(), idx))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_unresolvable_statement_leaves_rest_of_scene_intact() {
    let scene = Scene::from_source(
        "point A 0 0\n\
         point B 4 0\n\
         chord A Missing\n\
         segment A B\n",
    );
    assert_eq!(scene.drawables().count(), 3);
    assert!(scene.has_errors());
}
