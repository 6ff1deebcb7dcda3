//! End-to-end scenarios across the public API.

use planar::{wire, NumericRange, Point, RangeOptions, Rect, Value};

#[test]
fn intersection_and_containment_scenario() {
    let a = Rect::new(0.0, 0.0, 80.0, 100.0);
    let b = Rect::new(60.0, 20.0, 50.0, 45.0);

    assert!(a.intersects(b));
    let shared = a.intersection(b).expect("rects overlap");
    assert_eq!(shared, Rect::new(60.0, 20.0, 20.0, 45.0));

    // the shared region is inside both
    assert!(a.contains_rect(shared));
    assert!(b.contains_rect(shared));
}

#[test]
fn overlap_without_intersection() {
    // same Y band, disjoint X: one-axis overlap only
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(30.0, 2.0, 10.0, 6.0);

    assert!(a.overlaps(b));
    assert!(!a.intersects(b));
    assert_eq!(a.intersection(b), None);
}

#[test]
fn inverted_range_produces_no_instance() {
    let result = NumericRange::between(6.0, 2.0);
    assert!(result.is_err());
}

#[test]
fn range_iteration_cardinality() {
    let ticks = NumericRange::between(0.0, 10.0).unwrap();
    let values: Vec<f64> = ticks.iter().collect();
    assert_eq!(values.len(), 11);
    assert_eq!(values.first(), Some(&0.0));
    assert_eq!(values.last(), Some(&10.0));
}

#[test]
fn slider_workflow() {
    // a volume slider fed from a text input
    let mut volume = NumericRange::new(RangeOptions {
        min: 0.0,
        max: 11.0,
        step: 0.5,
        ..RangeOptions::default()
    })
    .unwrap();

    volume.set("9.7");
    assert!(volume.is_in_range());

    volume.snap_to_step();
    assert_eq!(volume.value_of(), 9.5);

    // stepping past the end does not clamp on its own
    volume.increment(None);
    volume.increment(None);
    volume.increment(None);
    assert_eq!(volume.value_of(), 11.0);
    volume.increment(None);
    assert_eq!(volume.value_of(), 11.5);
    assert!(!volume.is_in_range());

    volume.clamp();
    assert_eq!(volume.value_of(), 11.0);

    // display picks up the step's precision
    assert_eq!(volume.to_string(), "11.0");

    volume.reset();
    assert!(volume.value().is_unset());
}

#[test]
fn percent_round_trip() {
    for p in [-1.0, 0.0, 0.5, 0.75, 3.0] {
        let r = NumericRange::from_percent(p, -40.0, 60.0).unwrap();
        assert_eq!(r.value_of(), -40.0 + p * 100.0);
    }
}

#[test]
fn multi_thumb_partitioning() {
    // three slider thumbs share one track; each is fenced by its neighbors
    let thumbs = NumericRange::from_values(&[20.0, 40.0, 60.0], 0.0, 100.0).unwrap();

    let mut middle = thumbs[1].clone();
    middle.set(90.0);
    middle.clamp();
    assert_eq!(middle.value_of(), 60.0); // stopped at the right neighbor
}

#[test]
fn pointer_event_to_progress() {
    // shapes as produced by the external collaborators: a bounding-box
    // source for the element, a coordinate source for the event
    let bounds =
        wire::rect_from_json(r#"{"x": 100.0, "y": 100.0, "width": 200.0, "height": 50.0}"#)
            .unwrap();
    let pointer = wire::point_from_json(r#"{"x": 150.0, "y": 125.0}"#).unwrap();

    let rel = pointer.relative_to(bounds, Point::ZERO);
    assert_eq!(rel.offset, Point::new(50.0, 25.0));
    assert_eq!(rel.progress, Point::new(0.25, 0.5));

    // drive a slider from the horizontal progress
    let mut level = NumericRange::new(RangeOptions {
        value: Value::Number(rel.progress.x * 100.0),
        ..RangeOptions::default()
    })
    .unwrap();
    level.snap_to_step();
    assert_eq!(level.value_of(), 25.0);
}

#[test]
fn merged_bounds_contain_member_corners() {
    let rects = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(40.0, -20.0, 5.0, 5.0),
        Rect::new(-8.0, 3.0, 1.0, 90.0),
    ];
    let merged = Rect::merge(&rects);
    for r in rects {
        assert!(merged.contains_rect(r));
    }
}

#[test]
fn pixel_alignment_before_drawing() {
    let raw = Rect::new(10.2, 10.8, 99.7, 49.6);
    let aligned = raw.pixel_align();
    assert_eq!(aligned, Rect::new(10.0, 11.0, 100.0, 49.0));
    // far edges stayed on the grid
    assert_eq!(aligned.max_x(), 110.0);
    assert_eq!(aligned.max_y(), 60.0);
}
