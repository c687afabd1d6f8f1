use super::*;
use crate::error::GridError;
use crate::segments::{RawSegment, Segment};
use crate::types::{Axis, Canvas, Orientation};

fn raw(segment: Segment) -> RawSegment {
    let axis = segment.orientation.fixed_axis();
    RawSegment {
        segment,
        axis,
        cluster: 0,
        support: 2,
    }
}

#[test]
fn border_only_arrangement_is_closed() {
    let arrangement = Arrangement::with_border(Canvas::new(100, 80));
    assert_eq!(arrangement.border_count(), 4);
    assert_eq!(arrangement.internal_segments().count(), 0);
    assert!(arrangement.is_closed());
    assert_eq!(arrangement.coordinates(Axis::X), vec![0.0, 100.0]);
    assert_eq!(arrangement.coordinates(Axis::Y), vec![0.0, 80.0]);
}

#[test]
fn vertical_snaps_to_border_edges() {
    let canvas = Canvas::new(100, 100);
    let arrangement =
        build_arrangement(canvas, vec![raw(Segment::vertical(40.0, 10.0, 90.0))]).unwrap();
    assert_eq!(arrangement.vertical.len(), 3);
    assert_eq!(arrangement.horizontal.len(), 2);
    let internal = arrangement.vertical[2];
    assert_eq!(internal, Segment::vertical(40.0, 0.0, 100.0));
    assert!(arrangement.is_closed());
}

#[test]
fn shorter_segment_snaps_to_longer_one() {
    let canvas = Canvas::new(100, 100);
    let arrangement = build_arrangement(
        canvas,
        vec![
            // Shorter, listed first: must still be placed second.
            raw(Segment::horizontal(30.0, 45.0, 95.0)),
            raw(Segment::vertical(40.0, 5.0, 95.0)),
        ],
    )
    .unwrap();
    assert_eq!(arrangement.vertical[2], Segment::vertical(40.0, 0.0, 100.0));
    // x=45 is nearest to the line at x=40; x=95 to the border at x=100.
    assert_eq!(arrangement.horizontal[2], Segment::horizontal(30.0, 40.0, 100.0));
    assert!(arrangement.is_closed());
}

#[test]
fn second_endpoint_never_reuses_first_line() {
    let canvas = Canvas::new(100, 100);
    let mut builder = ArrangementBuilder::new(canvas);
    builder.insert(&Segment::vertical(50.0, 0.0, 100.0)).unwrap();
    // Both endpoints are closest to x=50; the second must move elsewhere.
    let snapped = builder.insert(&Segment::horizontal(20.0, 49.0, 52.0)).unwrap();
    assert_eq!(snapped.p1.x, 50.0);
    assert_eq!(snapped.p2.x, 100.0);
    assert!(snapped.length() > 0.0);
}

#[test]
fn ties_resolve_to_first_inserted_line() {
    let canvas = Canvas::new(100, 100);
    let mut builder = ArrangementBuilder::new(canvas);
    builder.insert(&Segment::vertical(30.0, 0.0, 100.0)).unwrap();
    builder.insert(&Segment::vertical(50.0, 0.0, 100.0)).unwrap();
    // x1 = 40 is equidistant from 30 and 50: 30 was inserted first.
    let snapped = builder.insert(&Segment::horizontal(60.0, 40.0, 90.0)).unwrap();
    assert_eq!(snapped.p1.x, 30.0);
    assert_eq!(snapped.p2.x, 100.0);
}

#[test]
fn only_crossing_lines_are_candidates() {
    let canvas = Canvas::new(100, 100);
    let mut builder = ArrangementBuilder::new(canvas);
    // Vertical at x=45 covering only y in [0, 50].
    builder.insert(&Segment::horizontal(50.0, 0.0, 100.0)).unwrap();
    builder.insert(&Segment::vertical(45.0, 10.0, 40.0)).unwrap();
    assert_eq!(builder.arrangement().vertical[2], Segment::vertical(45.0, 0.0, 50.0));
    // y=80 does not cross x=45, so x1=44 snaps to the left border.
    let snapped = builder.insert(&Segment::horizontal(80.0, 44.0, 60.0)).unwrap();
    assert_eq!(snapped.p1.x, 0.0);
    assert_eq!(snapped.p2.x, 100.0);
}

#[test]
fn rebuilding_is_bit_identical() {
    let canvas = Canvas::new(120, 90);
    let input = vec![
        raw(Segment::vertical(33.0, 8.0, 70.5)),
        raw(Segment::horizontal(44.25, 10.0, 100.0)),
        raw(Segment::vertical(90.0, 50.0, 88.0)),
        raw(Segment::horizontal(70.0, 35.0, 92.0)),
        raw(Segment::vertical(60.0, 44.0, 71.0)),
    ];
    let a = build_arrangement(canvas, input.clone()).unwrap();
    let b = build_arrangement(canvas, input).unwrap();
    assert_eq!(a, b);
    assert!(a.is_closed());
    for seg in a.segments() {
        assert!(seg.length() > 0.0, "zero-length segment {seg:?}");
    }
}

#[test]
fn equal_lengths_keep_insertion_order() {
    let mut input = vec![
        raw(Segment::vertical(10.0, 0.0, 20.0)),
        raw(Segment::horizontal(10.0, 0.0, 20.0)),
        raw(Segment::vertical(50.0, 0.0, 40.0)),
    ];
    order_by_length(&mut input);
    assert_eq!(input[0].segment, Segment::vertical(50.0, 0.0, 40.0));
    assert_eq!(input[1].segment, Segment::vertical(10.0, 0.0, 20.0));
    assert_eq!(input[2].segment, Segment::horizontal(10.0, 0.0, 20.0));
}

#[test]
fn segment_without_crossing_lines_is_rejected_untouched() {
    let canvas = Canvas::new(100, 100);
    let mut builder = ArrangementBuilder::new(canvas);
    builder.insert(&Segment::vertical(40.0, 10.0, 90.0)).unwrap();
    let before = builder.arrangement().clone();

    let err = builder
        .insert(&Segment::horizontal(150.0, 10.0, 20.0))
        .unwrap_err();
    assert_eq!(
        err,
        GridError::ArrangementInvariantViolation {
            orientation: Orientation::Horizontal,
            coordinate: 150.0,
            reason: "no crossing line for first endpoint",
        }
    );
    assert_eq!(builder.arrangement(), &before);
}

#[test]
fn single_crossing_coordinate_cannot_close_a_segment() {
    // Zero-width canvas: both vertical borders sit at x = 0.
    let mut builder = ArrangementBuilder::new(Canvas::new(0, 100));
    let before = builder.arrangement().clone();
    let err = builder
        .insert(&Segment::horizontal(50.0, 0.0, 0.0))
        .unwrap_err();
    assert!(
        matches!(
            err,
            GridError::ArrangementInvariantViolation {
                reason: "no second crossing line",
                ..
            }
        ),
        "{err:?}"
    );
    assert_eq!(builder.arrangement(), &before);
}

#[test]
fn one_failed_snap_aborts_the_build() {
    let canvas = Canvas::new(100, 100);
    let err = build_arrangement(
        canvas,
        vec![
            raw(Segment::vertical(40.0, 10.0, 90.0)),
            raw(Segment::horizontal(150.0, 10.0, 20.0)),
            raw(Segment::vertical(70.0, 5.0, 60.0)),
        ],
    )
    .unwrap_err();
    assert!(
        matches!(err, GridError::ArrangementInvariantViolation { coordinate, .. } if coordinate == 150.0),
        "{err:?}"
    );
}

#[test]
fn snapping_presorted_input_matches_full_build() {
    let canvas = Canvas::new(120, 90);
    let mut input = vec![
        raw(Segment::horizontal(44.0, 10.0, 100.0)),
        raw(Segment::vertical(33.0, 8.0, 70.0)),
        raw(Segment::vertical(90.0, 50.0, 88.0)),
    ];
    let full = build_arrangement(canvas, input.clone()).unwrap();
    order_by_length(&mut input);
    assert_eq!(snap_in_order(canvas, &input).unwrap(), full);
}
