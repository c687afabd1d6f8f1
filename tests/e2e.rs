mod common;

use common::synthetic_edges::{mask_u8, mondrian_layout, vertical_stroke};
use mondrian_grid::{
    Arrangement, Axis, Canvas, CellLocator, EdgePixels, GridBuilder, GridBuilderParams, Point,
    Segment,
};

fn build(canvas: Canvas, pixels: Vec<[u32; 2]>) -> Arrangement {
    let edges = EdgePixels::new(canvas, pixels).expect("valid edge pixels");
    GridBuilder::new(GridBuilderParams::default())
        .build(&edges)
        .expect("arrangement builds")
        .arrangement
}

#[test]
fn vertical_line_snaps_to_top_and_bottom_border() {
    let canvas = Canvas::new(100, 100);
    // A second, short column keeps the x axis clusterable; it collapses to
    // a degenerate cluster.
    let mut pixels = vertical_stroke(40, 10, 90, 1);
    pixels.push([85, 50]);
    let edges = EdgePixels::new(canvas, pixels).unwrap();
    let report = GridBuilder::default().build(&edges).unwrap();
    let arrangement = &report.arrangement;

    let at_40: Vec<&Segment> = arrangement
        .vertical
        .iter()
        .filter(|s| s.coordinate() == 40.0)
        .collect();
    assert_eq!(at_40.len(), 1, "vertical={:?}", arrangement.vertical);
    assert_eq!(at_40[0].extent(), (0.0, 100.0));
    assert_eq!(report.trace.degenerate_clusters_x.len(), 1);
    assert!(arrangement.is_closed());
}

#[test]
fn border_is_always_intact() {
    let canvas = Canvas::new(300, 200);
    let arrangement = build(canvas, mondrian_layout());
    let border = Arrangement::with_border(canvas);
    assert_eq!(arrangement.border_count(), 4);
    assert!(arrangement.border().eq(border.border()));
    assert!(arrangement.is_closed());
    for seg in arrangement.segments() {
        assert!(seg.length() > 0.0, "zero-length segment {seg:?}");
    }
}

#[test]
fn layout_lines_are_recovered() {
    let canvas = Canvas::new(300, 200);
    let arrangement = build(canvas, mondrian_layout());
    let xs = arrangement.coordinates(Axis::X);
    let ys = arrangement.coordinates(Axis::Y);
    for expected in [60.0, 210.0] {
        assert!(
            xs.iter().any(|&x| (x - expected).abs() <= 1.0),
            "missing vertical near {expected}: {xs:?}"
        );
    }
    for expected in [70.0, 150.0] {
        assert!(
            ys.iter().any(|&y| (y - expected).abs() <= 1.0),
            "missing horizontal near {expected}: {ys:?}"
        );
    }
}

#[test]
fn every_cell_contains_its_query() {
    let canvas = Canvas::new(300, 200);
    let arrangement = build(canvas, mondrian_layout());
    let xs = arrangement.coordinates(Axis::X);
    let ys = arrangement.coordinates(Axis::Y);
    let locator = CellLocator::new(&arrangement);
    let points: Vec<Point> = (0..300)
        .step_by(7)
        .flat_map(|x| (0..200).step_by(5).map(move |y| Point::new(x as f32, y as f32)))
        .collect();
    let cells = locator.locate_many(&points).unwrap();
    for (p, cell) in points.iter().zip(&cells) {
        assert!(cell.contains(*p), "p={p:?} cell={cell:?}");
        assert!(xs.contains(&cell.x) && xs.contains(&cell.x2()));
        assert!(ys.contains(&cell.y) && ys.contains(&cell.y2()));
    }
}

#[test]
fn repeated_builds_are_identical() {
    let canvas = Canvas::new(300, 200);
    let a = build(canvas, mondrian_layout());
    let mut shuffled = mondrian_layout();
    shuffled.reverse();
    let b = build(canvas, shuffled);
    assert_eq!(a, b);
}

#[test]
fn mask_round_trip_matches_pixel_list() {
    let canvas = Canvas::new(300, 200);
    let pixels = mondrian_layout();
    let mask = mask_u8(canvas.width, canvas.height, &pixels, 250);
    let from_mask = EdgePixels::from_mask(canvas.width, canvas.height, &mask, 190).unwrap();
    let from_list = EdgePixels::new(canvas, pixels).unwrap();
    assert_eq!(from_mask, from_list);
}

#[test]
fn build_report_serializes() {
    let canvas = Canvas::new(300, 200);
    let edges = EdgePixels::new(canvas, mondrian_layout()).unwrap();
    let report = GridBuilder::default().build(&edges).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["arrangement"]["vertical"].is_array());
    assert!(json["trace"]["clusteringX"]["chosenK"].as_u64().unwrap() >= 1);
    assert!(json["trace"]["timings"]["stages"].as_array().unwrap().len() >= 3);
}
