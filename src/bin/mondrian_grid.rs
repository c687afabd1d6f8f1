use mondrian_grid::config::load_config;
use mondrian_grid::io::{load_edge_mask, write_json_file};
use mondrian_grid::{Arrangement, BuildTrace, Cell, CellLocator, GridBuilder, Point};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let edges = load_edge_mask(&config.input, config.mask_threshold)?;
    let report = GridBuilder::new(config.params)
        .build(&edges)
        .map_err(|e| format!("Failed to build arrangement: {e}"))?;

    let cell = match config.target.map(Point::from) {
        Some(target) => Some(
            CellLocator::new(&report.arrangement)
                .locate(target)
                .map_err(|e| format!("Failed to locate cell of ({}, {}): {e}", target.x, target.y))?,
        ),
        None => None,
    };

    let summary = GridSummary {
        width: edges.canvas().width,
        height: edges.canvas().height,
        edge_pixel_count: edges.len(),
        internal_segment_count: report.arrangement.internal_segments().count(),
        cell,
        arrangement: &report.arrangement,
        trace: config.output.include_trace.then_some(&report.trace),
    };
    write_json_file(&config.output.arrangement_json, &summary)?;

    println!(
        "Built {} internal segments from {} edge pixels ({:.3} ms)",
        summary.internal_segment_count, summary.edge_pixel_count, report.trace.timings.total_ms
    );
    if let Some(cell) = cell {
        println!(
            "Target cell: x={} y={} w={} h={}",
            cell.x, cell.y, cell.width, cell.height
        );
    }
    println!(
        "Saved arrangement to {}",
        config.output.arrangement_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: mondrian_grid <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridSummary<'a> {
    width: u32,
    height: u32,
    edge_pixel_count: usize,
    internal_segment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    cell: Option<Cell>,
    arrangement: &'a Arrangement,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a BuildTrace>,
}
