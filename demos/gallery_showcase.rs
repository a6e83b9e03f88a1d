//! Gallery Showcase Demo
//!
//! Solves the built-in fallback catalog on the desktop grid and prints
//! the resulting masonry as a coloured cell map, followed by the pixel
//! plan summary and the metrics log line.
//!
//! ```bash
//! cargo run --example gallery_showcase
//! ```

use crossterm::style::Stylize;
use masonry_grid::{
    ALL_CATEGORY, Breakpoint, FrameMetrics, LayoutMetrics, Logger, MasonryLayout, MemorySink,
    Orientation, TileCatalog,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = TileCatalog::fallback();
    let breakpoint = Breakpoint::Desktop;
    let layout = MasonryLayout::new(breakpoint.columns());

    let tiles = catalog.filter(ALL_CATEGORY);
    let report = layout.solve(&tiles);

    println!(
        "{} tiles in {} categories -> {} columns, {} rows, {} dropped\n",
        catalog.len(),
        catalog.categories().len(),
        layout.columns(),
        report.rows,
        report.dropped.len()
    );

    // Cell map: one line per grid row, one slot per column.
    let columns = layout.columns() as usize;
    let mut cells = vec![vec![None; columns]; report.rows as usize];
    for placement in &report.placements {
        for (col, row) in placement.cells() {
            cells[row as usize][col as usize] = Some(placement.tile_index);
        }
    }

    for row in &cells {
        for slot in row {
            match slot {
                Some(index) => {
                    let label = format!("[{:>2}]", tiles[*index].id);
                    match tiles[*index].orientation() {
                        Some(Orientation::Wide) => print!("{}", label.cyan()),
                        Some(Orientation::Tall) => print!("{}", label.magenta()),
                        None => print!("{}", label.red()),
                    }
                }
                None => print!("{}", " .. ".dark_grey()),
            }
        }
        println!();
    }

    let metrics_px = FrameMetrics::default();
    let plan = metrics_px.plan(&report);
    println!(
        "\npixel plan: {} frames, content height {:.1}px (column width {:.1}px)",
        plan.frames.len(),
        plan.content_height,
        metrics_px.column_width()
    );

    let mut metrics = LayoutMetrics::new();
    metrics.record_solve(&report);

    let sink = MemorySink::new();
    let logger = Logger::new(sink.clone());
    logger.log_event(metrics.snapshot().to_log_event("gallery.showcase"))?;
    for event in sink.drain() {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}
