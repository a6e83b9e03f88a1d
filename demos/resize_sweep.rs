//! Resize Sweep Demo
//!
//! Walks a set of viewport widths across the gallery breakpoints,
//! planning each frame through the one-slot plan cache. Every width is
//! planned twice to show the cache absorbing the redundant call a
//! debounced resize handler would otherwise pay for.
//!
//! ```bash
//! cargo run --example resize_sweep
//! ```

use masonry_grid::{ALL_CATEGORY, Breakpoint, FrameMetrics, MasonryLayout, PlanCache, TileCatalog};

const GAP: f32 = 10.0;

fn main() {
    let catalog = TileCatalog::fallback();
    let tiles = catalog.filter(ALL_CATEGORY);
    let mut cache = PlanCache::new();

    println!("{:>8}  {:<8}  {:>4}  {:>4}  {:>8}  {:>7}", "width", "break", "cols", "rows", "height", "dropped");

    for width in [360u32, 768, 769, 1024, 1200, 1201, 1440] {
        let breakpoint = Breakpoint::for_width(width);
        let layout = MasonryLayout::new(breakpoint.columns());
        let metrics = FrameMetrics::new(width as f32, GAP, breakpoint.columns());

        for _ in 0..2 {
            let plan = cache.plan(&tiles, &layout, &metrics);
            let rows = plan
                .frames
                .iter()
                .map(|frame| frame.placement.row_end())
                .max()
                .unwrap_or(0);
            println!(
                "{:>8}  {:<8}  {:>4}  {:>4}  {:>8.1}  {:>7}",
                width,
                format!("{breakpoint:?}"),
                breakpoint.columns(),
                rows,
                plan.content_height,
                plan.dropped
            );
        }
    }

    println!(
        "\nplan cache: {} misses, {} hits (one solve per distinct width)",
        cache.misses(),
        cache.hits()
    );
}
