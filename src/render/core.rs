use blake3::{Hash, Hasher};

use crate::geometry::PixelRect;
use crate::layout::{DEFAULT_COLUMNS, LayoutReport, MasonryLayout, Placement};
use crate::tile::Tile;

/// Container width of the reference desktop gallery.
pub const REFERENCE_CONTAINER_WIDTH: f32 = 1000.0;

const REFERENCE_GAP: f32 = 10.0;

/// A tall tile's height follows the grid unless that deviates from the
/// exact 1:2 aspect height by more than this, in which case the aspect
/// height wins.
const TALL_HEIGHT_TOLERANCE: f32 = 5.0;

/// Pixel-space parameters of one gallery frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    pub container_width: f32,
    pub gap: f32,
    pub columns: u16,
    row_height_override: Option<f32>,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new(REFERENCE_CONTAINER_WIDTH, REFERENCE_GAP, DEFAULT_COLUMNS)
    }
}

impl FrameMetrics {
    pub fn new(container_width: f32, gap: f32, columns: u16) -> Self {
        Self {
            container_width,
            gap,
            columns,
            row_height_override: None,
        }
    }

    /// Pin the row height instead of deriving it from the column width.
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height_override = Some(row_height);
        self
    }

    pub fn column_width(&self) -> f32 {
        let columns = f32::from(self.columns.max(1));
        (self.container_width - self.gap * (columns - 1.0)) / columns
    }

    /// Row height such that a two-row tall tile (plus the gap between its
    /// rows) comes out at exactly twice the column width.
    pub fn row_height(&self) -> f32 {
        self.row_height_override
            .unwrap_or_else(|| self.column_width() - self.gap / 2.0)
    }

    /// Pixel box for one placement.
    pub fn pixel_rect(&self, placement: &Placement) -> PixelRect {
        let column_width = self.column_width();
        let row_height = self.row_height();
        let x = f32::from(placement.column) * (column_width + self.gap);
        let y = placement.row as f32 * (row_height + self.gap);

        let spanned = f32::from(placement.column_span);
        let width = column_width * spanned + self.gap * (spanned - 1.0);

        let rows = f32::from(placement.row_span);
        let grid_height = row_height * rows + self.gap * (rows - 1.0);
        let height = if placement.row_span == 2 {
            let aspect_height = width * 2.0;
            if (aspect_height - grid_height).abs() > TALL_HEIGHT_TOLERANCE {
                aspect_height
            } else {
                grid_height
            }
        } else {
            grid_height
        };

        PixelRect::new(x, y, width, height)
    }

    /// Total content height for a layout spanning `rows` grid rows.
    pub fn content_height(&self, rows: u32) -> f32 {
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.row_height() + (rows - 1) as f32 * self.gap
    }

    /// Pair every placement in a report with its pixel box.
    pub fn plan(&self, report: &LayoutReport) -> FramePlan {
        let frames = report
            .placements
            .iter()
            .map(|placement| PlacedFrame {
                placement: *placement,
                rect: self.pixel_rect(placement),
            })
            .collect();
        FramePlan {
            frames,
            dropped: report.dropped.len(),
            content_height: self.content_height(report.rows),
        }
    }
}

/// One tile's placement together with its pixel box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedFrame {
    pub placement: Placement,
    pub rect: PixelRect,
}

/// Everything the rendering layer needs to lay one frame out.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub frames: Vec<PlacedFrame>,
    pub dropped: usize,
    pub content_height: f32,
}

/// One-slot memo over solve-plus-plan, keyed by a content hash of the
/// tile stream and the frame metrics. Resize storms re-enter with
/// unchanged input far more often than not; a hit skips the whole solve.
#[derive(Debug, Default)]
pub struct PlanCache {
    slot: Option<(Hash, FramePlan)>,
    hits: u64,
    misses: u64,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn plan(
        &mut self,
        tiles: &[Tile],
        layout: &MasonryLayout,
        metrics: &FrameMetrics,
    ) -> &FramePlan {
        let key = Self::key(tiles, layout, metrics);
        let stale = match &self.slot {
            Some((hash, _)) => *hash != key,
            None => true,
        };
        if stale {
            self.misses += 1;
            let plan = metrics.plan(&layout.solve(tiles));
            self.slot = Some((key, plan));
        } else {
            self.hits += 1;
        }
        &self.slot.as_ref().expect("slot was just filled").1
    }

    fn key(tiles: &[Tile], layout: &MasonryLayout, metrics: &FrameMetrics) -> Hash {
        let mut hasher = Hasher::new();
        let rows = serde_json::to_vec(tiles).expect("tile rows serialise infallibly");
        hasher.update(&rows);
        hasher.update(&layout.columns().to_le_bytes());
        hasher.update(&metrics.container_width.to_le_bytes());
        hasher.update(&metrics.gap.to_le_bytes());
        hasher.update(&metrics.columns.to_le_bytes());
        hasher.update(&metrics.row_height().to_le_bytes());
        hasher.finalize()
    }
}
