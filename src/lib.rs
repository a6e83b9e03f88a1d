//! Masonry layout engine for a mixed wide/tall portfolio gallery.
//!
//! The heart of the crate is [`MasonryLayout`]: a pure, deterministic
//! placer that packs 16:9 and 9:16 tiles into a fixed-column grid without
//! overlap, carrying tall-tile occupancy into the next row and retrying
//! deferred tiles in a second pass. Around it sit the tile catalog,
//! viewport breakpoints, pixel frame planning for the rendering layer,
//! and structured logging/metrics. The modules follow the orchestrator
//! pattern: a `mod.rs` re-exporting a private `core`.

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod tile;
pub mod viewport;

pub use catalog::{ALL_CATEGORY, TileCatalog};
pub use error::{GalleryError, Result};
pub use geometry::PixelRect;
pub use layout::{
    DEFAULT_COLUMNS, DropReason, DroppedTile, LayoutReport, MasonryLayout, Placement,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use render::{FrameMetrics, FramePlan, PlacedFrame, PlanCache, REFERENCE_CONTAINER_WIDTH};
pub use tile::{Orientation, Tile};
pub use viewport::Breakpoint;
