//! Render module orchestrator.
//!
//! Pure pixel-space planning for the layout's rendering consumer; no
//! drawing happens here.

mod core;

pub use self::core::{FrameMetrics, FramePlan, PlacedFrame, PlanCache, REFERENCE_CONTAINER_WIDTH};
