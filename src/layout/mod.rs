//! Layout module orchestrator.
//!
//! The masonry solver lives in the private `core` module; `occupancy`
//! holds its scratch state. Downstream code imports everything from here.

mod core;
mod occupancy;

pub use self::core::{
    DEFAULT_COLUMNS, DropReason, DroppedTile, LayoutReport, MasonryLayout, Placement,
};
