//! Tile module orchestrator.
//!
//! The public tile model lives in the private `core` module and is
//! re-exported here.

mod core;

pub use self::core::{Orientation, Tile};
