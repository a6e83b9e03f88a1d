//! Error module orchestrator.
//!
//! Public error types live in `types`; downstream code imports them from
//! the crate root re-exports.

mod types;

pub use types::{GalleryError, Result};
