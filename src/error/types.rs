use thiserror::Error;

/// Unified result type for the gallery layout crate.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Errors surfaced by the fallible edges of the crate.
///
/// The tile placer itself never fails; malformed or unplaceable tiles are
/// reported through `LayoutReport::dropped` instead. Only catalog
/// ingestion and sink I/O can error.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("catalog payload could not be parsed: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("catalog payload contained no tiles")]
    EmptyCatalog,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
