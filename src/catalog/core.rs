use blake3::Hash;

use crate::error::{GalleryError, Result};
use crate::tile::{Orientation, Tile};

/// Pseudo-category that passes every tile through the filter.
pub const ALL_CATEGORY: &str = "all";

/// The tile set backing one gallery, either ingested from the content
/// store's JSON payload or seeded from the built-in fallback list.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a content-store payload (a JSON array of tile rows).
    ///
    /// An empty payload is an error so callers can decide to fall back to
    /// the static list instead of rendering an empty gallery.
    pub fn from_json(payload: &str) -> Result<Self> {
        let tiles: Vec<Tile> = serde_json::from_str(payload)?;
        if tiles.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        Ok(Self { tiles })
    }

    /// Read and parse a payload previously exported to disk.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Static seed catalog used when the content store is unreachable.
    pub fn fallback() -> Self {
        let rows: [(u64, &str, Orientation); 11] = [
            (1, "reach", Orientation::Wide),
            (2, "reach", Orientation::Tall),
            (3, "expert", Orientation::Tall),
            (4, "ads", Orientation::Wide),
            (5, "reach", Orientation::Tall),
            (6, "hr", Orientation::Tall),
            (7, "ads", Orientation::Wide),
            (8, "industry", Orientation::Wide),
            (9, "expert", Orientation::Wide),
            (10, "ads", Orientation::Wide),
            (11, "industry", Orientation::Wide),
        ];
        let tiles = rows
            .into_iter()
            .map(|(id, category, orientation)| {
                let dimensions = match orientation {
                    Orientation::Wide => (490, 304),
                    Orientation::Tall => (238, 368),
                };
                Tile::new(id, format!("assets/portfolio/{id:02}.png"), category, orientation)
                    .with_dimensions(dimensions.0, dimensions.1)
            })
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in the given category, input order preserved. The `all`
    /// category passes everything.
    pub fn filter(&self, category: &str) -> Vec<Tile> {
        self.tiles
            .iter()
            .filter(|tile| category == ALL_CATEGORY || tile.category == category)
            .cloned()
            .collect()
    }

    /// Distinct categories in first-appearance order, for filter chrome.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for tile in &self.tiles {
            if !seen.contains(&tile.category) {
                seen.push(tile.category.clone());
            }
        }
        seen
    }

    pub fn video_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.has_video()).count()
    }

    /// Content hash over the canonical JSON of the tile rows. Two
    /// catalogs with identical rows hash identically, so consumers can
    /// skip work when nothing changed.
    pub fn revision(&self) -> Hash {
        let bytes =
            serde_json::to_vec(&self.tiles).expect("tile rows serialise infallibly");
        blake3::hash(&bytes)
    }
}
