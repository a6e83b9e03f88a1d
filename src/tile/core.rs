use serde::{Deserialize, Serialize};

/// Orientation of a gallery tile within the masonry grid.
///
/// A wide (16:9) tile claims two columns and one row; a tall (9:16) tile
/// claims one column and two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Wide,
    Tall,
}

impl Orientation {
    /// Format tag used by the content store for wide tiles.
    pub const WIDE_TAG: &'static str = "16-9";
    /// Format tag used by the content store for tall tiles.
    pub const TALL_TAG: &'static str = "9-16";

    /// Parse a raw format tag. Returns `None` for anything outside the
    /// two recognised tags; callers report those instead of coercing.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            Self::WIDE_TAG => Some(Self::Wide),
            Self::TALL_TAG => Some(Self::Tall),
            _ => None,
        }
    }

    /// Derive an orientation from pixel dimensions. Anything wider than
    /// it is high counts as wide; square falls through to tall.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Self::Wide
        } else {
            Self::Tall
        }
    }

    pub fn column_span(self) -> u16 {
        match self {
            Self::Wide => 2,
            Self::Tall => 1,
        }
    }

    pub fn row_span(self) -> u16 {
        match self {
            Self::Wide => 1,
            Self::Tall => 2,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Wide => Self::WIDE_TAG,
            Self::Tall => Self::TALL_TAG,
        }
    }
}

/// A portfolio tile as it arrives from the content store.
///
/// Field names mirror the store's row shape so a catalog payload
/// deserialises without a mapping layer. Everything beyond `format`,
/// `width` and `height` is opaque display metadata carried through for
/// the rendering consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "image_url")]
    pub image: String,
    #[serde(rename = "video_url", default)]
    pub video: Option<String>,
    pub category: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
}

impl Tile {
    pub fn new(
        id: u64,
        image: impl Into<String>,
        category: impl Into<String>,
        orientation: Orientation,
    ) -> Self {
        Self {
            id,
            title: None,
            description: None,
            image: image.into(),
            video: None,
            category: category.into(),
            width: None,
            height: None,
            format: Some(orientation.tag().to_string()),
        }
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video = Some(url.into());
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Resolve the tile's orientation.
    ///
    /// An explicit format tag wins; with no tag the aspect ratio decides;
    /// with neither the tile defaults to tall. A tag that is present but
    /// unrecognised yields `None`; the placer reports those as dropped
    /// rather than guessing.
    pub fn orientation(&self) -> Option<Orientation> {
        if let Some(tag) = &self.format {
            return Orientation::parse(tag);
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            if width > 0 && height > 0 {
                return Some(Orientation::from_dimensions(width, height));
            }
        }
        Some(Orientation::Tall)
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_tile() -> Tile {
        Tile {
            id: 7,
            title: None,
            description: None,
            image: "assets/portfolio/seven.png".into(),
            video: None,
            category: "reach".into(),
            width: None,
            height: None,
            format: None,
        }
    }

    #[test]
    fn parse_recognises_store_tags() {
        assert_eq!(Orientation::parse("16-9"), Some(Orientation::Wide));
        assert_eq!(Orientation::parse("9-16"), Some(Orientation::Tall));
        assert_eq!(Orientation::parse("4-3"), None);
        assert_eq!(Orientation::parse(""), None);
    }

    #[test]
    fn explicit_tag_beats_dimensions() {
        let mut tile = bare_tile().with_dimensions(490, 304);
        tile.format = Some(Orientation::TALL_TAG.into());
        assert_eq!(tile.orientation(), Some(Orientation::Tall));
    }

    #[test]
    fn aspect_ratio_decides_when_untagged() {
        let wide = bare_tile().with_dimensions(490, 304);
        assert_eq!(wide.orientation(), Some(Orientation::Wide));

        let tall = bare_tile().with_dimensions(238, 368);
        assert_eq!(tall.orientation(), Some(Orientation::Tall));

        // Square is not wider than it is high.
        let square = bare_tile().with_dimensions(300, 300);
        assert_eq!(square.orientation(), Some(Orientation::Tall));
    }

    #[test]
    fn missing_everything_defaults_tall() {
        assert_eq!(bare_tile().orientation(), Some(Orientation::Tall));
    }

    #[test]
    fn unknown_tag_is_malformed_not_coerced() {
        let mut tile = bare_tile();
        tile.format = Some("1-1".into());
        assert_eq!(tile.orientation(), None);
    }

    #[test]
    fn deserialises_store_row_shape() {
        let row = r#"{
            "id": 3,
            "title": "Launch teaser",
            "image_url": "https://cdn.example/store/3.png",
            "video_url": "https://cdn.example/store/3.mp4",
            "category": "ads",
            "width": 490,
            "height": 304
        }"#;
        let tile: Tile = serde_json::from_str(row).unwrap();
        assert_eq!(tile.id, 3);
        assert!(tile.has_video());
        assert_eq!(tile.orientation(), Some(Orientation::Wide));
    }
}
