use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Localized;

/// One discrete content unit within a post.
///
/// The id is an opaque string, unique within the owning post's block
/// sequence. No cross-block references exist, so uniqueness is the only
/// integrity the model relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    /// Create a block with a freshly minted id.
    pub fn new(body: BlockBody) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body,
        }
    }

    /// The localized markup source for text-bearing kinds, `None` otherwise.
    pub fn markup_source(&self) -> Option<&Localized<String>> {
        match &self.body {
            BlockBody::Header { content }
            | BlockBody::Text { content }
            | BlockBody::Subtitle { content } => Some(content),
            _ => None,
        }
    }
}

/// Per-kind block payload.
///
/// Textual fields hold plain text in the four inline markup syntaxes; there
/// is no escape sequence for literal `[`, `]`, `{`, `}` or `*` (known
/// limitation — such characters render literally when they don't form a
/// complete construct).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockBody {
    /// Large heading text.
    Header { content: Localized<String> },
    /// Smaller heading text.
    Subtitle { content: Localized<String> },
    /// Body text.
    Text { content: Localized<String> },
    /// A single image.
    Image {
        url: String,
        #[serde(default)]
        alt: Localized<String>,
        #[serde(default)]
        no_border: bool,
        #[serde(default)]
        enlargeable: bool,
        #[serde(default)]
        pixelated: bool,
    },
    /// An image grid with per-item captions parallel to `urls`.
    Grid {
        urls: Vec<String>,
        #[serde(default)]
        captions: Localized<Vec<String>>,
        #[serde(default)]
        show_captions: bool,
        #[serde(default)]
        enlargeable: bool,
    },
    /// A row of external-link buttons.
    Link { buttons: Vec<Button> },
    /// An embedded video.
    Video { url: String },
    /// A 3D model with an optional texture asset.
    Model3d {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        texture_url: Option<String>,
    },
    /// An auto-advancing image carousel.
    Carousel {
        urls: Vec<String>,
        #[serde(default)]
        captions: Localized<Vec<String>>,
        #[serde(default = "default_carousel_delay")]
        delay_ms: u64,
        #[serde(default)]
        show_captions: bool,
    },
}

fn default_carousel_delay() -> u64 {
    3000
}

/// One button of a link block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: Localized<String>,
    pub url: String,
    pub background_color: String,
    pub text_color: String,
    pub hover_color: String,
}
