use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::block::Block;
use crate::locale::Localized;

/// One portfolio entry: an ordered block sequence plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: Localized<String>,
    #[serde(default)]
    pub category: Localized<String>,
    /// Hidden posts stay in the store but are excluded from listings.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Custom ordering key; listings sort ascending on it.
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

fn default_visible() -> bool {
    true
}

impl Post {
    /// Create an empty visible post with a freshly minted id.
    pub fn new(title: Localized<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            category: Localized::default(),
            visible: true,
            sort_order: 0,
            background: Background::default(),
            blocks: Vec::new(),
        }
    }
}

/// Layered page background: a solid color, an optional image layer, and
/// independent text/card color overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BackgroundImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_color: Option<String>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            image: None,
            text_color: None,
            card_color: None,
        }
    }
}

/// The image layer of a [`Background`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url: String,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_blend_mode")]
    pub blend_mode: String,
    #[serde(default = "default_fill_mode")]
    pub fill_mode: String,
    /// Explicit CSS size; fill mode alone decides when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_blend_mode() -> String {
    "normal".to_string()
}

fn default_fill_mode() -> String {
    "cover".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlockBody;
    use crate::locale::Language;

    #[test]
    fn new_post_is_visible_and_empty() {
        let post = Post::new("Proyecto".into());
        assert!(post.visible);
        assert!(post.blocks.is_empty());
        assert_eq!(post.sort_order, 0);
        assert_eq!(post.title.resolve(Language::Primary), "Proyecto");
    }

    #[test]
    fn block_order_is_display_order() {
        let mut post = Post::new("Proyecto".into());
        post.blocks.push(Block::new(BlockBody::Header {
            content: "titulo".into(),
        }));
        post.blocks.push(Block::new(BlockBody::Text {
            content: "cuerpo".into(),
        }));

        let kinds: Vec<_> = post
            .blocks
            .iter()
            .map(|b| match b.body {
                BlockBody::Header { .. } => "header",
                BlockBody::Text { .. } => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["header", "text"]);
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let json = r#"{"id":"p1","title":{"primary":"Hola"}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.visible);
        assert_eq!(post.background.color, "#ffffff");
        assert!(post.background.image.is_none());
        assert!(post.blocks.is_empty());
    }

    #[test]
    fn background_image_defaults() {
        let json = r#"{"url":"bg.png"}"#;
        let image: BackgroundImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.opacity, 1.0);
        assert_eq!(image.blend_mode, "normal");
        assert_eq!(image.fill_mode, "cover");
        assert!(image.size.is_none());
    }

    #[test]
    fn post_roundtrips_through_json() {
        let mut post = Post::new(Localized::with_secondary(
            "Hola".to_string(),
            "Hello".to_string(),
        ));
        post.category = "cerámica".into();
        post.sort_order = 7;
        post.background.image = Some(BackgroundImage {
            url: "bg.png".to_string(),
            opacity: 0.4,
            blend_mode: "multiply".to_string(),
            fill_mode: "contain".to_string(),
            size: Some("50%".to_string()),
        });
        post.blocks.push(Block::new(BlockBody::Text {
            content: "un **texto**".into(),
        }));

        let json = serde_json::to_string_pretty(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
