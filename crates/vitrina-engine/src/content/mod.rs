//! # Content Model
//!
//! The block/post schema the CMS stores and the markup engine consumes.
//! Posts hold an ordered block sequence (sequence order is display order);
//! blocks are a tagged union by kind. Instances are created and mutated by
//! the editing layer; during a parse/render cycle they are immutable input.

pub mod block;
pub mod catalog;
pub mod post;

pub use block::{Block, BlockBody, Button};
pub use catalog::Catalog;
pub use post::{Background, BackgroundImage, Post};
