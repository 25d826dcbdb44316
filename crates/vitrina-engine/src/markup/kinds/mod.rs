//! # Markup Kinds
//!
//! Syntax types that own their delimiter constants, so the parser calls
//! named constants instead of hardcoding `[`, `{` or `*`.
//!
//! ## Types
//!
//! - **`LinkSyntax`**: `[text](url)`
//! - **`ColorSpanSyntax`**: `[text]{color}`
//! - **`BoldSyntax`**: `**text**`
//! - **`ItalicSyntax`**: `*text*`
//!
//! Links and color spans share the bracketed-text prefix; each type still
//! owns its full delimiter set because the trailing delimiter is what tells
//! them apart.

pub mod color_span;
pub mod emphasis;
pub mod link;

pub use color_span::ColorSpanSyntax;
pub use emphasis::{BoldSyntax, ItalicSyntax};
pub use link::LinkSyntax;
