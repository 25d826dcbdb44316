//! # Inline Markup
//!
//! Cursor-based parsing of the four inline markup syntaxes embedded in
//! stored content strings:
//!
//! - link: `[text](url)`
//! - color span: `[text]{color}`
//! - bold: `**text**`
//! - italic: `*text*`
//!
//! ## Precedence
//!
//! At each scan position the syntaxes are tried in the fixed order
//! link → color → bold → italic, and captured inner text is parsed
//! recursively, so `[**text**](url)` is a link containing a bold span while
//! `**[text](url)**` is a bold span containing a link.
//!
//! ## Fail-soft
//!
//! Parsing is total: unterminated or malformed markers degrade to literal
//! text and no input ever produces an error.
//!
//! ## Modules
//!
//! - **`fragment`**: `Fragment` output tree (Text, Link, ColorSpan, Bold, Italic)
//! - **`kinds`**: syntax types owning their delimiter constants
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with save/restore
//! - **`parser`**: `parse_markup()` entry point with `try_parse_*` helpers

pub mod cursor;
pub mod fragment;
pub mod kinds;
pub mod parser;

pub use fragment::Fragment;
pub use parser::parse_markup;

use crate::content::Block;
use crate::locale::Language;

/// Resolve a block's markup source for the active language and parse it.
///
/// Returns `None` for block kinds that carry no markup source (images,
/// grids, videos, ...). The `link_color` hint is carried onto any link
/// fragments for the renderer's fallback-color rule.
pub fn fragments_for_block(
    block: &Block,
    lang: Language,
    link_color: Option<&str>,
) -> Option<Vec<Fragment>> {
    block
        .markup_source()
        .map(|content| parse_markup(content.resolve(lang), link_color))
}
