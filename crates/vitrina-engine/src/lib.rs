pub mod content;
pub mod locale;
pub mod markup;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{Background, BackgroundImage, Block, BlockBody, Button, Catalog, Post};
pub use locale::{Language, Localized};
pub use markup::{Fragment, fragments_for_block, parse_markup};
pub use store::*;
