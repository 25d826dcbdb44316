/// Bold syntax `**text**`. Inner text may not contain `*`, so same-type
/// nesting is unsupported by design.
pub struct BoldSyntax;

impl BoldSyntax {
    pub const MARKER: &'static [u8; 2] = b"**";
}

/// Italic syntax `*text*`. Inner text may not contain `*`.
///
/// Bold is always tried first, so a `**` run never opens an italic span.
pub struct ItalicSyntax;

impl ItalicSyntax {
    pub const MARKER: u8 = b'*';
}
