/// Link syntax `[text](url)` with owned delimiter constants.
///
/// Neither delimiter pair may nest: the text part may not contain `[` or
/// `]`, the url part may not contain `(` or `)`.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const OPEN_TEXT: u8 = b'[';
    pub const CLOSE_TEXT: u8 = b']';
    pub const OPEN_URL: u8 = b'(';
    pub const CLOSE_URL: u8 = b')';
}
