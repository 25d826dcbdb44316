/// Color span syntax `[text]{color}` with owned delimiter constants.
///
/// The color token is carried to the renderer verbatim (hex code or named
/// color); it is not validated here.
pub struct ColorSpanSyntax;

impl ColorSpanSyntax {
    pub const OPEN_TEXT: u8 = b'[';
    pub const CLOSE_TEXT: u8 = b']';
    pub const OPEN_COLOR: u8 = b'{';
    pub const CLOSE_COLOR: u8 = b'}';
}
