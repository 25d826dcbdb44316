/// One node of the parsed-markup output tree.
///
/// Fragments own their text: they are ephemeral values recomputed on every
/// parse, never persisted. `children` is always a fully-resolved sequence —
/// no further markup scanning is ever applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text that isn't part of any markup construct.
    Text(String),
    /// An activatable reference: `[text](url)`.
    Link {
        url: String,
        /// Caller-supplied styling hint; the renderer falls back to its own
        /// link color when absent.
        color: Option<String>,
        children: Vec<Fragment>,
    },
    /// Text tinted with a color value: `[text]{color}`. The color token is
    /// carried as-is, not validated.
    ColorSpan {
        color: String,
        children: Vec<Fragment>,
    },
    /// Strong emphasis: `**text**`.
    Bold { children: Vec<Fragment> },
    /// Emphasis: `*text*`.
    Italic { children: Vec<Fragment> },
}

impl Fragment {
    /// Plain-text fragment from any string-ish value.
    pub fn text(s: impl Into<String>) -> Self {
        Fragment::Text(s.into())
    }

    /// The nested fragments of a structured node, empty for plain text.
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Text(_) => &[],
            Fragment::Link { children, .. }
            | Fragment::ColorSpan { children, .. }
            | Fragment::Bold { children }
            | Fragment::Italic { children } => children,
        }
    }
}
