use super::{
    cursor::Cursor,
    fragment::Fragment,
    kinds::{BoldSyntax, ColorSpanSyntax, ItalicSyntax, LinkSyntax},
};

/// Parses a content string into a sequence of [`Fragment`]s.
///
/// # Arguments
/// - `text`: The stored content string, possibly containing markup
/// - `link_color`: Optional styling hint carried onto link fragments
///
/// # Precedence
/// At each position the four syntaxes are tried in the fixed order
/// link → color span → bold → italic, so overlapping delimiters resolve
/// deterministically: `[x](u)` wins over `[x]{c}` interpretation of the same
/// bracket, and a `**` run is never consumed as the start of an italic span.
/// Captured inner text is parsed recursively with the same precedence.
///
/// # Fail-soft
/// Total for any input: unterminated or malformed markers stay literal text
/// and no parse error exists. A non-empty string with no markup yields
/// exactly one `Text` fragment; an empty string yields no fragments.
pub fn parse_markup(text: &str, link_color: Option<&str>) -> Vec<Fragment> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text fragment
    fn flush_text(out: &mut Vec<Fragment>, src: &str, start: usize, end: usize) {
        if end > start {
            out.push(Fragment::Text(src[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        // Try syntaxes in precedence order; failed attempts restore the cursor
        if let Some(node) = try_parse_link(&mut cur, link_color) {
            flush_text(&mut out, text, text_start, start);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        if let Some(node) = try_parse_color_span(&mut cur, link_color) {
            flush_text(&mut out, text, text_start, start);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        if let Some(node) = try_parse_bold(&mut cur, link_color) {
            flush_text(&mut out, text, text_start, start);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        if let Some(node) = try_parse_italic(&mut cur, link_color) {
            flush_text(&mut out, text, text_start, start);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text, text_start, cur.pos());
    out
}

/// Scans up to a closing delimiter, consuming it.
///
/// Returns the inner text, or `None` if the delimiter nests (`nested_open`
/// appears first) or the input ends before closing. The cursor is left wherever
/// scanning stopped; callers restore from their saved copy on `None`.
fn scan_delimited<'a>(cur: &mut Cursor<'a>, close: u8, nested_open: u8) -> Option<&'a str> {
    let start = cur.pos();
    while let Some(b) = cur.peek() {
        if b == close {
            let inner = cur.slice(start, cur.pos());
            cur.bump(); // closing delimiter
            return Some(inner);
        }
        if b == nested_open {
            return None;
        }
        cur.bump();
    }
    None
}

/// Attempts to parse `[text](url)` at the current position.
///
/// Inner text is parsed recursively, so later-precedence markup works inside
/// link text. On failure the cursor is restored.
fn try_parse_link(cur: &mut Cursor<'_>, link_color: Option<&str>) -> Option<Fragment> {
    if cur.peek() != Some(LinkSyntax::OPEN_TEXT) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let Some(inner) = scan_delimited(cur, LinkSyntax::CLOSE_TEXT, LinkSyntax::OPEN_TEXT) else {
        *cur = saved;
        return None;
    };

    if cur.peek() != Some(LinkSyntax::OPEN_URL) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let Some(url) = scan_delimited(cur, LinkSyntax::CLOSE_URL, LinkSyntax::OPEN_URL) else {
        *cur = saved;
        return None;
    };

    Some(Fragment::Link {
        url: url.to_string(),
        color: link_color.map(str::to_string),
        children: parse_markup(inner, link_color),
    })
}

/// Attempts to parse `[text]{color}` at the current position.
///
/// The color token is carried verbatim. On failure the cursor is restored.
fn try_parse_color_span(cur: &mut Cursor<'_>, link_color: Option<&str>) -> Option<Fragment> {
    if cur.peek() != Some(ColorSpanSyntax::OPEN_TEXT) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let Some(inner) = scan_delimited(cur, ColorSpanSyntax::CLOSE_TEXT, ColorSpanSyntax::OPEN_TEXT)
    else {
        *cur = saved;
        return None;
    };

    if cur.peek() != Some(ColorSpanSyntax::OPEN_COLOR) {
        *cur = saved;
        return None;
    }
    cur.bump(); // {
    let Some(color) = scan_delimited(
        cur,
        ColorSpanSyntax::CLOSE_COLOR,
        ColorSpanSyntax::OPEN_COLOR,
    ) else {
        *cur = saved;
        return None;
    };

    Some(Fragment::ColorSpan {
        color: color.to_string(),
        children: parse_markup(inner, link_color),
    })
}

/// Attempts to parse `**text**` at the current position.
///
/// Inner text may not contain `*`, so `**a**b**c**` is two bold spans with a
/// literal `b` between them. On failure the cursor is restored.
fn try_parse_bold(cur: &mut Cursor<'_>, link_color: Option<&str>) -> Option<Fragment> {
    if !cur.starts_with(BoldSyntax::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(BoldSyntax::MARKER.len());
    let start = cur.pos();
    while !cur.eof() && cur.peek() != Some(BoldSyntax::MARKER[0]) {
        cur.bump();
    }
    let inner = cur.slice(start, cur.pos());

    if !cur.starts_with(BoldSyntax::MARKER) {
        // Single star or unterminated, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(BoldSyntax::MARKER.len());

    Some(Fragment::Bold {
        children: parse_markup(inner, link_color),
    })
}

/// Attempts to parse `*text*` at the current position.
///
/// Only reached when the bold attempt failed, so a leading `**` run is never
/// misread as an italic opener. On failure the cursor is restored.
fn try_parse_italic(cur: &mut Cursor<'_>, link_color: Option<&str>) -> Option<Fragment> {
    if cur.peek() != Some(ItalicSyntax::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // *
    let start = cur.pos();
    while !cur.eof() && cur.peek() != Some(ItalicSyntax::MARKER) {
        cur.bump();
    }
    let inner = cur.slice(start, cur.pos());

    if cur.peek() != Some(ItalicSyntax::MARKER) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *

    Some(Fragment::Italic {
        children: parse_markup(inner, link_color),
    })
}
