use crate::filter::SearchText;

pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// A run of text that either matched the search or did not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Plain(&'t str),
    Match(&'t str),
}

impl<'t> Segment<'t> {
    pub fn text(&self) -> &'t str {
        match self {
            Segment::Plain(s) | Segment::Match(s) => *s,
        }
    }
}

/// Split `text` around every case-insensitive occurrence of the search text.
///
/// Concatenating the segments always gives back `text` unchanged.
pub fn segments<'t>(text: &'t str, search: Option<&SearchText>) -> Vec<Segment<'t>> {
    let Some(search) = search else {
        return vec![Segment::Plain(text)];
    };

    let mut out = Vec::new();
    let mut last = 0;
    for (start, end) in search.find_ranges(text) {
        if start > last {
            out.push(Segment::Plain(&text[last..start]));
        }
        out.push(Segment::Match(&text[start..end]));
        last = end;
    }
    if last < text.len() || out.is_empty() {
        out.push(Segment::Plain(&text[last..]));
    }
    out
}

/// Escaped markup for `text` with every match wrapped in a highlight span
pub fn highlight(text: &str, search: Option<&SearchText>) -> String {
    let mut markup = String::with_capacity(text.len());
    for segment in segments(text, search) {
        match segment {
            Segment::Plain(s) => markup.push_str(&escape_html(s)),
            Segment::Match(s) => {
                markup.push_str(HIGHLIGHT_OPEN);
                markup.push_str(&escape_html(s));
                markup.push_str(HIGHLIGHT_CLOSE);
            }
        }
    }
    markup
}

/// Undo [`highlight`]: drop the markers and unescape
pub fn strip_highlights(markup: &str) -> String {
    unescape_html(&markup.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, ""))
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
