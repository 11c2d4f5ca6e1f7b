use crate::models::Property;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Compiled size allowed for the escaped search pattern
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    /// Char-by-char lowercase comparison, for text too long to compile
    Folded(Vec<char>),
}

/// Case-insensitive literal search text typed into the search box
#[derive(Debug, Clone)]
pub struct SearchText {
    raw: String,
    matcher: Matcher,
}

impl SearchText {
    /// Compile the search box contents. Empty input means "no search".
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        // Escaped so that "(", "." and friends match themselves
        let matcher = match RegexBuilder::new(&regex::escape(raw))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
        {
            Ok(pattern) => Matcher::Pattern(pattern),
            Err(e) => {
                warn!(
                    "Search text of {} chars not compiled ({}), matching without a regex",
                    raw.chars().count(),
                    e
                );
                Matcher::Folded(raw.chars().collect())
            }
        };

        Some(Self {
            raw: raw.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_ranges(text).next().is_some()
    }

    /// Byte ranges of every non-overlapping occurrence in `text`
    pub fn find_ranges<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = (usize, usize)> + 't> {
        match &self.matcher {
            Matcher::Pattern(pattern) => Box::new(pattern.find_iter(text).map(|m| (m.start(), m.end()))),
            Matcher::Folded(needle) => Box::new(folded_ranges(text, needle).into_iter()),
        }
    }

    /// Location or society contains the search text. A missing society never matches.
    pub fn matches_property(&self, property: &Property) -> bool {
        self.is_match(&property.location)
            || property
                .society
                .as_deref()
                .map_or(false, |society| self.is_match(society))
    }
}

fn same_folded(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn folded_ranges(text: &str, needle: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > text.len() {
        return ranges;
    }

    let mut start = 0;
    while start < text.len() {
        let mut chars = text[start..].char_indices();
        let mut end = None;
        for (i, &n) in needle.iter().enumerate() {
            match chars.next() {
                Some((offset, c)) if same_folded(c, n) => {
                    if i + 1 == needle.len() {
                        end = Some(start + offset + c.len_utf8());
                    }
                }
                _ => break,
            }
        }

        match end {
            Some(end) => {
                ranges.push((start, end));
                start = end;
            }
            None => {
                start += text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}
