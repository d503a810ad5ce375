//! Character offsets and context windows
//!
//! Tokens carry byte offsets; entities and context radii are counted in
//! characters. `CharIndex` converts between the two for one text.

use crate::shared::models::Token;

/// Byte/char offset conversion over one text
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    /// Byte offset where each char starts
    starts: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            starts: text.char_indices().map(|(b, _)| b).collect(),
        }
    }

    /// Char offset of `byte`, a char boundary such as a regex match edge
    pub fn char_offset(&self, byte: usize) -> usize {
        self.starts.partition_point(|&b| b < byte)
    }

    /// Byte offset of char `offset`, or the text length past the end
    pub fn byte_offset(&self, offset: usize) -> usize {
        self.starts.get(offset).copied().unwrap_or(self.text.len())
    }

    /// Chars `[start, end)` of the text
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let (lo, hi) = (self.byte_offset(start), self.byte_offset(end));
        if lo >= hi {
            return "";
        }
        &self.text[lo..hi]
    }

    /// Chars `[start - radius, end + radius)`, clamped to the text
    pub fn window(&self, start: usize, end: usize, radius: usize) -> &'a str {
        self.slice(start.saturating_sub(radius), end.saturating_add(radius))
    }
}

/// Source text covered by tokens `[first - radius, last + radius]`
///
/// `first..last` is a half-open token index range.
pub fn token_window<'a>(
    text: &'a str,
    tokens: &[Token],
    first: usize,
    last: usize,
    radius: usize,
) -> &'a str {
    if tokens.is_empty() || first >= last {
        return "";
    }
    let lo = first.saturating_sub(radius);
    let hi = (last + radius).min(tokens.len());
    let start = tokens[lo].start;
    let end = tokens[hi - 1].end;
    text.get(start..end).unwrap_or("")
}
