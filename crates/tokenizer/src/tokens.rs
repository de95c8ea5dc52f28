use std::iter::FusedIterator;

use crate::delimiters::DelimiterSet;

/// Lazy token stream over borrowed text.
///
/// Yields maximal runs of non-delimiter bytes. The cursor only moves forward;
/// there is no reset.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    delims: &'a DelimiterSet,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str, delims: &'a DelimiterSet) -> Self {
        Self {
            text,
            delims,
            pos: 0,
        }
    }

    /// Unscanned tail of the input.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        let len = bytes.len();

        // Skip the delimiter run in front of the next token.
        while self.pos < len && self.delims.contains(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == len {
            return None;
        }

        let start = self.pos;
        while self.pos < len && !self.delims.contains(bytes[self.pos]) {
            self.pos += 1;
        }
        // Non-ASCII bytes are always delimiters, so both cuts sit on char boundaries.
        Some(&self.text[start..self.pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.text.len() - self.pos;
        (0, Some(rest.div_ceil(2)))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Start a fresh token scan over `text`.
pub fn tokenize<'a>(text: &'a str, delims: &'a DelimiterSet) -> Tokens<'a> {
    Tokens::new(text, delims)
}
