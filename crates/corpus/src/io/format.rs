//! Ground-truth corpus representation.
//!
//! A ground-truth file holds one transcription per line: an identifier
//! followed by space-separated tokens. Training only sees the tokens; the
//! identifiers are kept alongside so the merged text can be written back.

use symbpe_core::{Line, Token};

/// A corpus with its line identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Line identifiers, one per line
    pub ids: Vec<String>,
    /// Token sequences, parallel to `ids`
    pub lines: Vec<Line>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, id: impl Into<String>, tokens: Line) {
        self.ids.push(id.into());
        self.lines.push(tokens);
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of tokens across all lines.
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Iterate `(id, tokens)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token])> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.lines.iter().map(Vec::as_slice))
    }

    /// Mutable access to the token lines, for in-place training.
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    /// Render one line as `id tok tok ...`.
    pub fn format_line(id: &str, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(id.len() + tokens.len() * 4);
        out.push_str(id);
        for token in tokens {
            out.push(' ');
            out.push_str(token);
        }
        out
    }
}
