//! Argument tokenizer.
//!
//! [`ArgumentCursor`] scans a message buffer by code point. It keeps the
//! current index and one saved position (the mark), so the most recent read
//! can be undone once.

use super::ArgumentError;

/// Opening quote glyphs paired with their closing glyph.
pub const QUOTES: [(char, char); 18] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{2018}', '\u{2019}'),
    ('\u{201A}', '\u{201B}'),
    ('\u{201C}', '\u{201D}'),
    ('\u{201E}', '\u{201F}'),
    ('\u{2E42}', '\u{2E42}'),
    ('\u{300C}', '\u{300D}'),
    ('\u{300E}', '\u{300F}'),
    ('\u{301D}', '\u{301E}'),
    ('\u{FE41}', '\u{FE42}'),
    ('\u{FE43}', '\u{FE44}'),
    ('\u{FF02}', '\u{FF02}'),
    ('\u{FF62}', '\u{FF63}'),
    ('\u{00AB}', '\u{00BB}'),
    ('\u{2039}', '\u{203A}'),
    ('\u{300A}', '\u{300B}'),
    ('\u{3008}', '\u{3009}'),
];

/// Returns the closing glyph for `open`, if it opens a quoted word.
#[must_use]
pub fn closing_quote(open: char) -> Option<char> {
    QUOTES
        .iter()
        .find(|(candidate, _)| *candidate == open)
        .map(|(_, close)| *close)
}

/// Cursor over the text of a prefix invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentCursor {
    buffer: Vec<char>,
    index: usize,
    mark: usize,
}

impl ArgumentCursor {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::starting_at(text, 0)
    }

    /// Creates a cursor positioned `offset` code points into `text`.
    ///
    /// The offset is clamped to the buffer length.
    #[must_use]
    pub fn starting_at(text: &str, offset: usize) -> Self {
        let buffer: Vec<char> = text.chars().collect();
        let index = offset.min(buffer.len());
        Self {
            buffer,
            index,
            mark: 0,
        }
    }

    /// Current position in code points.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Position restored by [`Self::undo`].
    #[must_use]
    pub const fn mark(&self) -> usize {
        self.mark
    }

    /// Returns whether the cursor is at the end of the buffer.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.index >= self.buffer.len()
    }

    /// Moves the cursor, recording the old position as the mark.
    pub fn seek(&mut self, index: usize) {
        self.mark = self.index;
        self.index = index.min(self.buffer.len());
    }

    /// Restores the cursor to the mark.
    ///
    /// The position being left becomes the new mark.
    pub fn undo(&mut self) {
        self.seek(self.mark);
    }

    /// Skips consecutive whitespace.
    ///
    /// Leaves the index untouched when the current character is not
    /// whitespace. The mark is set to the position before the skip.
    pub fn skip_whitespace(&mut self) {
        let start = self.index;
        while self.current().is_some_and(char::is_whitespace) {
            self.index += 1;
        }
        self.mark = start;
    }

    /// Reads the next whitespace-delimited word.
    ///
    /// Returns an empty string at the end of the buffer.
    pub fn next_word(&mut self) -> String {
        self.skip_whitespace();
        let start = self.index;
        while self.current().is_some_and(|c| !c.is_whitespace()) {
            self.index += 1;
        }
        self.mark = start;
        self.collect(start, self.index)
    }

    /// Reads the next word, honouring quotes.
    ///
    /// A word starting with an opening quote glyph runs to the paired closing
    /// glyph that is not escaped with a backslash. The escape sequence for the
    /// closing glyph is unescaped in the returned text.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::UnterminatedQuote`] when the buffer ends
    /// before the closing glyph, and
    /// [`ArgumentError::ExpectedWhitespaceAfterQuote`] when the closing glyph
    /// is directly followed by a non-whitespace character.
    pub fn next_quoted_word(&mut self) -> Result<String, ArgumentError> {
        self.skip_whitespace();
        let start = self.index;
        let Some(close) = self.current().and_then(closing_quote) else {
            return Ok(self.next_word());
        };

        let mut position = start + 1;
        let end = loop {
            match self.buffer.get(position) {
                None => return Err(ArgumentError::UnterminatedQuote { position: start }),
                Some(&c) if c == close && !self.is_escaped(position) => break position,
                Some(_) => position += 1,
            }
        };

        let after = end + 1;
        if self.buffer.get(after).is_some_and(|c| !c.is_whitespace()) {
            return Err(ArgumentError::ExpectedWhitespaceAfterQuote { position: after });
        }

        self.index = after;
        self.mark = start;
        let escaped = format!("\\{close}");
        Ok(self
            .collect(start + 1, end)
            .replace(&escaped, &close.to_string()))
    }

    /// Moves to the end of the buffer and returns everything skipped.
    pub fn read_rest(&mut self) -> String {
        let end = self.buffer.len();
        self.seek(end);
        self.collect(self.mark, end)
    }

    fn current(&self) -> Option<char> {
        self.buffer.get(self.index).copied()
    }

    fn is_escaped(&self, position: usize) -> bool {
        position
            .checked_sub(1)
            .and_then(|previous| self.buffer.get(previous))
            .is_some_and(|&c| c == '\\')
    }

    fn collect(&self, start: usize, end: usize) -> String {
        self.buffer
            .get(start..end)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }
}
