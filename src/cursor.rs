use crate::error::CursorError;
use std::iter;

/// A position in an immutable input string
///
/// The cursor holds the whole input together with a byte offset that always
/// sits on a `char` boundary. It is `Copy`, so taking a snapshot is a copy of
/// two words and never copies the input itself. Parsers receive it as
/// `&mut Cursor` and advance it in place past whatever they consume.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
}

/// Saved cursor state that can be restored after a failed attempt
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// The full input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Byte offset of the cursor into [`source`](Self::source)
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed part of the input
    pub fn remaining(&self) -> &'code str {
        self.source.get(self.offset..).unwrap_or_default()
    }

    /// Check if all input has been consumed
    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The next character, if any, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Get the character at the current position
    ///
    /// Returns an error if the cursor is positioned at the end of the input
    pub fn value(&self) -> Result<char, CursorError> {
        self.peek().ok_or(CursorError::CannotReadValueAtEnd {
            offset: self.offset,
        })
    }

    /// Consume `n` characters
    ///
    /// If fewer than `n` remain, the cursor stops at the end of the input.
    pub fn advance(&mut self, n: usize) {
        let rest = self.remaining();
        self.offset += self.byte_len_of(n).unwrap_or(rest.len());
    }

    /// Consume exactly `n` characters, or nothing at all
    ///
    /// Unlike [`advance`](Self::advance), this returns an error and leaves the
    /// cursor where it was when fewer than `n` characters remain.
    pub fn try_advance(&mut self, n: usize) -> Result<(), CursorError> {
        match self.byte_len_of(n) {
            Some(len) => {
                self.offset += len;
                Ok(())
            }
            None => Err(CursorError::UnexpectedEndOfInput {
                offset: self.offset,
                requested: n,
                available: self.remaining().chars().count(),
            }),
        }
    }

    /// Consume `len` bytes that the caller has already matched
    pub(crate) fn bump(&mut self, len: usize) {
        debug_assert!(self.remaining().is_char_boundary(len));
        self.offset = (self.offset + len).min(self.source.len());
    }

    /// Save the current position for a later [`restore`](Self::restore)
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
        }
    }

    /// Roll the cursor back (or forward) to a previously saved state
    ///
    /// Only the position is restored; the cursor keeps walking its own input.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset.min(self.source.len());
    }

    /// Consume the cursor and return the input and current byte offset
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.offset)
    }

    /// Number of bytes spanned by the next `n` characters, if that many remain
    fn byte_len_of(&self, n: usize) -> Option<usize> {
        let rest = self.remaining();
        rest.char_indices()
            .map(|(index, _)| index)
            .chain(iter::once(rest.len()))
            .nth(n)
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source)
    }
}

impl Checkpoint {
    /// Byte offset the checkpoint was taken at
    pub fn offset(&self) -> usize {
        self.offset
    }
}
