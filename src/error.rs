use thiserror::Error;

/// Errors raised by cursor operations that cannot be satisfied
///
/// Parsers never surface these to their callers. A parser that hits one turns
/// it into a plain no-match (`None`), so the only place they are observable is
/// when driving a [`Cursor`](crate::Cursor) by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cannot read a character at end of input (offset {offset})")]
    CannotReadValueAtEnd { offset: usize },

    #[error(
        "unexpected end of input: requested {requested} characters but only {available} remain (offset {offset})"
    )]
    UnexpectedEndOfInput {
        offset: usize,
        requested: usize,
        available: usize,
    },
}

impl CursorError {
    /// Byte offset into the input where the failing operation was attempted
    pub fn offset(&self) -> usize {
        match self {
            CursorError::CannotReadValueAtEnd { offset } => *offset,
            CursorError::UnexpectedEndOfInput { offset, .. } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_at_end_display() {
        let error = CursorError::CannotReadValueAtEnd { offset: 5 };

        let display_str = error.to_string();
        assert!(display_str.contains("cannot read a character at end of input"));
        assert!(display_str.contains("offset 5"));
        assert_eq!(error.offset(), 5);
    }

    #[test]
    fn test_unexpected_end_display() {
        let error = CursorError::UnexpectedEndOfInput {
            offset: 3,
            requested: 4,
            available: 2,
        };

        let display_str = error.to_string();
        assert!(display_str.contains("requested 4 characters"));
        assert!(display_str.contains("only 2 remain"));
        assert_eq!(error.offset(), 3);
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CursorError::CannotReadValueAtEnd { offset: 0 });
    }
}
