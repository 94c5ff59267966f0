use crate::cursor::Cursor;
use crate::parser::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
pub struct Never<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Never<T> {
    pub fn new() -> Self {
        Never {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Never<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Never<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Never<T> {}

impl<T> fmt::Debug for Never<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Never")
    }
}

impl<'code, T> Parser<'code> for Never<T> {
    type Output = T;

    fn run(&self, _cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        None
    }
}

/// Convenience function to create a Never parser
pub fn never<T>() -> Never<T> {
    Never::new()
}
