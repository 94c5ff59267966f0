use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input and yields a clone of
/// its value
#[derive(Debug, Clone, Copy)]
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    pub fn new(value: T) -> Self {
        Always { value }
    }
}

impl<'code, T> Parser<'code> for Always<T>
where
    T: Clone,
{
    type Output = T;

    fn run(&self, _cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        Some(self.value.clone())
    }
}

/// Convenience function to create an Always parser
pub fn always<T>(value: T) -> Always<T>
where
    T: Clone,
{
    Always::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_does_not_consume() {
        let mut cursor = Cursor::new("hello");
        let parser = always(1.0);

        assert_eq!(parser.run(&mut cursor), Some(1.0));
        assert_eq!(cursor.remaining(), "hello");
    }

    #[test]
    fn test_always_on_empty_input() {
        assert_eq!(always("value").parse(""), Some("value"));
    }

    #[test]
    fn test_always_rejects_trailing_input_in_parse() {
        assert_eq!(always(3).parse("x"), None);
    }

    #[test]
    fn test_always_yields_fresh_clones() {
        let parser = always(String::from("hi"));
        let mut cursor = Cursor::new("");

        let first = parser.run(&mut cursor);
        let second = parser.run(&mut cursor);
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("hi"));
    }

    #[test]
    fn test_always_function() {
        let parser = always(|x: i64| x * 2);
        let mut cursor = Cursor::new("");

        let double = parser.run(&mut cursor).unwrap();
        assert_eq!(double(21), 42);
    }
}
