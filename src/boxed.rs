use crate::cursor::Cursor;
use crate::keep_skip::KeepSkipExt;
use crate::parser::Parser;
use std::fmt;
use std::ops::{Shl, Shr};

/// A type-erased parser
///
/// Useful when different branches must produce the same parser type, as in
/// the binder of [`flat_map`](crate::flat_map()). The erased parser must be
/// `Send + Sync`, so a boxed parser can still be shared across threads.
///
/// Boxed parsers also carry the sequencing operators. `a >> b` runs both and
/// keeps `b`'s output, `a << b` runs both and keeps `a`'s output. The two
/// operators share a precedence level and associate to the left:
///
/// ```
/// use zipcomb::{BoxedExt, Parser, ascii::integer, utf8::literal};
///
/// let parenthesized = literal("(").boxed() >> integer().boxed() << literal(")").boxed();
/// assert_eq!(parenthesized.parse("(42)"), Some(42));
/// ```
pub struct BoxedParser<'p, 'code, O> {
    inner: Box<dyn Parser<'code, Output = O> + Send + Sync + 'p>,
}

impl<'p, 'code, O> BoxedParser<'p, 'code, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = O> + Send + Sync + 'p,
    {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'p, 'code, O> Parser<'code> for BoxedParser<'p, 'code, O> {
    type Output = O;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.inner.run(cursor)
    }
}

impl<'p, 'code, O> fmt::Debug for BoxedParser<'p, 'code, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Output>
    where
        Self: Send + Sync + 'p,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// `a >> b`: sequence, keep the right output
impl<'p, 'code, A, B> Shr<BoxedParser<'p, 'code, B>> for BoxedParser<'p, 'code, A>
where
    'code: 'p,
    A: 'p,
    B: 'p,
{
    type Output = BoxedParser<'p, 'code, B>;

    fn shr(self, rhs: BoxedParser<'p, 'code, B>) -> Self::Output {
        self.skip_and_keep(rhs).boxed()
    }
}

/// `a << b`: sequence, keep the left output
impl<'p, 'code, A, B> Shl<BoxedParser<'p, 'code, B>> for BoxedParser<'p, 'code, A>
where
    'code: 'p,
    A: 'p,
    B: 'p,
{
    type Output = BoxedParser<'p, 'code, A>;

    fn shl(self, rhs: BoxedParser<'p, 'code, B>) -> Self::Output {
        self.keep_and_skip(rhs).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::always;
    use crate::ascii::{float, integer};
    use crate::map::MapExt;
    use crate::utf8::{any_char, literal};

    #[test]
    fn test_boxed_behaves_like_inner() {
        let plain = integer().map(|n| n * 10);
        let boxed = integer().map(|n| n * 10).boxed();

        let mut plain_cursor = Cursor::new("4 left");
        let mut boxed_cursor = Cursor::new("4 left");
        assert_eq!(plain.run(&mut plain_cursor), boxed.run(&mut boxed_cursor));
        assert_eq!(plain_cursor, boxed_cursor);
    }

    #[test]
    fn test_boxed_branches_share_a_type() {
        let parsers: Vec<BoxedParser<'_, '_, f64>> = vec![
            always(1.0).boxed(),
            float().boxed(),
            integer().map(|n| n as f64).boxed(),
        ];

        let results: Vec<_> = parsers.iter().map(|p| p.parse("")).collect();
        assert_eq!(results, vec![Some(1.0), None, None]);
    }

    #[test]
    fn test_keep_right_operator() {
        let parser = literal("#").boxed() >> integer().boxed();

        assert_eq!(parser.parse("#12"), Some(12));
        assert_eq!(parser.parse("12"), None);
    }

    #[test]
    fn test_keep_left_operator() {
        let parser = any_char().boxed() << literal("!").boxed();

        assert_eq!(parser.parse("a!"), Some('a'));
        assert_eq!(parser.parse("a?"), None);
    }

    #[test]
    fn test_operators_associate_left() {
        let parser = literal("(").boxed() >> integer().boxed() << literal(")").boxed();

        let mut cursor = Cursor::new("(7)+");
        assert_eq!(parser.run(&mut cursor), Some(7));
        assert_eq!(cursor.remaining(), "+");
    }

    #[test]
    fn test_debug_output() {
        let parser = integer().boxed();

        assert!(format!("{:?}", parser).contains("BoxedParser"));
    }
}
