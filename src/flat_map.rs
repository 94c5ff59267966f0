use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that picks the next parser based on the output of the first
///
/// The parser returned by the binder runs on the already-advanced cursor.
/// When that second parser fails, the input consumed by the first one stays
/// consumed; wrap the whole thing in [`attempt`](crate::attempt) to undo it.
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let value = self.parser.run(cursor)?;
        (self.binder)(value).run(cursor)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::always;
    use crate::ascii::integer;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::map::MapExt;
    use crate::never::never;
    use crate::utf8::{any_char, literal};

    fn sign<'code>() -> impl Parser<'code, Output = f64> {
        any_char().flat_map(|ch| -> BoxedParser<'static, 'code, f64> {
            match ch {
                'N' | 'E' => always(1.0).boxed(),
                'S' | 'W' => always(-1.0).boxed(),
                _ => never().boxed(),
            }
        })
    }

    #[test]
    fn test_flat_map_selects_parser() {
        assert_eq!(sign().parse("N"), Some(1.0));
        assert_eq!(sign().parse("W"), Some(-1.0));
    }

    #[test]
    fn test_flat_map_second_parser_sees_advanced_cursor() {
        // A length prefix followed by that many characters
        let parser = integer()
            .flat_map(|len| any_char().map(move |ch| (len, ch)));

        let mut cursor = Cursor::new("3x rest");
        assert_eq!(parser.run(&mut cursor), Some((3, 'x')));
        assert_eq!(cursor.remaining(), " rest");
    }

    #[test]
    fn test_flat_map_first_failure_consumes_nothing() {
        let mut cursor = Cursor::new("abc");
        let parser = integer().flat_map(|_| literal("abc"));

        assert_eq!(parser.run(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_flat_map_second_failure_keeps_first_consumption() {
        let mut cursor = Cursor::new("Q!");

        assert_eq!(sign().run(&mut cursor), None);
        assert_eq!(cursor.remaining(), "!");
    }

    #[test]
    fn test_function_syntax() {
        let parser = flat_map(integer(), |n| always(n + 1));

        assert_eq!(parser.parse("41"), Some(42));
    }
}
