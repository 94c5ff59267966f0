use crate::cursor::Cursor;
use crate::map::Map;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Each step is responsible for leaving the cursor untouched when it fails,
/// but `Zip` does not undo the steps that already succeeded. If `b` fails
/// after `a` matched, the cursor stays past `a`'s input:
///
/// ```
/// use zipcomb::{Cursor, Parser, ascii::integer, utf8::literal, zip};
///
/// let mut cursor = Cursor::new("12;x");
/// assert_eq!(zip(integer(), literal(",")).run(&mut cursor), None);
/// assert_eq!(cursor.remaining(), ";x");
/// ```
///
/// Wrap it in [`attempt`](crate::attempt) to get all-or-nothing consumption.
#[derive(Debug, Clone, Copy)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<'code, A, B> Parser<'code> for Zip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    type Output = (A::Output, B::Output);

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let a = self.a.run(cursor)?;
        let b = self.b.run(cursor)?;
        Some((a, b))
    }
}

/// Convenience function to create a Zip parser
pub fn zip<'code, A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    Zip::new(a, b)
}

/// Sequence two parsers and combine their outputs with `combine`
pub fn zip_with<'code, A, B, F, C>(
    combine: F,
    a: A,
    b: B,
) -> Map<Zip<A, B>, impl Fn((A::Output, B::Output)) -> C>
where
    A: Parser<'code>,
    B: Parser<'code>,
    F: Fn(A::Output, B::Output) -> C,
{
    Map::new(Zip::new(a, b), move |(a, b): (A::Output, B::Output)| {
        combine(a, b)
    })
}

/// Extension trait to add .zip() method support for parsers
pub trait ZipExt<'code>: Parser<'code> + Sized {
    fn zip<P>(self, other: P) -> Zip<Self, P>
    where
        P: Parser<'code>,
    {
        Zip::new(self, other)
    }
}

/// Implement ZipExt for all parsers
impl<'code, P> ZipExt<'code> for P where P: Parser<'code> {}

/// Declares a fixed-arity zip that yields a flat tuple
macro_rules! zip_n {
    ($(#[$doc:meta])* $name:ident, $func:ident, $($field:ident: $ty:ident),+) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<$($ty),+> {
            $($field: $ty),+
        }

        impl<'code, $($ty),+> Parser<'code> for $name<$($ty),+>
        where
            $($ty: Parser<'code>),+
        {
            type Output = ($($ty::Output),+);

            fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
                $(let $field = self.$field.run(cursor)?;)+
                Some(($($field),+))
            }
        }

        $(#[$doc])*
        pub fn $func<'code, $($ty),+>($($field: $ty),+) -> $name<$($ty),+>
        where
            $($ty: Parser<'code>),+
        {
            $name { $($field),+ }
        }
    };
}

zip_n!(
    /// Sequence three parsers into a flat 3-tuple
    Zip3, zip3, a: A, b: B, c: C
);
zip_n!(
    /// Sequence four parsers into a flat 4-tuple
    Zip4, zip4, a: A, b: B, c: C, d: D
);
zip_n!(
    /// Sequence five parsers into a flat 5-tuple
    Zip5, zip5, a: A, b: B, c: C, d: D, e: E
);
zip_n!(
    /// Sequence six parsers into a flat 6-tuple
    Zip6, zip6, a: A, b: B, c: C, d: D, e: E, f: F
);
zip_n!(
    /// Sequence seven parsers into a flat 7-tuple
    Zip7, zip7, a: A, b: B, c: C, d: D, e: E, f: F, g: G
);
