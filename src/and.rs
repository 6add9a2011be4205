use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Use this where the two sides produce different types. Chaining `.and()`
/// nests to the left, `(((a, b), c), d)`, since Rust has no variadic tuples;
/// when every side shares one output type, [`crate::sequence::Sequence`] gives
/// a flat `Vec` instead.
///
/// Example:
/// ```
/// use pcomb::and::AndExt;
/// use pcomb::cursors::StrCursor;
/// use pcomb::many::ManyExt;
/// use pcomb::parser::Parser;
/// use pcomb::symbol::{is_symbol, one_of};
///
/// let parser = is_symbol::<StrCursor>('x').and(one_of('0'..='9').many(1));
/// let ((x, digits), rest) = parser
///     .parse(StrCursor::new("x42"))
///     .unwrap()
///     .into_success()
///     .unwrap();
/// assert_eq!(x, 'x');
/// assert_eq!(digits, vec!['4', '2']);
/// assert_eq!(rest.remaining(), "");
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (first, cursor) = match self.parser1.parse(cursor)? {
            Outcome::Success { value, rest } => (value, rest),
            Outcome::Failure => return Ok(Outcome::Failure),
        };
        Ok(self
            .parser2
            .parse(cursor)?
            .map(|second| (first, second)))
    }

    fn describe(&self) -> String {
        format!(
            "And[{}, {}]",
            self.parser1.describe(),
            self.parser2.describe()
        )
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
