use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use tracing::debug;

/// Parser combinator that matches a parser repeatedly, at least `min` times
///
/// Repetition stops at the first failing attempt, which consumes nothing.
/// It also stops when an attempt succeeds without advancing the cursor: that
/// match is dropped, since repeating it could never make progress. Whether
/// the whole repetition succeeds is then decided by the count so far.
pub struct Many<P> {
    parser: P,
    min: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, min: usize) -> Self {
        Many { parser, min }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut results = Vec::new();
        let mut cursor = cursor;

        loop {
            match self.parser.parse(cursor)? {
                Outcome::Success { value, rest } => {
                    if rest.position() == cursor.position() {
                        debug!(
                            position = cursor.position(),
                            repetitions = results.len(),
                            "repetition matched without consuming input, stopping"
                        );
                        break;
                    }
                    results.push(value);
                    cursor = rest;
                }
                Outcome::Failure => break,
            }
        }

        if results.len() >= self.min {
            Ok(Outcome::success(results, cursor))
        } else {
            Ok(Outcome::Failure)
        }
    }

    fn describe(&self) -> String {
        format!("Many[{}, {}]", self.parser.describe(), self.min)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P, min: usize) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, min)
}

/// Extension trait to add .many() and .some() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self, min: usize) -> Many<Self> {
        Many::new(self, min)
    }

    /// One or more repetitions
    fn some(self) -> Many<Self> {
        Many::new(self, 1)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
