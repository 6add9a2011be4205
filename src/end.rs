use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that only succeeds once the input is exhausted, without consuming anything
///
/// Appending it to a grammar's root rejects inputs the root only matches a
/// prefix of.
pub struct EndOfInput<C, O> {
    value: O,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, O> EndOfInput<C, O> {
    pub fn new(value: O) -> Self {
        EndOfInput {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, O> Parser<'code> for EndOfInput<C, O>
where
    C: Cursor<'code>,
    O: Clone,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        if cursor.is_exhausted() {
            Ok(Outcome::success(self.value.clone(), cursor))
        } else {
            Ok(Outcome::Failure)
        }
    }

    fn describe(&self) -> String {
        "End".to_string()
    }
}

/// Convenience function to create an EndOfInput parser yielding `value`
pub fn end_of_input<'code, C, O>(value: O) -> EndOfInput<C, O>
where
    C: Cursor<'code>,
    O: Clone,
{
    EndOfInput::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::sequence::SequenceExt;
    use crate::symbol::{OneOf, is_symbol};

    fn sym(c: char) -> OneOf<'static, StrCursor<'static>> {
        is_symbol(c)
    }

    #[test]
    fn test_end_on_empty_input() {
        let cursor = StrCursor::new("");

        let outcome = end_of_input::<StrCursor, _>(()).parse(cursor).unwrap();
        assert_eq!(outcome, Outcome::success((), cursor));
    }

    #[test]
    fn test_end_fails_with_input_left() {
        let parser: EndOfInput<StrCursor, char> = end_of_input('x');

        assert!(parser.parse(StrCursor::new("a")).unwrap().is_failure());
    }

    #[test]
    fn test_end_after_sequence() {
        let parser = sym('a').and_then(sym('b')).and_then(end_of_input('x'));

        let (values, _) = parser
            .parse(StrCursor::new("ab"))
            .unwrap()
            .into_success()
            .unwrap();
        assert_eq!(values, vec!['a', 'b', 'x']);

        assert!(parser.parse(StrCursor::new("abc")).unwrap().is_failure());
    }
}
