use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::{Parser, SharedParser};
use std::sync::Arc;

/// Parser combinator that runs parsers one after another and collects every result
///
/// Chaining is flat: `a.and_then(b).and_then(c)` is one sequence of three
/// children producing `vec![a, b, c]`, never a nested pair. All children share
/// one output type; for children of different types see [`crate::and::And`].
///
/// Example:
/// ```
/// use pcomb::cursors::StrCursor;
/// use pcomb::parser::Parser;
/// use pcomb::sequence::SequenceExt;
/// use pcomb::symbol::is_symbol;
///
/// let parser = is_symbol::<StrCursor>('a')
///     .and_then(is_symbol('b'))
///     .and_then(is_symbol('c'));
/// let (letters, rest) = parser
///     .parse(StrCursor::new("abcd"))
///     .unwrap()
///     .into_success()
///     .unwrap();
/// assert_eq!(letters, vec!['a', 'b', 'c']);
/// assert_eq!(rest.remaining(), "d");
/// ```
pub struct Sequence<'code, C: Cursor<'code>, O> {
    parsers: Vec<SharedParser<'code, C, O>>,
}

impl<'code, C, O> Sequence<'code, C, O>
where
    C: Cursor<'code>,
{
    pub fn new<P>(first: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code,
    {
        let first: SharedParser<'code, C, O> = Arc::new(first);
        Sequence {
            parsers: vec![first],
        }
    }

    /// Append one more child to this sequence
    pub fn and_then<P>(mut self, next: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code,
    {
        self.parsers.push(Arc::new(next));
        self
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Keep only the value produced by the child at `index`
    pub fn select(self, index: usize) -> Select<'code, C, O> {
        Select {
            sequence: self,
            index,
        }
    }
}

impl<'code, C: Cursor<'code>, O> Clone for Sequence<'code, C, O> {
    fn clone(&self) -> Self {
        Sequence {
            parsers: self.parsers.clone(),
        }
    }
}

impl<'code, C, O> Parser<'code> for Sequence<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = Vec<O>;

    fn parse(&self, cursor: C) -> ParseResult<Vec<O>, C> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut cursor = cursor;

        for parser in &self.parsers {
            match parser.parse(cursor)? {
                Outcome::Success { value, rest } => {
                    values.push(value);
                    cursor = rest;
                }
                Outcome::Failure => return Ok(Outcome::Failure),
            }
        }

        Ok(Outcome::success(values, cursor))
    }

    fn describe(&self) -> String {
        let children: Vec<String> = self.parsers.iter().map(|p| p.describe()).collect();
        format!("Sequence[{}]", children.join(", "))
    }
}

/// A sequence reduced to the value of one of its children
pub struct Select<'code, C: Cursor<'code>, O> {
    sequence: Sequence<'code, C, O>,
    index: usize,
}

impl<'code, C, O> Parser<'code> for Select<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        let len = self.sequence.len();
        match self.sequence.parse(cursor)? {
            Outcome::Success { value, rest } => match value.into_iter().nth(self.index) {
                Some(value) => Ok(Outcome::success(value, rest)),
                None => Err(GrammarError::SelectOutOfRange {
                    index: self.index,
                    len,
                }),
            },
            Outcome::Failure => Ok(Outcome::Failure),
        }
    }

    fn describe(&self) -> String {
        format!("Select[{}, {}]", self.sequence.describe(), self.index)
    }
}

/// Convenience function to create a two-element Sequence parser
pub fn sequence<'code, P1, P2>(first: P1, second: P2) -> Sequence<'code, P1::Cursor, P1::Output>
where
    P1: Parser<'code> + Send + Sync + 'code,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output> + Send + Sync + 'code,
{
    Sequence::new(first).and_then(second)
}

/// Extension trait to add .and_then() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn and_then<P>(self, next: P) -> Sequence<'code, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'code,
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output> + Send + Sync + 'code,
    {
        Sequence::new(self).and_then(next)
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
