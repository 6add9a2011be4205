use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// Parsers are immutable once built and keep no state between calls, so a
/// single parser graph can serve any number of parse sessions, including
/// concurrent ones on separate cursors.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor after it on success. A failure
    /// leaves nothing behind: the caller's cursor is untouched and can be
    /// handed to the next alternative.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor>;

    /// Structural rendering of the parser graph, for diagnostics
    ///
    /// References render by name only, so recursive grammars terminate.
    fn describe(&self) -> String;
}

/// A type-erased parser that can be shared between several parents
pub type SharedParser<'code, C, O> = Arc<dyn Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Extension trait to add .shared() method support for parsers
pub trait SharedExt<'code>: Parser<'code> + Sized {
    fn shared(self) -> SharedParser<'code, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Arc::new(self)
    }
}

/// Implement SharedExt for all parsers
impl<'code, P> SharedExt<'code> for P where P: Parser<'code> {}
