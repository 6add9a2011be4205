use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that accepts an optional occurrence of another parser
///
/// Never fails. When the inner parser does not match, the result is `None`
/// and the cursor is returned exactly as it came in.
///
/// Example:
/// ```
/// use pcomb::and::AndExt;
/// use pcomb::cursors::StrCursor;
/// use pcomb::optional::OptionalExt;
/// use pcomb::parser::Parser;
/// use pcomb::symbol::{is_symbol, one_of};
///
/// let signed = is_symbol::<StrCursor>('-').opt().and(one_of('0'..='9'));
///
/// let ((sign, digit), _) = signed.parse(StrCursor::new("-7")).unwrap().into_success().unwrap();
/// assert_eq!((sign, digit), (Some('-'), '7'));
///
/// let ((sign, digit), _) = signed.parse(StrCursor::new("7")).unwrap().into_success().unwrap();
/// assert_eq!((sign, digit), (None, '7'));
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor)? {
            Outcome::Success { value, rest } => Ok(Outcome::success(Some(value), rest)),
            Outcome::Failure => Ok(Outcome::success(None, cursor)),
        }
    }

    fn describe(&self) -> String {
        format!("Opt[{}]", self.parser.describe())
    }
}

/// Like [`Optional`], but stands in a caller-chosen value for the absent case
pub struct OptionalOr<P, O> {
    parser: P,
    absent: O,
}

impl<P, O> OptionalOr<P, O> {
    pub fn new(parser: P, absent: O) -> Self {
        OptionalOr { parser, absent }
    }
}

impl<'code, P, O> Parser<'code> for OptionalOr<P, O>
where
    P: Parser<'code, Output = O>,
    O: Clone,
{
    type Cursor = P::Cursor;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor)? {
            Outcome::Failure => Ok(Outcome::success(self.absent.clone(), cursor)),
            success => Ok(success),
        }
    }

    fn describe(&self) -> String {
        format!("Opt[{}]", self.parser.describe())
    }
}

/// Convenience function to create an Optional parser
pub fn opt<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .opt() and .opt_or() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn opt(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn opt_or(self, absent: Self::Output) -> OptionalOr<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OptionalOr::new(self, absent)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
