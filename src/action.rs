use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Parser combinator that attaches a semantic action to another parser
///
/// Succeeds exactly when the inner parser does, with the action applied to its
/// value. The remaining cursor is passed through untouched. This is where a
/// grammar turns raw syntactic shapes into domain values.
pub struct Action<P, F> {
    parser: P,
    action: F,
}

impl<P, F> Action<P, F> {
    pub fn new(parser: P, action: F) -> Self {
        Action { parser, action }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Action<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        Ok(self.parser.parse(cursor)?.map(&self.action))
    }

    fn describe(&self) -> String {
        format!("Action[{}]", self.parser.describe())
    }
}

/// Convenience function to create an Action parser
pub fn action<'code, P, F, T, U>(parser: P, action: F) -> Action<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Action::new(parser, action)
}

/// Extension trait to add .map() method support for parsers
pub trait ActionExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, action: F) -> Action<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Action::new(self, action)
    }
}

/// Implement ActionExt for all parsers
impl<'code, P> ActionExt<'code> for P where P: Parser<'code> {}
