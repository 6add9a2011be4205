use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that matches one symbol from a fixed set of acceptable symbols
pub struct OneOf<'code, C: Cursor<'code>> {
    symbols: Vec<C::Element>,
    _cursor: PhantomData<fn() -> &'code C>,
}

impl<'code, C: Cursor<'code>> OneOf<'code, C> {
    pub fn new(symbols: impl IntoIterator<Item = C::Element>) -> Self {
        OneOf {
            symbols: symbols.into_iter().collect(),
            _cursor: PhantomData,
        }
    }

    pub fn accepts(&self, symbol: &C::Element) -> bool {
        self.symbols.contains(symbol)
    }
}

impl<'code, C: Cursor<'code>> Parser<'code> for OneOf<'code, C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> ParseResult<Self::Output, C> {
        match cursor.current() {
            Some(symbol) if self.accepts(&symbol) => Ok(Outcome::success(symbol, cursor.advance())),
            _ => Ok(Outcome::Failure),
        }
    }

    fn describe(&self) -> String {
        let symbols: Vec<String> = self.symbols.iter().map(|s| format!("{s:?}")).collect();
        format!("Set[{}]", symbols.join(", "))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, C>(symbols: impl IntoIterator<Item = C::Element>) -> OneOf<'code, C>
where
    C: Cursor<'code>,
{
    OneOf::new(symbols)
}

/// Convenience function to match exactly one given symbol
pub fn is_symbol<'code, C>(expected: C::Element) -> OneOf<'code, C>
where
    C: Cursor<'code>,
{
    OneOf::new([expected])
}

/// Parser that consumes and returns any single symbol
pub struct AnySymbol<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> AnySymbol<C> {
    pub fn new() -> Self {
        AnySymbol {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for AnySymbol<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C: Cursor<'code>> Parser<'code> for AnySymbol<C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> ParseResult<Self::Output, C> {
        match cursor.current() {
            Some(symbol) => Ok(Outcome::success(symbol, cursor.advance())),
            None => Ok(Outcome::Failure),
        }
    }

    fn describe(&self) -> String {
        "Any".to_string()
    }
}

/// Convenience function to create an AnySymbol parser
pub fn any_symbol<'code, C>() -> AnySymbol<C>
where
    C: Cursor<'code>,
{
    AnySymbol::new()
}
