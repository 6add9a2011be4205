use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::{Parser, SharedParser};
use std::sync::Arc;

/// Parser combinator that tries alternatives in order and returns the first success
///
/// Every alternative starts from the same cursor. There is no longest-match
/// rule: an earlier alternative that matches shadows any later one, so more
/// specific alternatives belong first.
pub struct Choice<'code, C: Cursor<'code>, O> {
    alternatives: Vec<SharedParser<'code, C, O>>,
}

impl<'code, C, O> Choice<'code, C, O>
where
    C: Cursor<'code>,
{
    pub fn new<P>(first: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code,
    {
        let first: SharedParser<'code, C, O> = Arc::new(first);
        Choice {
            alternatives: vec![first],
        }
    }

    /// Append one more alternative, tried after all existing ones
    pub fn or_else<P>(mut self, alternative: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code,
    {
        self.alternatives.push(Arc::new(alternative));
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<'code, C: Cursor<'code>, O> Clone for Choice<'code, C, O> {
    fn clone(&self) -> Self {
        Choice {
            alternatives: self.alternatives.clone(),
        }
    }
}

impl<'code, C, O> Parser<'code> for Choice<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        for alternative in &self.alternatives {
            let outcome = alternative.parse(cursor)?;
            if outcome.is_success() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Failure)
    }

    fn describe(&self) -> String {
        let alternatives: Vec<String> = self.alternatives.iter().map(|p| p.describe()).collect();
        format!("Choice[{}]", alternatives.join(", "))
    }
}

/// Convenience function to create a two-way Choice parser
pub fn choice<'code, P1, P2>(first: P1, second: P2) -> Choice<'code, P1::Cursor, P1::Output>
where
    P1: Parser<'code> + Send + Sync + 'code,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output> + Send + Sync + 'code,
{
    Choice::new(first).or_else(second)
}

/// Extension trait to add .or_else() method support for parsers
pub trait ChoiceExt<'code>: Parser<'code> + Sized {
    fn or_else<P>(self, alternative: P) -> Choice<'code, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'code,
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output> + Send + Sync + 'code,
    {
        Choice::new(self).or_else(alternative)
    }
}

/// Implement ChoiceExt for all parsers
impl<'code, P> ChoiceExt<'code> for P where P: Parser<'code> {}
