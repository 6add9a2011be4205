use crate::action::ActionExt;
use crate::and::AndExt;
use crate::cursor::Cursor;
use crate::many::ManyExt;
use crate::parser::Parser;
use crate::symbol::{is_symbol, one_of};

const SPACE: [char; 3] = [' ', '\t', '\n'];

/// Parser that skips any run of spaces, tabs and newlines, possibly empty
pub fn space<'code, C>() -> impl Parser<'code, Cursor = C, Output = ()> + Send + Sync + 'code
where
    C: Cursor<'code, Element = char>,
{
    one_of(SPACE).many(0).map(|_| ())
}

/// Parser that skips leading whitespace, then matches `symbol`
pub fn token<'code, C>(
    symbol: char,
) -> impl Parser<'code, Cursor = C, Output = char> + Send + Sync + 'code
where
    C: Cursor<'code, Element = char>,
{
    space::<C>().and(is_symbol::<C>(symbol)).map(|((), c)| c)
}

/// Parser that skips leading whitespace, then matches any character of `symbols`
pub fn token_in<'code, C>(
    symbols: &str,
) -> impl Parser<'code, Cursor = C, Output = char> + Send + Sync + 'code + use<'code, C>
where
    C: Cursor<'code, Element = char>,
{
    space::<C>()
        .and(one_of::<C>(symbols.chars()))
        .map(|((), c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceExt;
    use crate::cursors::StrCursor;
    use crate::grammar::Grammar;
    use crate::sequence::SequenceExt;
    use pretty_assertions::assert_eq;

    type Input = StrCursor<'static>;

    #[test]
    fn test_space_skips_whitespace() {
        let cursor = StrCursor::new(" \t\n x");

        let (_, rest) = space::<Input>().parse(cursor).unwrap().into_success().unwrap();
        assert_eq!(rest.remaining(), "x");
    }

    #[test]
    fn test_space_matches_nothing() {
        let cursor = StrCursor::new("x");

        let (_, rest) = space::<Input>().parse(cursor).unwrap().into_success().unwrap();
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_token() {
        let parser = token::<Input>('(');

        let (c, rest) = parser
            .parse(StrCursor::new("   (a"))
            .unwrap()
            .into_success()
            .unwrap();
        assert_eq!(c, '(');
        assert_eq!(rest.remaining(), "a");

        assert!(parser.parse(StrCursor::new("  )")).unwrap().is_failure());
    }

    #[test]
    fn test_token_in() {
        let parser = token_in::<Input>("+-");

        let (values, _) = parser
            .and_then(token_in("+-"))
            .parse(StrCursor::new(" + \n-"))
            .unwrap()
            .into_success()
            .unwrap();
        assert_eq!(values, vec!['+', '-']);
    }

    #[test]
    fn test_nested_lists_with_whitespace() {
        // P : '(' P+ ')' | letter
        let grammar: Grammar<Input, String> = Grammar::new();
        let letter = token_in("abcdefghijklmnopqrstuvwxyz").map(|c| c.to_string());
        let parens = token('(')
            .and(grammar.reference("p").some())
            .and(token(')'))
            .map(|((_, items), _)| format!("[{}]", items.join(" ")));
        grammar.register("p", parens.or_else(letter));

        let outcome = grammar
            .parse("p", StrCursor::new("(((a (d e) (q)) ((a b c))))"))
            .unwrap();
        assert_eq!(
            outcome.value().map(String::as_str),
            Some("[[[a [d e] [q]] [[a b c]]]]")
        );
    }
}
