use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::grammar::RuleTable;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Weak;
use tracing::trace;

/// Parser that stands in for a named rule of a [`crate::grammar::Grammar`]
///
/// The name is resolved on every parse, so the reference can be built into a
/// rule's own body before that rule exists. The reference only holds a weak
/// handle to its grammar's rule table; recursive rules therefore do not keep
/// their grammar alive, and a reference that outlives its grammar reports
/// [`GrammarError::GrammarDropped`].
pub struct Reference<'code, C: Cursor<'code>, O> {
    name: String,
    rules: Weak<RuleTable<'code, C, O>>,
}

impl<'code, C, O> Reference<'code, C, O>
where
    C: Cursor<'code>,
{
    pub(crate) fn new(name: String, rules: Weak<RuleTable<'code, C, O>>) -> Self {
        Reference { name, rules }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code, C: Cursor<'code>, O> Clone for Reference<'code, C, O> {
    fn clone(&self) -> Self {
        Reference {
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<'code, C, O> Parser<'code> for Reference<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        let rules = self.rules.upgrade().ok_or_else(|| GrammarError::GrammarDropped {
            name: self.name.clone(),
        })?;
        // Clone the target out so the lock is released before recursing into it
        let target = rules.read().get(&self.name).cloned();
        let target = target.ok_or_else(|| GrammarError::UnregisteredRule {
            name: self.name.clone(),
        })?;

        trace!(rule = %self.name, position = cursor.position(), "resolved rule");
        target.parse(cursor)
    }

    fn describe(&self) -> String {
        format!("Ref[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionExt;
    use crate::and::AndExt;
    use crate::choice::ChoiceExt;
    use crate::cursors::StrCursor;
    use crate::grammar::Grammar;
    use crate::symbol::is_symbol;

    type Input = StrCursor<'static>;

    #[test]
    fn test_reference_before_registration() {
        let grammar: Grammar<Input, char> = Grammar::new();
        let reference = grammar.reference("letter");

        assert_eq!(
            reference.parse(StrCursor::new("a")),
            Err(GrammarError::UnregisteredRule {
                name: "letter".to_string()
            })
        );

        grammar.register("letter", is_symbol('a'));
        assert!(reference.parse(StrCursor::new("a")).unwrap().is_success());
    }

    #[test]
    fn test_reference_outliving_grammar() {
        let reference = {
            let grammar: Grammar<Input, char> = Grammar::new();
            grammar.register("letter", is_symbol('a'));
            grammar.reference("letter")
        };

        assert_eq!(
            reference.parse(StrCursor::new("a")),
            Err(GrammarError::GrammarDropped {
                name: "letter".to_string()
            })
        );
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 200;
        let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

        // p : '(' p ')' | 'a'
        let grammar: Grammar<StrCursor, usize> = Grammar::new();
        let parens = is_symbol('(')
            .and(grammar.reference("p"))
            .and(is_symbol(')'))
            .map(|((_, depth), _)| depth + 1);
        grammar.register("p", parens.or_else(is_symbol('a').map(|_| 0)));

        let (value, rest) = grammar
            .parse("p", StrCursor::new(&input))
            .unwrap()
            .into_success()
            .unwrap();
        assert_eq!(value, depth);
        assert!(rest.is_exhausted());

        assert!(
            grammar
                .parse("p", StrCursor::new("((a)"))
                .unwrap()
                .is_failure()
        );
    }

    #[test]
    fn test_describe_does_not_follow_recursion() {
        let grammar: Grammar<Input, char> = Grammar::new();
        let reference = grammar.reference("self");
        grammar.register("self", reference.clone().or_else(is_symbol('a')));

        assert_eq!(reference.name(), "self");
        assert_eq!(
            grammar.describe_rule("self"),
            Ok("Choice[Ref[self], Set['a']]".to_string())
        );
    }
}
