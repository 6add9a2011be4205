use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::outcome::ParseResult;
use crate::parser::{Parser, SharedParser};
use crate::reference::Reference;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

pub(crate) type RuleTable<'code, C, O> = RwLock<FxHashMap<String, SharedParser<'code, C, O>>>;

/// A set of named grammar rules
///
/// Rules are what make recursion possible: a parser graph cannot own itself,
/// but it can hold a [`Reference`] that looks a rule up by name when it runs.
/// References can be created before the rule they name is registered, as long
/// as registration happens before the first parse that reaches them.
///
/// All rules of a grammar produce the same output type `O`. Build the whole
/// grammar, register every rule, then parse; registering while other threads
/// are parsing is safe but may or may not be observed by those parses.
///
/// Example:
/// ```
/// use pcomb::and::AndExt;
/// use pcomb::action::ActionExt;
/// use pcomb::choice::ChoiceExt;
/// use pcomb::cursors::StrCursor;
/// use pcomb::grammar::Grammar;
/// use pcomb::symbol::is_symbol;
///
/// // nested : '(' nested ')' | 'a'
/// let grammar: Grammar<StrCursor, usize> = Grammar::new();
/// let parens = is_symbol::<StrCursor>('(')
///     .and(grammar.reference("nested"))
///     .and(is_symbol(')'))
///     .map(|((_, depth), _)| depth + 1);
/// let leaf = is_symbol('a').map(|_| 0);
/// grammar.register("nested", parens.or_else(leaf));
///
/// let depth = grammar.parse("nested", StrCursor::new("(((a)))")).unwrap();
/// assert_eq!(depth.value(), Some(&3));
/// ```
pub struct Grammar<'code, C: Cursor<'code>, O> {
    rules: Arc<RuleTable<'code, C, O>>,
}

impl<'code, C, O> Grammar<'code, C, O>
where
    C: Cursor<'code>,
{
    pub fn new() -> Self {
        Grammar {
            rules: Arc::new(RwLock::new(FxHashMap::default())),
        }
    }

    /// Bind `name` to `parser`, replacing and returning any earlier binding
    pub fn register<P>(&self, name: impl Into<String>, parser: P) -> Option<SharedParser<'code, C, O>>
    where
        P: Parser<'code, Cursor = C, Output = O> + Send + Sync + 'code,
    {
        let name = name.into();
        let parser: SharedParser<'code, C, O> = Arc::new(parser);
        debug!(rule = %name, parser = %parser.describe(), "registering rule");

        let previous = self.rules.write().insert(name, parser);
        if previous.is_some() {
            debug!("rule rebound, previous binding replaced");
        }
        previous
    }

    /// A parser that runs whatever `name` is bound to at parse time
    pub fn reference(&self, name: impl Into<String>) -> Reference<'code, C, O> {
        Reference::new(name.into(), Arc::downgrade(&self.rules))
    }

    /// The parser currently bound to `name`
    pub fn rule(&self, name: &str) -> Result<SharedParser<'code, C, O>, GrammarError> {
        self.rules
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| GrammarError::UnregisteredRule {
                name: name.to_string(),
            })
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Names of all registered rules, sorted
    pub fn rule_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn describe_rule(&self, name: &str) -> Result<String, GrammarError> {
        Ok(self.rule(name)?.describe())
    }

    /// Run the rule bound to `name` from `cursor`
    pub fn parse(&self, name: &str, cursor: C) -> ParseResult<O, C> {
        debug!(rule = name, position = cursor.position(), "parsing");
        self.rule(name)?.parse(cursor)
    }
}

impl<'code, C, O> Default for Grammar<'code, C, O>
where
    C: Cursor<'code>,
{
    fn default() -> Self {
        Self::new()
    }
}
