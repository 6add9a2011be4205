use thiserror::Error;

/// A grammar that was assembled wrongly
///
/// These are never ordinary parse failures: they describe the parser graph,
/// not the input, so no alternative or retry can recover from them. Every
/// combinator propagates them unchanged instead of backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("no parser registered for rule `{name}`")]
    UnregisteredRule { name: String },

    #[error("rule `{name}` was referenced after its grammar was dropped")]
    GrammarDropped { name: String },

    #[error("cannot select element {index} of a sequence of {len}")]
    SelectOutOfRange { index: usize, len: usize },
}
