//! # PComb - Parser Combinator Engine
//!
//! Build parsers for context-free languages out of small, composable pieces
//! and run them directly over a cursor into the input.
//!
//! - **Symbols**: match one element drawn from a fixed set
//! - **Combinators**: sequence, pair, ordered choice, optional, repetition
//! - **Actions**: turn what was recognized into domain values
//! - **Grammars**: named rules, so grammars may refer to themselves
//!
//! Parsing backtracks freely. A failed alternative never moves the caller's
//! cursor, so the next alternative simply starts from the same place. Only a
//! misconfigured grammar, such as a reference to a rule that was never
//! registered, surfaces as an error.

pub mod action;
pub mod and;
pub mod atomic;
pub mod choice;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod error;
pub mod grammar;
pub mod many;
pub mod optional;
pub mod outcome;
pub mod parser;
pub mod reference;
pub mod sequence;
pub mod symbol;
pub mod whitespace;

pub use action::{Action, ActionExt, action};
pub use and::{And, AndExt, and};
pub use atomic::Atomic;
pub use choice::{Choice, ChoiceExt, choice};
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, StrCursor};
pub use end::{EndOfInput, end_of_input};
pub use error::GrammarError;
pub use grammar::Grammar;
pub use many::{Many, ManyExt, many};
pub use optional::{Optional, OptionalExt, OptionalOr, opt};
pub use outcome::{Outcome, ParseResult};
pub use parser::{Parser, SharedExt, SharedParser};
pub use reference::Reference;
pub use sequence::{Select, Sequence, SequenceExt, sequence};
pub use symbol::{AnySymbol, OneOf, any_symbol, is_symbol, one_of};
pub use whitespace::{space, token, token_in};
