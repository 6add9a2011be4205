use std::fmt;

/// Trait for the symbols a cursor yields and parsers match against
///
/// The engine never looks inside a symbol: it only compares symbols for
/// equality and clones the matched one into the parse result. Characters,
/// bytes and lexer token enums all qualify.
pub trait Atomic: Clone + PartialEq + fmt::Debug {}

impl<T> Atomic for T where T: Clone + PartialEq + fmt::Debug {}
