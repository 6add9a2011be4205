use crate::atomic::Atomic;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable position in a sequence of symbols. Parsers never
/// mutate a cursor: they derive new ones with [`Cursor::advance`] and hand them
/// back inside a successful outcome. Because cursors are `Copy`, a caller keeps
/// its own cursor after passing it to a parse attempt, which is what makes
/// backtracking free.
pub trait Cursor<'code>: Copy + fmt::Debug + 'code {
    /// The type of symbols this cursor iterates over
    type Element: Atomic;

    /// Get the symbol at the current position, or `None` at end of input
    fn current(&self) -> Option<Self::Element>;

    /// Return a cursor one symbol further along
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn advance(&self) -> Self;

    /// Get the current position in the sequence
    ///
    /// Positions only grow as the cursor advances. For end-of-input cursors
    /// this is the length of the sequence.
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }
}
