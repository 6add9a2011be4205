use crate::atomic::Atomic;
use crate::cursor::Cursor;

/// Cursor over a borrowed slice of symbols, such as the token list of a lexer
#[derive(Debug, PartialEq, Eq)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }

    /// The symbols not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        match *self {
            AtomicCursor::Valid { data, position } => data.get(position..).unwrap_or(&[]),
            AtomicCursor::EndOfFile { .. } => &[],
        }
    }
}

// Copy for every T, since only the slice reference is held
impl<'code, T: Atomic> Clone for AtomicCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T: Atomic> Copy for AtomicCursor<'code, T> {}

impl<'code, T: Atomic + 'code> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;

    fn current(&self) -> Option<Self::Element> {
        match self {
            AtomicCursor::Valid { data, position } => data.get(*position).cloned(),
            AtomicCursor::EndOfFile { .. } => None,
        }
    }

    fn advance(&self) -> Self {
        match *self {
            AtomicCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    AtomicCursor::EndOfFile { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }
}
