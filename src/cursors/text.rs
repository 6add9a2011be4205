use crate::cursor::Cursor;

/// Cursor over the characters of a borrowed string
///
/// Positions are byte offsets into the string, always on a character boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        StrCursor { text, offset: 0 }
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.text[self.offset..]
    }

    pub fn source(&self) -> &'code str {
        self.text
    }
}

impl<'code> Cursor<'code> for StrCursor<'code> {
    type Element = char;

    fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&self) -> Self {
        match self.current() {
            Some(ch) => StrCursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
            },
            None => *self,
        }
    }

    fn position(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = StrCursor::new("abc");

        assert_eq!(cursor.current(), Some('a'));
        let cursor = cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.remaining(), "bc");
        assert_eq!(cursor.source(), "abc");
    }

    #[test]
    fn test_empty_string() {
        let cursor = StrCursor::new("");

        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), cursor);
    }

    #[test]
    fn test_advance_past_end() {
        let cursor = StrCursor::new("x").advance();

        assert!(cursor.is_exhausted());
        assert_eq!(cursor.position(), 1);

        let cursor = cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = StrCursor::new("é→x");

        assert_eq!(cursor.current(), Some('é'));
        let cursor = cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), Some('→'));
        let cursor = cursor.advance();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn test_copy_independence() {
        let start = StrCursor::new("abcd");
        let moved = start.advance().advance();

        assert_eq!(moved.current(), Some('c'));
        assert_eq!(start.current(), Some('a'));
        assert_eq!(start.remaining(), "abcd");
    }
}
