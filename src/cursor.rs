//! Forward-only cursor over a normalized DID URI.

/// A single-pass read position over a borrowed string.
///
/// The position is a byte offset that always sits on a character boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte offset.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the character under the cursor without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character `n` positions ahead without consuming anything.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consumes and returns the character under the cursor.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns the unconsumed remainder.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the text consumed since `start`.
    pub(crate) fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("did:");
        assert_eq!(cursor.peek(), Some('d'));
        assert_eq!(cursor.peek(), Some('d'));
        assert_eq!(cursor.peek_nth(3), Some(':'));
        assert_eq!(cursor.peek_nth(4), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bump_advances_by_char_width() {
        let mut cursor = Cursor::new("aé/");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('é'));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.rest(), "/");
        assert_eq!(cursor.since(1), "é");
        assert_eq!(cursor.bump(), Some('/'));
        assert_eq!(cursor.bump(), None);
        assert_eq!(cursor.position(), 4);
    }
}
