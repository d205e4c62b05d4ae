/// A position in a labelled input buffer.
///
/// Every parse starts at a cursor and, on success, hands back a new cursor just past the
/// consumed text.  Cursors are plain values; nothing is shared between parses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor<'i> {
    source_name: &'i str,
    input: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    /// A cursor at the start of `input`.  `source_name` is only used for diagnostics.
    pub fn new(source_name: &'i str, input: &'i str) -> Self {
        Cursor {
            source_name,
            input,
            offset: 0,
        }
    }

    pub fn source_name(&self) -> &'i str {
        self.source_name
    }

    pub fn input(&self) -> &'i str {
        self.input
    }

    /// Byte offset into the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The not yet consumed part of the input.
    pub fn remaining(&self) -> &'i str {
        &self.input[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// 1-based line and column (in characters) of the cursor.
    pub fn line_col(&self) -> (usize, usize) {
        let consumed = &self.input[..self.offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |idx| idx + 1);
        let col = consumed[line_start..].chars().count() + 1;
        (line, col)
    }

    pub(crate) fn advance(self, len: usize) -> Self {
        debug_assert!(self.offset + len <= self.input.len());
        Cursor {
            offset: self.offset + len,
            ..self
        }
    }

    /// Skips any run of newline characters, as found between top-level entries.
    pub fn skip_newlines(self) -> Self {
        let rest = self.remaining();
        let skipped = rest.len() - rest.trim_start_matches(&['\r', '\n'][..]).len();
        self.advance(skipped)
    }
}

/// A successfully parsed value together with the cursor just after it.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<'i, T> {
    pub value: T,
    pub rest: Cursor<'i>,
}

impl<'i, T> Parsed<'i, T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<'i, U> {
        Parsed {
            value: f(self.value),
            rest: self.rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col() {
        let cursor = Cursor::new("test", "ab\ncdé\nf");
        assert_eq!(cursor.line_col(), (1, 1));
        assert_eq!(cursor.advance(2).line_col(), (1, 3));
        assert_eq!(cursor.advance(3).line_col(), (2, 1));
        assert_eq!(cursor.advance(7).line_col(), (2, 4));
        assert_eq!(cursor.advance(8).line_col(), (3, 1));
    }

    #[test]
    fn skip_newlines() {
        let cursor = Cursor::new("test", "a\n\r\n\nb").advance(1).skip_newlines();
        assert_eq!(cursor.remaining(), "b");
        assert!(!cursor.is_at_end());
        assert!(cursor.advance(1).is_at_end());
        assert_eq!(cursor.input(), "a\n\r\n\nb");
        assert_eq!(cursor.offset(), 5);
    }

    #[test]
    fn map_keeps_rest() {
        let rest = Cursor::new("test", "12 rest").advance(2);
        let parsed = Parsed { value: "12", rest }.map(|s| s.len());
        assert_eq!(parsed, Parsed { value: 2, rest });
        assert_eq!(parsed.rest.remaining(), " rest");
    }
}
