//! Codepoint-aware read head over selector source text.

/// Runes that terminate a bare word.
///
/// `<` and `>` are not operators, but they end a word so the operator scanner
/// can reject them.
pub(crate) const fn is_symbol(ch: char) -> bool {
    matches!(ch, '=' | '!' | '(' | ')' | ',' | '<' | '>')
}

/// Runes that may start an operator.
pub(crate) const fn is_operator_char(ch: char) -> bool {
    matches!(ch, '=' | '!' | '<' | '>')
}

fn is_word_char(ch: char) -> bool {
    !ch.is_whitespace() && !is_symbol(ch)
}

/// Read head with a single remembered offset for lookahead.
///
/// The offset always sits on a UTF-8 boundary; [`Cursor::advance`] steps over
/// a whole codepoint.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    mark: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            mark: None,
        }
    }

    /// Current byte offset.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// The rune under the cursor, or `None` at end of input.
    pub(crate) fn current(&self) -> Option<char> {
        self.source
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
    }

    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.pos += ch.len_utf8();
        }
    }

    pub(crate) const fn done(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Remember the current offset, replacing any earlier mark.
    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Return to the remembered offset and clear the mark.
    pub(crate) fn restore(&mut self) {
        if let Some(pos) = self.mark.take() {
            self.pos = pos;
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Skip leading whitespace, then consume the maximal run of word runes.
    ///
    /// Leaves the cursor on the whitespace or symbol that ended the word.
    pub(crate) fn read_word(&mut self) -> &'a str {
        self.skip_whitespace();
        let start = self.pos;
        while self.current().is_some_and(is_word_char) {
            self.advance();
        }
        self.source.get(start..self.pos).unwrap_or_default()
    }
}
