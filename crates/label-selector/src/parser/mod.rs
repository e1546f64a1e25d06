//! Selector parsing: cursor, clause grammar, operators and value lists.
//!
//! ```text
//! selector := clause (',' clause)*
//! clause   := '!' key | key (op value | op '(' csv ')')?
//! op       := '=' | '==' | '!=' | 'in' | 'notin'
//! ```

mod cursor;
mod operator;
#[cfg(test)]
pub(crate) mod test_support;
mod value_list;

use crate::errors::{SelectorError, invalid_operator, invalid_selector};
use crate::selector::Selector;

use cursor::{Cursor, is_operator_char};
use operator::{Operator, read_operator};
use value_list::read_value_list;

/// Parse and validate a selector.
///
/// Clauses are separated by commas and combined with an implicit AND. A
/// trailing comma is accepted. The result has passed
/// [`Selector::validate`].
///
/// # Errors
/// Returns [`SelectorError::EmptySelector`] for blank input,
/// [`SelectorError::InvalidOperator`] or [`SelectorError::InvalidSelector`]
/// for syntax problems, and [`SelectorError::NameValidation`] when a key or
/// value breaks the naming rules. The first error encountered is returned.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use label_selector::parse;
///
/// let selector = parse("app=web, tier in (frontend, edge), !canary")
///     .expect("selector should parse");
/// let labels = HashMap::from([("app", "web"), ("tier", "edge")]);
/// assert!(selector.matches(&labels));
/// ```
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    Parser::new(input)
        .parse_selector()
        .inspect(|selector| log::debug!("accepted selector `{selector}`"))
        .inspect_err(|err| log::debug!("rejected selector {input:?}: {err}"))
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    fn parse_selector(mut self) -> Result<Selector, SelectorError> {
        self.cursor.skip_whitespace();
        if self.cursor.done() {
            return Err(SelectorError::EmptySelector);
        }

        let mut selector = self.parse_clause()?;
        while self.next_clause()? {
            selector = selector.and(self.parse_clause()?);
        }
        selector.validate()?;
        Ok(selector)
    }

    fn parse_clause(&mut self) -> Result<Selector, SelectorError> {
        self.cursor.skip_whitespace();
        if self.cursor.current() == Some('!') {
            self.cursor.advance();
            let key = self.cursor.read_word().to_owned();
            return Ok(self.traced(Selector::NotHasKey(key)));
        }

        let key = self.cursor.read_word().to_owned();
        if self.at_bare_key() {
            return Ok(self.traced(Selector::HasKey(key)));
        }

        let clause = match read_operator(&mut self.cursor)? {
            Operator::Equals | Operator::DoubleEquals => Selector::Equals {
                key,
                value: self.read_value()?,
            },
            Operator::NotEquals => Selector::NotEquals {
                key,
                value: self.read_value()?,
            },
            Operator::In => Selector::In {
                key,
                values: read_value_list(&mut self.cursor)?,
            },
            Operator::NotIn => Selector::NotIn {
                key,
                values: read_value_list(&mut self.cursor)?,
            },
        };
        Ok(self.traced(clause))
    }

    /// Look past whitespace for a comma or end of input without consuming it.
    fn at_bare_key(&mut self) -> bool {
        self.cursor.mark();
        self.cursor.skip_whitespace();
        let bare = matches!(self.cursor.current(), None | Some(','));
        self.cursor.restore();
        bare
    }

    fn read_value(&mut self) -> Result<String, SelectorError> {
        let value = self.cursor.read_word().to_owned();
        self.cursor.skip_whitespace();
        match self.cursor.current() {
            Some(ch) if is_operator_char(ch) => Err(invalid_operator(
                "unexpected operator after value",
                self.cursor.position(),
            )),
            _ => Ok(value),
        }
    }

    /// Consume the separator after a clause; `false` once the input is spent.
    fn next_clause(&mut self) -> Result<bool, SelectorError> {
        self.cursor.skip_whitespace();
        match self.cursor.current() {
            None => Ok(false),
            Some(',') => {
                self.cursor.advance();
                self.cursor.skip_whitespace();
                Ok(!self.cursor.done())
            }
            Some(_) => Err(invalid_selector(
                "expected ',' or end of selector",
                self.cursor.position(),
            )),
        }
    }

    fn traced(&self, clause: Selector) -> Selector {
        log::trace!(
            "parsed clause `{clause}` ending at byte {}",
            self.cursor.position()
        );
        clause
    }
}
