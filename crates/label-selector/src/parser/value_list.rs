//! Reader for the parenthesised value lists taken by `in` and `notin`.

use std::mem;

use crate::errors::{SelectorError, invalid_selector};

use super::cursor::{Cursor, is_symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    ExpectOpen,
    InWord,
    /// After `(` or `,`, possibly followed by whitespace.
    AfterSymbol,
    /// Whitespace after an item; only `,` or `)` may follow.
    AfterWord,
}

/// Read `( item (, item)* )`, leaving the cursor after the closing paren.
///
/// Items may be empty. The item pending at `)` is kept when it is non-empty
/// or when a comma has already been read, so `()` yields no values while
/// `(a,)` yields `["a", ""]`.
///
/// # Errors
/// Returns [`SelectorError::InvalidSelector`] when the opening paren is
/// missing, an item contains whitespace or a symbol, or the input ends before
/// the closing paren.
pub(crate) fn read_value_list(cursor: &mut Cursor<'_>) -> Result<Vec<String>, SelectorError> {
    let mut values = Vec::new();
    let mut word = String::new();
    let mut state = ListState::ExpectOpen;
    loop {
        let position = cursor.position();
        let Some(ch) = cursor.current() else {
            let message = if state == ListState::ExpectOpen {
                "expected '(' to open value list"
            } else {
                "unterminated value list"
            };
            return Err(invalid_selector(message, position));
        };
        let next = match state {
            ListState::ExpectOpen => match ch {
                '(' => Some(ListState::AfterSymbol),
                c if c.is_whitespace() => Some(ListState::ExpectOpen),
                _ => return Err(invalid_selector("expected '(' to open value list", position)),
            },
            ListState::AfterSymbol => match ch {
                ')' => {
                    if !values.is_empty() {
                        values.push(String::new());
                    }
                    None
                }
                ',' => {
                    values.push(String::new());
                    Some(ListState::AfterSymbol)
                }
                c if c.is_whitespace() => Some(ListState::AfterSymbol),
                c if is_symbol(c) => {
                    return Err(invalid_selector("unexpected symbol in value list", position));
                }
                c => {
                    word.push(c);
                    Some(ListState::InWord)
                }
            },
            ListState::InWord => match ch {
                ')' => {
                    values.push(mem::take(&mut word));
                    None
                }
                ',' => {
                    values.push(mem::take(&mut word));
                    Some(ListState::AfterSymbol)
                }
                c if c.is_whitespace() => Some(ListState::AfterWord),
                c if is_symbol(c) => {
                    return Err(invalid_selector("unexpected symbol in value list", position));
                }
                c => {
                    word.push(c);
                    Some(ListState::InWord)
                }
            },
            ListState::AfterWord => match ch {
                ')' => {
                    values.push(mem::take(&mut word));
                    None
                }
                ',' => {
                    values.push(mem::take(&mut word));
                    Some(ListState::AfterSymbol)
                }
                c if c.is_whitespace() => Some(ListState::AfterWord),
                _ => return Err(invalid_selector("whitespace inside value list item", position)),
            },
        };
        cursor.advance();
        let Some(following) = next else {
            return Ok(values);
        };
        state = following;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn read(source: &str) -> (Result<Vec<String>, SelectorError>, Option<char>) {
        let mut cursor = Cursor::new(source);
        let result = read_value_list(&mut cursor);
        (result, cursor.current())
    }

    #[rstest]
    #[case("(bar, baz, biz)", &["bar", "baz", "biz"], None)]
    #[case("()", &[], None)]
    #[case("( )", &[], None)]
    #[case("(), thing=after", &[], Some(','))]
    #[case("(foo, bar), buzz=light", &["foo", "bar"], Some(','))]
    #[case("(foo,,baz)", &["foo", "", "baz"], None)]
    #[case("(a,)", &["a", ""], None)]
    #[case("(, a)", &["", "a"], None)]
    #[case("  (single )", &["single"], None)]
    #[case("(v1.2-rc_3)", &["v1.2-rc_3"], None)]
    #[case("(수, 록)", &["수", "록"], None)]
    fn reads_value_lists(
        #[case] source: &str,
        #[case] expected: &[&str],
        #[case] next: Option<char>,
    ) {
        let (result, after) = read(source);
        let values = result.unwrap_or_else(|err| panic!("{source:?} should parse: {err}"));
        assert_eq!(values, expected);
        assert_eq!(after, next);
    }

    #[rstest]
    #[case("(bar, buzz, baz", "unterminated value list")]
    #[case("(test, space are bad)", "whitespace inside value list item")]
    #[case("bar, baz)", "expected '(' to open value list")]
    #[case("", "expected '(' to open value list")]
    #[case("((a))", "unexpected symbol in value list")]
    #[case("(a=b)", "unexpected symbol in value list")]
    #[case("(a", "unterminated value list")]
    fn rejects_malformed_lists(#[case] source: &str, #[case] message: &str) {
        let (result, _) = read(source);
        match result {
            Err(SelectorError::InvalidSelector(info)) => assert_eq!(info.message, message),
            other => panic!("{source:?} should be a structural error, got {other:?}"),
        }
    }
}
