//! Finite-state recognition of selector operators.
//!
//! The scanner is anchored at the cursor and takes the longest literal among
//! `=`, `==`, `!=`, `in` and `notin`. Anything else is an operator error.

use crate::errors::{SelectorError, invalid_operator};

use super::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Equals,
    DoubleEquals,
    NotEquals,
    In,
    NotIn,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    Equals,
    Bang,
    I,
    N,
    No,
    Not,
    Noti,
}

enum Step {
    /// Consume the rune and continue in the given state.
    Shift(State),
    /// Consume the rune and finish.
    Accept(Operator),
    /// Finish without consuming the rune.
    Stop(Operator),
    Reject,
}

const fn step(state: State, ch: Option<char>) -> Step {
    match (state, ch) {
        (State::Start, Some('=')) => Step::Shift(State::Equals),
        (State::Start, Some('!')) => Step::Shift(State::Bang),
        (State::Start, Some('i')) => Step::Shift(State::I),
        (State::Start, Some('n')) => Step::Shift(State::N),
        (State::Equals, Some('=')) => Step::Accept(Operator::DoubleEquals),
        (State::Equals, _) => Step::Stop(Operator::Equals),
        (State::Bang, Some('=')) => Step::Accept(Operator::NotEquals),
        (State::I, Some('n')) => Step::Accept(Operator::In),
        (State::N, Some('o')) => Step::Shift(State::No),
        (State::No, Some('t')) => Step::Shift(State::Not),
        (State::Not, Some('i')) => Step::Shift(State::Noti),
        (State::Noti, Some('n')) => Step::Accept(Operator::NotIn),
        _ => Step::Reject,
    }
}

/// Skip whitespace and consume one operator.
///
/// # Errors
/// Returns [`SelectorError::InvalidOperator`] positioned at the start of the
/// operator when the runes do not spell a known operator.
pub(crate) fn read_operator(cursor: &mut Cursor<'_>) -> Result<Operator, SelectorError> {
    cursor.skip_whitespace();
    let start = cursor.position();
    let mut state = State::Start;
    loop {
        match step(state, cursor.current()) {
            Step::Shift(next) => {
                cursor.advance();
                state = next;
            }
            Step::Accept(operator) => {
                cursor.advance();
                return Ok(operator);
            }
            Step::Stop(operator) => return Ok(operator),
            Step::Reject => return Err(invalid_operator("unrecognised operator", start)),
        }
    }
}
