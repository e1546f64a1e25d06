//! Test helpers for asserting parser outcomes.
use super::parse;
use crate::errors::SelectorError;
use crate::selector::Selector;

pub(crate) fn parse_ok(source: &str) -> Selector {
    match parse(source) {
        Ok(selector) => selector,
        Err(err) => panic!("selector {source:?} should parse: {err}"),
    }
}

pub(crate) fn parse_err(source: &str) -> SelectorError {
    match parse(source) {
        Ok(selector) => panic!("selector {source:?} should fail, parsed as `{selector}`"),
        Err(err) => err,
    }
}
