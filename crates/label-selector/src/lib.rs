//! Kubernetes-style label selectors.
//!
//! [`parse`] compiles selector text such as `app=web, tier in (a, b), !canary`
//! into a [`Selector`], checking every key and value against the naming
//! grammar before returning it. A selector is an immutable predicate: it can
//! be evaluated any number of times, from any thread, against anything that
//! implements [`Labels`].
//!
//! ```
//! use std::collections::HashMap;
//! use label_selector::parse;
//!
//! let selector = parse("zoo=mar, moo=lar, thing").expect("selector should parse");
//! let labels = HashMap::from([("zoo", "mar"), ("moo", "lar"), ("thing", "map")]);
//! assert!(selector.matches(&labels));
//! ```

mod errors;
mod labels;
mod parser;
mod selector;
#[cfg(feature = "serde")]
mod serialization;
mod validation;

pub use errors::{NameError, SelectorError, SyntaxErrorInfo};
pub use labels::Labels;
pub use parser::parse;
pub use selector::Selector;
pub use validation::{MAX_DNS_PREFIX_LEN, MAX_KEY_NAME_LEN, MAX_VALUE_LEN, check_key, check_value};
