//! The selector AST: matching, rendering and validation.

use std::fmt;
use std::str::FromStr;

use crate::errors::SelectorError;
use crate::labels::Labels;
use crate::validation::{check_key, check_value};

/// A compiled predicate over a label map.
///
/// Values are usually produced by [`parse`](crate::parse) but may be built
/// directly. `And` is the only composite variant and is kept flat: use
/// [`Selector::and`] or [`FromIterator`] to combine selectors.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use label_selector::Selector;
///
/// let selector = Selector::Equals { key: "app".into(), value: "web".into() }
///     .and(Selector::NotHasKey("canary".into()));
/// assert_eq!(selector.to_string(), "app=web, !canary");
/// assert!(selector.matches(&HashMap::from([("app", "web")])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The key is present, with any value.
    HasKey(String),
    /// The key is absent.
    NotHasKey(String),
    /// The key is present with exactly this value.
    Equals {
        /// Label key.
        key: String,
        /// Required value.
        value: String,
    },
    /// The key is absent, or present with a different value.
    NotEquals {
        /// Label key.
        key: String,
        /// Excluded value.
        value: String,
    },
    /// The key is present and its value is one of `values`.
    In {
        /// Label key.
        key: String,
        /// Accepted values, in source order.
        values: Vec<String>,
    },
    /// The key is absent, or its value is none of `values`.
    NotIn {
        /// Label key.
        key: String,
        /// Excluded values, in source order.
        values: Vec<String>,
    },
    /// Every member matches. An empty list matches everything.
    And(Vec<Selector>),
}

impl Selector {
    /// Evaluate the selector against `labels`.
    ///
    /// Absence of the key satisfies `NotHasKey`, `NotEquals` and `NotIn`.
    #[must_use]
    pub fn matches<L: Labels + ?Sized>(&self, labels: &L) -> bool {
        match self {
            Self::HasKey(key) => labels.get_label(key).is_some(),
            Self::NotHasKey(key) => labels.get_label(key).is_none(),
            Self::Equals { key, value } => labels.get_label(key) == Some(value.as_str()),
            Self::NotEquals { key, value } => labels.get_label(key) != Some(value.as_str()),
            Self::In { key, values } => labels
                .get_label(key)
                .is_some_and(|actual| contains(values, actual)),
            Self::NotIn { key, values } => labels
                .get_label(key)
                .is_none_or(|actual| !contains(values, actual)),
            Self::And(members) => members.iter().all(|member| member.matches(labels)),
        }
    }

    /// Check every key and value against the naming grammar.
    ///
    /// # Errors
    /// Returns the first failure from [`check_key`] or [`check_value`].
    pub fn validate(&self) -> Result<(), SelectorError> {
        match self {
            Self::HasKey(key) | Self::NotHasKey(key) => check_key(key),
            Self::Equals { key, value } | Self::NotEquals { key, value } => {
                check_key(key)?;
                check_value(value)
            }
            Self::In { key, values } | Self::NotIn { key, values } => {
                check_key(key)?;
                values.iter().try_for_each(|value| check_value(value))
            }
            Self::And(members) => members.iter().try_for_each(Self::validate),
        }
    }

    /// Combine two selectors under AND without nesting.
    ///
    /// An existing `And` on the left is extended in place; an `And` on the
    /// right has its members appended. Clause order is preserved.
    #[must_use]
    pub fn and(self, next: Self) -> Self {
        let mut members = match self {
            Self::And(members) => members,
            other => vec![other],
        };
        match next {
            Self::And(more) => members.extend(more),
            other => members.push(other),
        }
        Self::And(members)
    }
}

fn contains(values: &[String], actual: &str) -> bool {
    values.iter().any(|value| value == actual)
}

/// Fold selectors with [`Selector::and`].
///
/// No selectors yield the empty `And`; a single selector is returned as is.
impl FromIterator<Selector> for Selector {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter()
            .reduce(Self::and)
            .unwrap_or_else(|| Self::And(Vec::new()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HasKey(key) => f.write_str(key),
            Self::NotHasKey(key) => write!(f, "!{key}"),
            Self::Equals { key, value } => write!(f, "{key}={value}"),
            Self::NotEquals { key, value } => write!(f, "{key}!={value}"),
            Self::In { key, values } => write!(f, "{key} in ({})", values.join(", ")),
            Self::NotIn { key, values } => write!(f, "{key} notin ({})", values.join(", ")),
            Self::And(members) => {
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        crate::parse(value)
    }
}

impl TryFrom<&str> for Selector {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn has(key: &str) -> Selector {
        Selector::HasKey(key.into())
    }

    fn equals(key: &str, value: &str) -> Selector {
        Selector::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    fn not_equals(key: &str, value: &str) -> Selector {
        Selector::NotEquals {
            key: key.into(),
            value: value.into(),
        }
    }

    fn within(key: &str, values: &[&str]) -> Selector {
        Selector::In {
            key: key.into(),
            values: values.iter().map(|value| (*value).to_owned()).collect(),
        }
    }

    fn not_within(key: &str, values: &[&str]) -> Selector {
        Selector::NotIn {
            key: key.into(),
            values: values.iter().map(|value| (*value).to_owned()).collect(),
        }
    }

    fn labels() -> HashMap<&'static str, &'static str> {
        HashMap::from([("foo", "far"), ("moo", "bar"), ("empty", "")])
    }

    #[rstest]
    #[case(has("foo"), true)]
    #[case(has("empty"), true)]
    #[case(has("zoo"), false)]
    #[case(Selector::NotHasKey("foo".into()), false)]
    #[case(Selector::NotHasKey("zoo".into()), true)]
    #[case(equals("foo", "far"), true)]
    #[case(equals("foo", "bar"), false)]
    #[case(equals("zoo", "buzz"), false)]
    #[case(equals("empty", ""), true)]
    #[case(equals("zoo", ""), false)]
    #[case(not_equals("foo", "far"), false)]
    #[case(not_equals("foo", "bar"), true)]
    #[case(not_equals("zoo", "bar"), true)]
    #[case(within("foo", &["bar", "far"]), true)]
    #[case(within("foo", &["bar"]), false)]
    #[case(within("zoo", &["far"]), false)]
    #[case(within("foo", &[]), false)]
    #[case(within("empty", &["", "x"]), true)]
    #[case(not_within("foo", &["bar", "far"]), false)]
    #[case(not_within("foo", &["bar"]), true)]
    #[case(not_within("zoo", &["far"]), true)]
    #[case(not_within("foo", &[]), true)]
    #[case(Selector::And(Vec::new()), true)]
    #[case(Selector::And(vec![equals("foo", "far"), equals("moo", "bar")]), true)]
    #[case(Selector::And(vec![equals("foo", "far"), equals("moo", "lar")]), false)]
    fn evaluates_against_labels(#[case] selector: Selector, #[case] expected: bool) {
        assert_eq!(selector.matches(&labels()), expected, "{selector}");
    }

    #[test]
    fn equals_tracks_label_value_changes() {
        let mut labels = labels();
        for (key, value) in labels.clone() {
            assert!(equals(key, value).matches(&labels));
            labels.insert(key, "changed-value");
            assert!(!equals(key, value).matches(&labels));
            labels.insert(key, value);
        }
    }

    #[rstest]
    #[case(has("foo"), "foo")]
    #[case(Selector::NotHasKey("foo".into()), "!foo")]
    #[case(equals("foo", "bar"), "foo=bar")]
    #[case(equals("x", ""), "x=")]
    #[case(not_equals("foo", "bar"), "foo!=bar")]
    #[case(within("foo", &["bar", "baz"]), "foo in (bar, baz)")]
    #[case(not_within("foo", &[]), "foo notin ()")]
    #[case(within("x", &["foo", "", "baz"]), "x in (foo, , baz)")]
    #[case(Selector::And(vec![has("a"), Selector::NotHasKey("b".into())]), "a, !b")]
    #[case(Selector::And(Vec::new()), "")]
    fn renders_selector_syntax(#[case] selector: Selector, #[case] expected: &str) {
        assert_eq!(selector.to_string(), expected);
    }

    #[test]
    fn and_lifts_without_nesting() {
        let combined = has("a").and(has("b"));
        assert_eq!(combined, Selector::And(vec![has("a"), has("b")]));

        let extended = combined.and(has("c"));
        assert_eq!(extended, Selector::And(vec![has("a"), has("b"), has("c")]));

        let merged = has("z").and(extended);
        assert_eq!(
            merged,
            Selector::And(vec![has("z"), has("a"), has("b"), has("c")])
        );
    }

    #[test]
    fn collects_selectors_with_and_lift() {
        let none: Selector = std::iter::empty().collect();
        assert_eq!(none, Selector::And(Vec::new()));

        let one: Selector = std::iter::once(has("a")).collect();
        assert_eq!(one, has("a"));

        let many: Selector = [has("a"), has("b"), has("c")].into_iter().collect();
        assert_eq!(many, Selector::And(vec![has("a"), has("b"), has("c")]));
    }

    #[test]
    fn validates_every_member() {
        assert_eq!(
            Selector::And(vec![equals("app", "web"), within("tier", &["", "edge"])]).validate(),
            Ok(())
        );
        assert!(within("tier", &["ok", "-bad"]).validate().is_err());
        assert!(Selector::And(vec![has("ok"), has("bad_")]).validate().is_err());
        assert!(not_equals("_key", "value").validate().is_err());
    }

    #[test]
    fn parses_through_from_str() {
        let parsed: Result<Selector, _> = "foo=bar".parse();
        assert_eq!(parsed, Ok(equals("foo", "bar")));
        assert_eq!(
            Selector::try_from(""),
            Err(SelectorError::EmptySelector)
        );
    }
}
