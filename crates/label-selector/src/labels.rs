//! Read-only access to the label maps selectors are matched against.
//!
//! Selectors never copy or validate the map they inspect; they only need to
//! look a key up. The [`Labels`] trait captures that single capability so the
//! common map types can be matched directly.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A string-keyed map of string labels.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use label_selector::Labels;
///
/// let labels = HashMap::from([("app", "web")]);
/// assert_eq!(labels.get_label("app"), Some("web"));
/// assert_eq!(labels.get_label("tier"), None);
/// ```
pub trait Labels {
    /// Return the value stored under `key`, if any.
    fn get_label(&self, key: &str) -> Option<&str>;
}

impl<K, V, S> Labels for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_label(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V, S> Labels for hashbrown::HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_label(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> Labels for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get_label(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<L: Labels + ?Sized> Labels for &L {
    fn get_label(&self, key: &str) -> Option<&str> {
        (**self).get_label(key)
    }
}
