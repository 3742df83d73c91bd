use std::collections::{btree_map, BTreeMap};
use url::form_urlencoded;

/// A set of request parameters, serialized into the query string of every call.
///
/// Each name maps to one or more values. Names are kept sorted so the encoded
/// query is deterministic; values of the same name keep their insertion order.
///
/// # Example
/// ```
/// use trello_sdk::Arguments;
///
/// let mut args = Arguments::from([("fields", "name,desc")]);
/// args.append("cards", "open");
///
/// assert_eq!(args.encode(), "cards=open&fields=name%2Cdesc");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arguments {
    params: BTreeMap<String, Vec<String>>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any values it already had.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), vec![value.into()]);
    }

    /// Add another value for `name`, keeping the existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.params.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Every `(name, value)` pair, one per value.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Arguments {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        args.extend(iter);
        args
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Arguments {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter(pairs)
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
