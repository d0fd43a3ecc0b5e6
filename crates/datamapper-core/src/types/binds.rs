//! Insertion-ordered named bind mapping.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::BindValue;

/// Named binds for one statement, in the order they were supplied.
/// Keys are stored without the leading `:`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binds {
    entries: Vec<(String, BindValue)>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl Binds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bind. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<BindValue>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Builder form of [`Binds::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&BindValue> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append every entry of `other`, replacing values of keys already present.
    pub fn extend(&mut self, other: Binds) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<BindValue>> FromIterator<(K, V)> for Binds {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut binds = Self::new();
        for (key, value) in iter {
            binds.insert(key, value);
        }
        binds
    }
}

impl IntoIterator for Binds {
    type Item = (String, BindValue);
    type IntoIter = std::vec::IntoIter<(String, BindValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a [`Binds`] from `key => value` pairs.
///
/// ```
/// use datamapper_core::binds;
///
/// let binds = binds! { "email" => "a@b.c", "ids" => vec![1, 3] };
/// assert_eq!(binds.len(), 2);
/// ```
#[macro_export]
macro_rules! binds {
    () => {
        $crate::types::Binds::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut binds = $crate::types::Binds::new();
        $(binds.insert($key, $value);)+
        binds
    }};
}

/// Serializes as a map, keys in insertion order.
impl Serialize for Binds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
