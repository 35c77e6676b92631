// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::Value;
use crate::FoamError;

mod access;
mod edit;
mod merge;

pub use merge::map_keys_onto;

/// A sequence of keys from a dictionary root to a node.
pub type KeyPath = Vec<String>;

/// Where a positional insert places the new key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    End,
    Before(String),
    After(String),
}

impl Position {
    pub fn before(key: impl Into<String>) -> Self {
        Position::Before(key.into())
    }

    pub fn after(key: impl Into<String>) -> Self {
        Position::After(key.into())
    }
}

/// Order-preserving mapping from key to [`Value`]. Entry order is the on-disk order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct OrderedDict {
    entries: IndexMap<String, Value>,
}

impl OrderedDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Keys of this level, in order.
    pub fn level_keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Entry lookup at this level only.
    pub fn entry(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Appends without the duplicate check; a repeated key keeps its first
    /// position and takes the new value.
    pub(crate) fn push(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    /// Builder-style append used when assembling trees in code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Index a new key would take for `position`, or the missing anchor key.
    fn anchor_index<'p>(&self, position: &'p Position) -> Result<usize, &'p str> {
        match position {
            Position::End => Ok(self.entries.len()),
            Position::Before(anchor) => self.entries.get_index_of(anchor.as_str()).ok_or(anchor.as_str()),
            Position::After(anchor) => self
                .entries
                .get_index_of(anchor.as_str())
                .map(|i| i + 1)
                .ok_or(anchor.as_str()),
        }
    }
}

// Two dictionaries are equal only when they hold the same entries in the same order.
impl PartialEq for OrderedDict {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(other.entries.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for OrderedDict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut dict = OrderedDict::new();
        for (k, v) in iter {
            dict.entries.insert(k.into(), v);
        }
        dict
    }
}

pub(crate) fn owned<S: AsRef<str>>(path: &[S]) -> KeyPath {
    path.iter().map(|s| s.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests;
