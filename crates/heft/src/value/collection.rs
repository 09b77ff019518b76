use super::Value;
use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// An ordered sequence of values. Immutable once built.
#[derive(Clone)]
pub struct Array(pub(crate) Arc<[Value]>);

impl Array {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values.into())
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// A shared, insertion-ordered mapping with unique keys.
#[derive(Clone, Default)]
pub struct Map(pub(crate) Arc<RwLock<IndexMap<Value, Value>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value for `key`. A replaced key keeps its
    /// position.
    pub fn insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.0.write().insert(key.into(), value.into())
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0.read_recursive().get(key).cloned()
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.read_recursive().contains_key(key)
    }

    pub fn remove(&self, key: &Value) -> Option<Value> {
        self.0.write().shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `visit` on every entry in insertion order while holding a
    /// shared lock.
    pub fn for_each_entry(&self, mut visit: impl FnMut(&Value, &Value)) {
        for (key, value) in self.0.read_recursive().iter() {
            visit(key, value);
        }
    }

    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.0
            .read_recursive()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self(Arc::new(RwLock::new(entries)))
    }
}

// Handles are printed shallowly; a graph may be cyclic.
impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map({:p}, {} entries)", self.address(), self.len())
    }
}

/// A shared, insertion-ordered collection of unique values.
#[derive(Clone, Default)]
pub struct Set(pub(crate) Arc<RwLock<IndexSet<Value>>>);

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when an equal value was already present.
    pub fn insert(&self, value: impl Into<Value>) -> bool {
        self.0.write().insert(value.into())
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.read_recursive().contains(value)
    }

    pub fn remove(&self, value: &Value) -> bool {
        self.0.write().shift_remove(value)
    }

    pub fn len(&self) -> usize {
        self.0.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `visit` on every value in insertion order while holding a
    /// shared lock.
    pub fn for_each_value(&self, mut visit: impl FnMut(&Value)) {
        for value in self.0.read_recursive().iter() {
            visit(value);
        }
    }

    pub fn values(&self) -> Vec<Value> {
        self.0.read_recursive().iter().cloned().collect()
    }
}

impl<V: Into<Value>> FromIterator<V> for Set {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let values = iter.into_iter().map(Into::into).collect();
        Self(Arc::new(RwLock::new(values)))
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({:p}, {} values)", self.address(), self.len())
    }
}
