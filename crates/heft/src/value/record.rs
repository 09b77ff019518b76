use super::{Symbol, Value};
use indexmap::map::Entry;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// The key of a record property.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    /// Returns the numeric index if this is a canonical array-index key:
    /// decimal digits without a leading zero, below `u32::MAX`.
    pub fn array_index(&self) -> Option<u32> {
        let key = match self {
            PropertyKey::String(key) => key,
            PropertyKey::Symbol(_) => return None,
        };

        if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
            return None;
        }
        if !key.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }

        key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::String(key.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        PropertyKey::String(key)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(key: Symbol) -> Self {
        PropertyKey::Symbol(key)
    }
}

macro_rules! impl_from_integer_for_property_key {
    ( $( $type:ty ),+ $(,)* ) => {
        $(
            impl From<$type> for PropertyKey {
                fn from(key: $type) -> Self {
                    PropertyKey::String(key.to_string())
                }
            }
        )+
    };
}

impl_from_integer_for_property_key!(i32, i64, u32, u64, usize);

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(key) => fmt::Debug::fmt(key, f),
            PropertyKey::Symbol(key) => write!(f, "[{}]", key),
        }
    }
}

struct Property {
    value: Value,
    enumerable: bool,
}

#[derive(Default)]
pub(crate) struct RecordData {
    properties: IndexMap<PropertyKey, Property>,
    prototype: Option<Record>,
}

/// A shared key/value store with an optional prototype.
///
/// Property lookups fall through to the prototype chain. Key enumeration
/// follows [`Record::enumerate_keys`].
#[derive(Clone, Default)]
pub struct Record(pub(crate) Arc<RwLock<RecordData>>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record inheriting from `prototype`.
    ///
    /// The prototype is fixed at construction so a chain can never loop.
    pub fn with_prototype(prototype: &Record) -> Self {
        Self(Arc::new(RwLock::new(RecordData {
            properties: IndexMap::new(),
            prototype: Some(prototype.clone()),
        })))
    }

    pub fn prototype(&self) -> Option<Record> {
        self.0.read_recursive().prototype.clone()
    }

    /// Sets an own property. New properties are enumerable; an existing
    /// property keeps its position and enumerability.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) {
        let value = value.into();
        match self.0.write().properties.entry(key.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().value = value,
            Entry::Vacant(entry) => {
                entry.insert(Property {
                    value,
                    enumerable: true,
                });
            }
        }
    }

    /// Defines an own property with explicit enumerability.
    pub fn define(&self, key: impl Into<PropertyKey>, value: impl Into<Value>, enumerable: bool) {
        self.0.write().properties.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable,
            },
        );
    }

    /// Looks `key` up on the record, then along its prototype chain.
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        self.with_property(key, |value| value.cloned())
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.with_property(key, |value| value.is_some())
    }

    pub fn contains_own_key(&self, key: &PropertyKey) -> bool {
        self.0.read_recursive().properties.contains_key(key)
    }

    pub fn remove(&self, key: &PropertyKey) -> Option<Value> {
        self.0
            .write()
            .properties
            .shift_remove(key)
            .map(|property| property.value)
    }

    /// Number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.0.read_recursive().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves `key` through the prototype chain and hands the value to
    /// `visit` while the owning record is read-locked.
    pub fn with_property<R>(&self, key: &PropertyKey, visit: impl FnOnce(Option<&Value>) -> R) -> R {
        let data = self.0.read_recursive();
        match data.properties.get(key) {
            Some(property) => visit(Some(&property.value)),
            None => match &data.prototype {
                Some(prototype) => prototype.with_property(key, visit),
                None => visit(None),
            },
        }
    }

    /// Collects the keys a size walk visits, in order:
    ///
    /// 1. string keys of the record and then of each prototype: array-index
    ///    keys ascending, then the rest in insertion order. Only enumerable
    ///    keys not shadowed by a closer record are kept.
    /// 2. every own symbol key, enumerable or not, in insertion order.
    pub fn enumerate_keys(&self) -> Vec<PropertyKey> {
        let mut keys = Vec::new();
        let mut seen = HashSet::new();

        let mut current = Some(self.clone());
        while let Some(record) = current {
            let data = record.0.read_recursive();

            let mut indexed = Vec::new();
            let mut named = Vec::new();
            for (key, property) in data.properties.iter() {
                if key.is_symbol() {
                    continue;
                }
                match key.array_index() {
                    Some(index) => indexed.push((index, key, property.enumerable)),
                    None => named.push((key, property.enumerable)),
                }
            }
            indexed.sort_by_key(|(index, ..)| *index);

            let ordered = indexed
                .into_iter()
                .map(|(_, key, enumerable)| (key, enumerable))
                .chain(named);
            for (key, enumerable) in ordered {
                if seen.insert(key.clone()) && enumerable {
                    keys.push(key.clone());
                }
            }

            current = data.prototype.clone();
        }

        keys.extend(
            self.0
                .read_recursive()
                .properties
                .keys()
                .filter(|key| key.is_symbol())
                .cloned(),
        );

        keys
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({:p}, {} properties)", self.address(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_keys(record: &Record) -> Vec<String> {
        record
            .enumerate_keys()
            .into_iter()
            .map(|key| match key {
                PropertyKey::String(key) => key,
                PropertyKey::Symbol(symbol) => symbol.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_array_index() {
        assert_eq!(PropertyKey::from("0").array_index(), Some(0));
        assert_eq!(PropertyKey::from("100").array_index(), Some(100));
        assert_eq!(PropertyKey::from("007").array_index(), None);
        assert_eq!(PropertyKey::from("-1").array_index(), None);
        assert_eq!(PropertyKey::from("1.5").array_index(), None);
        assert_eq!(PropertyKey::from("").array_index(), None);
        assert_eq!(PropertyKey::from("4294967295").array_index(), None);
        assert_eq!(PropertyKey::from(Symbol::new("1")).array_index(), None);
    }

    #[test]
    fn test_set_keeps_position() {
        let record = Record::new();
        record.set("b", 1);
        record.set("a", 2);
        record.set("b", 3);
        assert_eq!(string_keys(&record), vec!["b", "a"]);
        assert_eq!(record.get(&"b".into()), Some(Value::from(3)));
    }

    #[test]
    fn test_enumeration_order() {
        let symbol = Symbol::new("s");
        let record = Record::new();
        record.set(symbol, true);
        record.set("z", 1);
        record.set(10, 1);
        record.set("a", 1);
        record.set(2, 1);
        assert_eq!(string_keys(&record), vec!["2", "10", "z", "a", "Symbol(s)"]);
    }

    #[test]
    fn test_inherited_keys() {
        let prototype = Record::new();
        prototype.set("inherited", 1);
        prototype.set("shadowed", 2);
        prototype.set("hidden", 3);
        prototype.set(Symbol::new("not-own"), 4);

        let record = Record::with_prototype(&prototype);
        record.set("own", 5);
        record.define("hidden", 6, false);
        record.set("shadowed", 7);

        assert_eq!(string_keys(&record), vec!["own", "shadowed", "inherited"]);
        assert_eq!(record.get(&"inherited".into()), Some(Value::from(1)));
        assert_eq!(record.get(&"shadowed".into()), Some(Value::from(7)));
        assert!(!record.contains_own_key(&"inherited".into()));
        assert!(record.contains_key(&"inherited".into()));
    }

    #[test]
    fn test_non_enumerable_symbols_are_listed() {
        let symbol = Symbol::new("hidden");
        let record = Record::new();
        record.define(symbol.clone(), 1, false);
        record.define("hidden", 1, false);
        assert_eq!(record.enumerate_keys(), vec![PropertyKey::Symbol(symbol)]);
    }

    #[test]
    fn test_remove() {
        let record = Record::new();
        record.set("a", 1);
        assert_eq!(record.remove(&"a".into()), Some(Value::from(1)));
        assert!(record.is_empty());
        assert_eq!(record.remove(&"a".into()), None);
    }
}
