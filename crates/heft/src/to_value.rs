use crate::{Array, Binary, Date, Function, Map, Record, Set, Symbol, Value};
use indexmap::{IndexMap, IndexSet};
use num_bigint::BigInt;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Converts a Rust value into a [`Value`] graph.
///
/// Derivable for structs with `#[derive(ToValue)]`: named fields become the
/// string keys of a [`Record`], in declaration order.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

macro_rules! impl_to_value_via_from {
    ( $( $type:ty ),+ $(,)* ) => {
        $(
            impl ToValue for $type {
                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )+
    };
}

impl_to_value_via_from!(
    bool, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, BigInt, String, Symbol,
    Array, Binary, Date, Map, Set, Record, Function,
);

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Undefined
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        self.as_ref().to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Undefined, ToValue::to_value)
    }
}

// Sequences.
impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(Array::from(
            self.iter().map(ToValue::to_value).collect::<Vec<_>>(),
        ))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

// Mappings.
macro_rules! entries_to_map {
    ($entries:expr) => {
        Value::Map(
            $entries
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect::<Map>(),
        )
    };
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        entries_to_map!(self.iter())
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for IndexMap<K, V, S> {
    fn to_value(&self) -> Value {
        entries_to_map!(self.iter())
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        entries_to_map!(self.iter())
    }
}

// Sets.
impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(ToValue::to_value).collect::<Set>())
    }
}

impl<T: ToValue, S> ToValue for IndexSet<T, S> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(ToValue::to_value).collect::<Set>())
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(ToValue::to_value).collect::<Set>())
    }
}
