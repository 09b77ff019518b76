mod binary;
mod collection;
#[cfg(feature = "serde")]
mod json;
mod record;
mod symbol;

pub use binary::*;
pub use collection::*;
pub use record::*;
pub use symbol::*;

use num_bigint::BigInt;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A dynamically-typed value.
///
/// Primitives are held inline. Everything else is a cheap-to-clone handle
/// whose identity is the address of its shared allocation, so a graph can
/// share nodes and, through [`Map`], [`Set`] and [`Record`], contain cycles.
///
/// Equality and hashing follow SameValueZero: primitives compare by value
/// (`NaN` equals itself, `+0` equals `-0`), handles compare by identity.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Array(Array),
    Binary(Binary),
    Date(Date),
    Map(Map),
    Set(Set),
    Record(Record),
    Function(Function),
}

impl Value {
    /// Returns true for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Binary(_) => "binary",
            Value::Date(_) => "date",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

// Canonical bits so that every NaN hashes alike and -0 hashes as +0.
fn number_bits(number: f64) -> u64 {
    if number.is_nan() {
        f64::NAN.to_bits()
    } else if number == 0.0 {
        0
    } else {
        number.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => number_bits(*a) == number_bits(*b),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(value) => value.hash(state),
            Value::Number(number) => number_bits(*number).hash(state),
            Value::BigInt(value) => value.hash(state),
            Value::String(value) => value.hash(state),
            Value::Symbol(value) => value.hash(state),
            Value::Array(value) => value.hash(state),
            Value::Binary(value) => value.hash(state),
            Value::Date(value) => value.hash(state),
            Value::Map(value) => value.hash(state),
            Value::Set(value) => value.hash(state),
            Value::Record(value) => value.hash(state),
            Value::Function(value) => value.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(value) => fmt::Debug::fmt(value, f),
            Value::Number(value) => fmt::Debug::fmt(value, f),
            Value::BigInt(value) => write!(f, "{}n", value),
            Value::String(value) => fmt::Debug::fmt(value, f),
            Value::Symbol(value) => fmt::Debug::fmt(value, f),
            Value::Array(value) => fmt::Debug::fmt(value, f),
            Value::Binary(value) => fmt::Debug::fmt(value, f),
            Value::Date(value) => fmt::Debug::fmt(value, f),
            Value::Map(value) => fmt::Debug::fmt(value, f),
            Value::Set(value) => fmt::Debug::fmt(value, f),
            Value::Record(value) => fmt::Debug::fmt(value, f),
            Value::Function(value) => fmt::Debug::fmt(value, f),
        }
    }
}

/// A point in time, held as milliseconds since the Unix epoch.
#[derive(Clone)]
pub struct Date(Arc<f64>);

impl Date {
    pub fn from_millis(millis: f64) -> Self {
        Self(Arc::new(millis))
    }

    pub fn now() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(f64::NAN);

        Self::from_millis(millis)
    }

    pub fn millis(&self) -> f64 {
        *self.0
    }
}

/// An opaque callable. Carries nothing the size estimate looks at.
#[derive(Clone)]
pub struct Function(Arc<Option<String>>);

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(Some(name.into())))
    }

    pub fn anonymous() -> Self {
        Self(Arc::new(None))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

macro_rules! impl_identity {
    ( $( $type:ty ),+ $(,)* ) => {
        $(
            impl $type {
                /// Address of the shared allocation behind this handle.
                pub fn address(&self) -> *const () {
                    Arc::as_ptr(&self.0) as *const ()
                }

                pub fn ptr_eq(&self, other: &Self) -> bool {
                    Arc::ptr_eq(&self.0, &other.0)
                }
            }

            impl PartialEq for $type {
                fn eq(&self, other: &Self) -> bool {
                    self.ptr_eq(other)
                }
            }

            impl Eq for $type {}

            impl Hash for $type {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.address().hash(state);
                }
            }
        )+
    };
}

impl_identity!(Symbol, Array, Binary, Date, Map, Set, Record, Function);

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.millis())
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name().unwrap_or("<anonymous>"))
    }
}

// Conversions.
macro_rules! impl_from_for_number {
    ( $( $type:ty ),+ $(,)* ) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_for_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_for_variant {
    ( $( $variant:ident ( $type:ty ) ),+ $(,)* ) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

impl_from_for_variant!(
    Bool(bool),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Array(Array),
    Binary(Binary),
    Date(Date),
    Map(Map),
    Set(Set),
    Record(Record),
    Function(Function),
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}
