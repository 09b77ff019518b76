use crate::{EstimateSize, Value, VisitTracker, WeightTable};

impl EstimateSize for Value {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        match self {
            Value::Undefined | Value::Null => 0,
            Value::Bool(value) => value.estimate_size(weights, tracker),
            Value::Number(value) => value.estimate_size(weights, tracker),
            Value::BigInt(value) => value.estimate_size(weights, tracker),
            Value::String(value) => value.estimate_size(weights, tracker),
            Value::Symbol(value) => value.estimate_size(weights, tracker),
            Value::Array(value) => value.estimate_size(weights, tracker),
            Value::Binary(value) => value.estimate_size(weights, tracker),
            Value::Date(value) => value.estimate_size(weights, tracker),
            Value::Map(value) => value.estimate_size(weights, tracker),
            Value::Set(value) => value.estimate_size(weights, tracker),
            Value::Record(value) => value.estimate_size(weights, tracker),
            Value::Function(value) => value.estimate_size(weights, tracker),
        }
    }
}
