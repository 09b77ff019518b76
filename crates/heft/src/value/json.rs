use super::{Array, Record, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect::<Array>())
            }
            serde_json::Value::Object(entries) => {
                let record = Record::new();
                for (key, value) in entries {
                    record.set(key, Value::from(value));
                }
                Value::Record(record)
            }
        }
    }
}
