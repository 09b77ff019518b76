#[cfg(test)]
use crate::assert_estimate_eq;
use crate::{EstimateSize, PropertyKey, Symbol, VisitTracker, WeightTable, SYMBOL_DECORATION_LEN};

/// Length of `string` in UTF-16 code units.
pub fn utf16_len(string: &str) -> usize {
    string.encode_utf16().count()
}

// String types.
impl EstimateSize for str {
    fn estimate_size(&self, weights: &WeightTable, _: &mut dyn VisitTracker) -> usize {
        utf16_len(self) * weights.string_unit
    }
}

impl EstimateSize for String {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        self.as_str().estimate_size(weights, tracker)
    }
}

// Symbols weigh their registry key when global, else their description as
// recovered from the `Symbol(…)` display form.
impl EstimateSize for Symbol {
    fn estimate_size(&self, weights: &WeightTable, _: &mut dyn VisitTracker) -> usize {
        let units = match self.key_for() {
            Some(key) => utf16_len(&key),
            None => utf16_len(&self.to_string()).saturating_sub(SYMBOL_DECORATION_LEN),
        };

        units * weights.string_unit
    }
}

impl EstimateSize for PropertyKey {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        match self {
            PropertyKey::String(key) => key.estimate_size(weights, tracker),
            PropertyKey::Symbol(key) => key.estimate_size(weights, tracker),
        }
    }
}
