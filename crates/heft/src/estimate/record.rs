use crate::estimate::first_visit;
use crate::{EstimateSize, Record, VisitTracker, WeightTable};

// A revisited record contributes nothing, keys included. The first sighting
// sums every enumerated key and the value it resolves to.
impl EstimateSize for Record {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        if !first_visit(tracker, self.address(), "record") {
            return 0;
        }

        let mut bytes = 0;
        for key in self.enumerate_keys() {
            bytes += key.estimate_size(weights, tracker);
            bytes += self.with_property(&key, |value| {
                value.map_or(0, |value| value.estimate_size(weights, tracker))
            });
        }
        bytes
    }
}

#[cfg(test)]
mod test_record_types {
    use super::*;
    use crate::{assert_estimate_eq, Symbol, Value};

    #[test]
    fn test_empty_record() {
        assert_estimate_eq!(Record::new(), 0);
    }

    #[test]
    fn test_flat_record() {
        let record = Record::new();
        record.set("abc", "def");
        assert_estimate_eq!(record, 12);
    }

    #[test]
    fn test_nullish_values_count_only_their_key() {
        let record = Record::new();
        record.set("depot_id", Value::Null);
        record.set("hasOwnProperty", Value::Undefined);
        assert_estimate_eq!(record, 2 * 8 + 2 * 14);
    }

    #[test]
    fn test_self_reference() {
        let record = Record::new();
        record.set("x", 1);
        record.set("d", record.clone());
        assert_estimate_eq!(record, 10 + 2);
    }

    #[test]
    fn test_inherited_properties_are_counted() {
        let prototype = Record::new();
        prototype.set("shared", 1);

        let record = Record::with_prototype(&prototype);
        record.set("own", true);
        assert_estimate_eq!(record, (6 + 4) + (12 + 8));
    }

    #[test]
    fn test_prototype_is_not_marked() {
        let prototype = Record::new();
        prototype.set("p", 1);

        let child = Record::with_prototype(&prototype);
        let holder = Record::new();
        holder.set("c", child);
        holder.set("q", prototype);

        // "c" + child's inherited "p" + "q" + prototype's own "p"
        assert_estimate_eq!(holder, 2 + 10 + 2 + 10);
    }

    #[test]
    fn test_hidden_symbol_keys_are_counted() {
        let record = Record::new();
        record.define(Symbol::new("abcd"), "efg", false);
        record.define("hidden", "efg", false);
        assert_estimate_eq!(record, 2 * 4 + 2 * 3);
    }
}
