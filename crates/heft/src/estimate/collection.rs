#[cfg(test)]
use crate::assert_estimate_eq;
use crate::estimate::first_visit;
use crate::{Array, Binary, EstimateSize, Map, Set, VisitTracker, WeightTable};

// Arrays are walked transparently: never tracked, so an array reachable
// twice is counted twice. Being immutable, an array cannot contain itself.
impl EstimateSize for Array {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        self.iter()
            .map(|value| value.estimate_size(weights, tracker))
            .sum()
    }
}

// Buffers already know their size in bytes.
impl EstimateSize for Binary {
    fn estimate_size(&self, _: &WeightTable, _: &mut dyn VisitTracker) -> usize {
        self.byte_length()
    }
}

impl EstimateSize for Map {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        if !first_visit(tracker, self.address(), "map") {
            return 0;
        }

        let mut bytes = 0;
        self.for_each_entry(|key, value| {
            bytes += key.estimate_size(weights, tracker);
            bytes += value.estimate_size(weights, tracker);
        });
        bytes
    }
}

impl EstimateSize for Set {
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize {
        if !first_visit(tracker, self.address(), "set") {
            return 0;
        }

        let mut bytes = 0;
        self.for_each_value(|value| bytes += value.estimate_size(weights, tracker));
        bytes
    }
}

#[cfg(test)]
mod test_collection_types {
    use super::*;
    use crate::{BinaryKind, Record, Value};

    #[test]
    fn test_array() {
        assert_estimate_eq!(Array::new(), 0);
        assert_estimate_eq!(Array::from_iter(vec![1, 2, 3, 4]), 32);
        assert_estimate_eq!(Array::from_iter(vec!["a", "b", "c", "d"]), 8);
        assert_estimate_eq!(
            Array::from(vec![Value::Null, Value::Undefined, Value::from(3), Value::from(4)]),
            16
        );
    }

    #[test]
    fn test_array_is_not_tracked() {
        let array = Array::from_iter(vec![1, 2]);
        let outer = Array::from(vec![Value::from(array.clone()), Value::from(array)]);
        assert_estimate_eq!(outer, 32);
    }

    #[test]
    fn test_binary() {
        assert_estimate_eq!(Binary::zeroed(BinaryKind::Int8, 20), 20);
        assert_estimate_eq!(Binary::zeroed(BinaryKind::Float64, 4), 32);
        assert_estimate_eq!(Binary::zeroed(BinaryKind::ArrayBuffer, 0), 0);
        assert_estimate_eq!(
            Binary::zeroed(BinaryKind::Uint16, 3),
            6,
            &WeightTable::new(100, 100, 100)
        );
    }

    #[test]
    fn test_map() {
        assert_estimate_eq!(Map::new(), 0);

        let map = Map::new();
        map.insert(5, "Test");
        map.insert("65", "Again");
        assert_estimate_eq!(map, 30);
    }

    #[test]
    fn test_map_revisit_counts_zero() {
        let map = Map::new();
        let record = Record::new();
        record.set("a", 1);
        record.set("b", map.clone());
        map.insert(5, record);

        // 5 + ("a" + 1) + ("b" + revisited map)
        assert_estimate_eq!(map, 8 + 10 + 2);
    }

    #[test]
    fn test_map_keyed_by_itself() {
        let map = Map::new();
        map.insert(Value::from(map.clone()), "ab");
        assert_estimate_eq!(map, 4);
    }

    #[test]
    fn test_set() {
        assert_estimate_eq!(Set::new(), 0);

        let set = Set::new();
        set.insert("Test");
        set.insert("Again2");
        set.insert("Test");
        assert_estimate_eq!(set, 20);
    }

    #[test]
    fn test_set_holding_itself() {
        let set = Set::new();
        set.insert(true);
        set.insert(set.clone());
        assert_estimate_eq!(set, 4);
    }
}
