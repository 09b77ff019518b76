mod collection;
mod primitive;
mod record;
mod string;
mod value;

pub use string::utf16_len;

use crate::{Value, WeightTable};
use log::{debug, trace};
use std::collections::BTreeSet;

pub trait VisitTracker {
    /// When first called on a given address returns true, else returns false.
    fn track(&mut self, address: *const ()) -> bool;
}

impl VisitTracker for std::collections::BTreeSet<*const ()> {
    fn track(&mut self, address: *const ()) -> bool {
        self.insert(address)
    }
}

impl VisitTracker for std::collections::HashSet<*const ()> {
    fn track(&mut self, address: *const ()) -> bool {
        self.insert(address)
    }
}

pub trait EstimateSize {
    /// Returns the estimated size of the value in bytes.
    ///
    /// Recursively visits the value and its children, summing their weights.
    /// Maps, sets and records already known to `tracker` contribute 0.
    fn estimate_size(&self, weights: &WeightTable, tracker: &mut dyn VisitTracker) -> usize;
}

// Marks a shared composite as visited. Returns false on a revisit.
pub(crate) fn first_visit(tracker: &mut dyn VisitTracker, address: *const (), kind: &str) -> bool {
    let first = tracker.track(address);
    if !first {
        trace!("{} at {:p} already visited, counting 0", kind, address);
    }
    first
}

/// Estimates value sizes against a fixed [`WeightTable`].
///
/// Each call walks the graph depth first with its own visited set, so calls
/// are independent and share no state. Recursion depth follows the depth of
/// the graph; a graph deep enough to overflow the stack aborts the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeCalculator {
    weights: WeightTable,
}

impl SizeCalculator {
    pub const fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn estimate_size<T: EstimateSize + ?Sized>(&self, value: &T) -> usize {
        let mut visited = BTreeSet::<*const ()>::new();
        let size = value.estimate_size(&self.weights, &mut visited);
        debug!(
            "estimated {} bytes across {} shared composites",
            size,
            visited.len()
        );
        size
    }

    pub fn estimate_value(&self, value: &Value) -> usize {
        self.estimate_size(value)
    }
}

#[macro_export]
macro_rules! assert_estimate_eq {
    ($value:expr, $expected:expr $(,)*) => {
        $crate::assert_estimate_eq!($value, $expected, &$crate::WeightTable::REFERENCE);
    };

    ($value:expr, $expected:expr, $weights:expr $(,)*) => {
        assert_eq!(
            $crate::EstimateSize::estimate_size(
                &$value,
                $weights,
                &mut std::collections::BTreeSet::<*const ()>::new()
            ),
            $expected
        );
    };
}
