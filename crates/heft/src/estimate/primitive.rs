#[cfg(test)]
use crate::assert_estimate_eq;
use crate::{Date, EstimateSize, Function, VisitTracker, WeightTable};
use num_bigint::BigInt;

// Fixed-weight primitives.
impl EstimateSize for bool {
    fn estimate_size(&self, weights: &WeightTable, _: &mut dyn VisitTracker) -> usize {
        weights.boolean
    }
}

macro_rules! impl_estimate_size_for_number {
    ( $( $type:ty ),+ $(,)* ) => {
        $(
            impl EstimateSize for $type {
                fn estimate_size(&self, weights: &WeightTable, _: &mut dyn VisitTracker) -> usize {
                    weights.number
                }
            }
        )+
    };
}

// Dates weigh the same as the number they hold.
impl_estimate_size_for_number!(f64, BigInt, Date);

// Functions carry nothing the estimate looks at.
impl EstimateSize for Function {
    fn estimate_size(&self, _: &WeightTable, _: &mut dyn VisitTracker) -> usize {
        0
    }
}
