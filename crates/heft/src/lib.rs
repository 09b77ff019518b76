//! Portable size estimates for dynamic value graphs.
//!
//! A [`Value`] is walked depth first and every primitive contributes a fixed
//! weight from a [`WeightTable`]: strings weigh per UTF-16 code unit,
//! booleans and numbers weigh a constant, byte buffers weigh their byte
//! length. Maps, sets and records are tracked by identity so cyclic graphs
//! terminate; a revisited one contributes 0.
//!
//! This is an estimate, not allocator accounting: headers, padding and
//! engine representations are not modelled.

mod estimate;
mod to_value;
mod value;
mod weights;

#[cfg(feature = "derive")]
pub use heft_derive::*;
pub use estimate::*;
pub use to_value::*;
pub use value::*;
pub use weights::*;

/// Estimates the size of `value` in bytes with [`WeightTable::REFERENCE`].
pub fn estimate_size<T: EstimateSize + ?Sized>(value: &T) -> usize {
    SizeCalculator::default().estimate_size(value)
}
