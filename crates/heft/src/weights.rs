/// Fixed byte weights for the primitive kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightTable {
    /// Bytes per UTF-16 code unit of a string or symbol description.
    pub string_unit: usize,
    pub boolean: usize,
    /// Also used for big integers and dates.
    pub number: usize,
}

impl WeightTable {
    pub const REFERENCE: WeightTable = WeightTable {
        string_unit: 2,
        boolean: 4,
        number: 8,
    };

    pub const fn new(string_unit: usize, boolean: usize, number: usize) -> Self {
        Self {
            string_unit,
            boolean,
            number,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}
