use std::fmt;
use std::sync::Arc;

/// The kinds of byte-backed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    ArrayBuffer,
    DataView,
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl BinaryKind {
    pub fn bytes_per_element(self) -> usize {
        match self {
            BinaryKind::ArrayBuffer
            | BinaryKind::DataView
            | BinaryKind::Int8
            | BinaryKind::Uint8
            | BinaryKind::Uint8Clamped => 1,
            BinaryKind::Int16 | BinaryKind::Uint16 => 2,
            BinaryKind::Int32 | BinaryKind::Uint32 | BinaryKind::Float32 => 4,
            BinaryKind::Float64 | BinaryKind::BigInt64 | BinaryKind::BigUint64 => 8,
        }
    }
}

/// A raw buffer or a fixed-width view over one.
#[derive(Clone)]
pub struct Binary(pub(crate) Arc<BinaryData>);

pub(crate) struct BinaryData {
    kind: BinaryKind,
    bytes: Box<[u8]>,
}

impl Binary {
    /// Allocates `len` zeroed elements of `kind`.
    pub fn zeroed(kind: BinaryKind, len: usize) -> Self {
        let bytes = vec![0; len * kind.bytes_per_element()];
        Self::from_bytes(kind, bytes)
    }

    /// Wraps raw bytes. A trailing partial element is kept as bytes but not
    /// counted by [`Binary::len`].
    pub fn from_bytes(kind: BinaryKind, bytes: impl Into<Box<[u8]>>) -> Self {
        Self(Arc::new(BinaryData {
            kind,
            bytes: bytes.into(),
        }))
    }

    pub fn kind(&self) -> BinaryKind {
        self.0.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    pub fn byte_length(&self) -> usize {
        self.0.bytes.len()
    }

    /// Number of whole elements.
    pub fn len(&self) -> usize {
        self.byte_length() / self.kind().bytes_per_element()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({} bytes)", self.kind(), self.byte_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_lengths() {
        let view = Binary::zeroed(BinaryKind::Float64, 4);
        assert_eq!(view.len(), 4);
        assert_eq!(view.byte_length(), 32);

        let view = Binary::zeroed(BinaryKind::Int8, 20);
        assert_eq!(view.len(), 20);
        assert_eq!(view.byte_length(), 20);
    }

    #[test]
    fn test_partial_element() {
        let view = Binary::from_bytes(BinaryKind::Uint32, vec![1, 2, 3, 4, 5]);
        assert_eq!(view.len(), 1);
        assert_eq!(view.byte_length(), 5);
        assert!(!view.is_empty());
    }
}
