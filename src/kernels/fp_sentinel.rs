//! Floating-point NULL sentinels.
//!
//! Unlike integers there is no encoding variation: every `FLOAT` column uses
//! [`NULL_FLOAT`] and every `DOUBLE` column uses [`NULL_DOUBLE`]. Both are the
//! smallest positive normal value of their precision.

/// The reserved NULL for 32-bit floats.
pub const NULL_FLOAT: f32 = f32::MIN_POSITIVE;

/// The reserved NULL for 64-bit floats.
pub const NULL_DOUBLE: f64 = f64::MIN_POSITIVE;

/// A float type with a reserved NULL value.
pub trait FpNullSentinel: Copy {
    const NULL: Self;

    /// Raw bits of `self`, widened to `u64`.
    fn bits(self) -> u64;

    /// Bitwise comparison with the sentinel. `NaN` payloads and `-0.0` never
    /// compare equal by accident.
    #[inline]
    fn is_null(self) -> bool {
        self.bits() == Self::NULL.bits()
    }
}

impl FpNullSentinel for f32 {
    const NULL: Self = NULL_FLOAT;

    #[inline]
    fn bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl FpNullSentinel for f64 {
    const NULL: Self = NULL_DOUBLE;

    #[inline]
    fn bits(self) -> u64 {
        self.to_bits()
    }
}

#[inline]
pub fn inline_fp_null_value<T: FpNullSentinel>() -> T {
    T::NULL
}

/// The two floating-point precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    /// The sentinel of this precision widened to `f64`. Widening `f32` is exact,
    /// so narrowing the result back recovers `NULL_FLOAT` bit for bit.
    #[inline]
    pub fn null_value(self) -> f64 {
        match self {
            Self::F32 => f64::from(inline_fp_null_value::<f32>()),
            Self::F64 => inline_fp_null_value::<f64>(),
        }
    }

    pub fn byte_width(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}
