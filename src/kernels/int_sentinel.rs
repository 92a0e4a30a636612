//! This module contains the pure, stateless integer NULL sentinel table.
//!
//! Signed storage reserves its minimum value. The two narrow unsigned widths
//! exist only for dictionary ids, where code 0 is a real (usually the most
//! frequent) entry, so they reserve their maximum instead. Every sentinel is
//! returned widened to `i64`, the engine's scalar integer representation.

use num_traits::PrimInt;

use crate::violation::{ContractViolation, ViolationHandler};

//==================================================================================
// 1. Typed Sentinels
//==================================================================================

/// A primitive integer type with a reserved NULL value.
pub trait IntNullSentinel: PrimInt + Into<i64> {
    /// The stored bit pattern meaning NULL.
    const NULL: Self;

    /// The sentinel widened to the engine's 64-bit scalar.
    #[inline]
    fn null_value() -> i64 {
        Self::NULL.into()
    }
}

macro_rules! impl_int_null_sentinel {
    ($($T:ty => $null:expr),* $(,)?) => {
        $(
            impl IntNullSentinel for $T {
                const NULL: Self = $null;
            }
        )*
    };
}

impl_int_null_sentinel!(
    i8 => i8::MIN,
    i16 => i16::MIN,
    i32 => i32::MIN,
    i64 => i64::MIN,
    u8 => u8::MAX,
    u16 => u16::MAX,
);

/// Returns the NULL sentinel of `T`, widened to `i64`.
#[inline]
pub fn inline_int_null_value<T: IntNullSentinel>() -> i64 {
    T::null_value()
}

//==================================================================================
// 2. Runtime Width Dispatch
//==================================================================================

/// The storage widths that have an entry in the sentinel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
}

impl IntWidth {
    /// Looks up the table entry for `bits` of the given signedness. Unsigned
    /// 32- and 64-bit storage has no entry.
    pub fn from_bits(bits: u32, signed: bool) -> Option<Self> {
        match (bits, signed) {
            (8, true) => Some(Self::I8),
            (16, true) => Some(Self::I16),
            (32, true) => Some(Self::I32),
            (64, true) => Some(Self::I64),
            (8, false) => Some(Self::U8),
            (16, false) => Some(Self::U16),
            _ => None,
        }
    }

    #[inline]
    pub fn null_value(self) -> i64 {
        match self {
            Self::I8 => inline_int_null_value::<i8>(),
            Self::I16 => inline_int_null_value::<i16>(),
            Self::I32 => inline_int_null_value::<i32>(),
            Self::I64 => inline_int_null_value::<i64>(),
            Self::U8 => inline_int_null_value::<u8>(),
            Self::U16 => inline_int_null_value::<u16>(),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 => 32,
            Self::I64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        !matches!(self, Self::U8 | Self::U16)
    }
}

/// Returns the sentinel for an integer stored in `bits` bits, halting through
/// `H` when the width has no table entry.
#[inline]
pub fn integer_null_sentinel<H: ViolationHandler>(bits: u32, signed: bool) -> i64 {
    match IntWidth::from_bits(bits, signed) {
        Some(width) => width.null_value(),
        None => H::violate(ContractViolation::IntegerWidth { bits, signed }),
    }
}

/// Returns `-2^(bits-1)`, the minimum of a signed integer exactly `bits` wide.
///
/// Bit-narrowed columns are not limited to the table widths, so this is
/// computed rather than looked up. `bits` must be a multiple of 8 in `8..=64`.
#[inline]
pub fn narrowed_null_sentinel<H: ViolationHandler>(bits: i32) -> i64 {
    if bits <= 0 || bits > 64 || bits % 8 != 0 {
        H::violate(ContractViolation::FixedWidth(bits));
    }
    // Arithmetic shift keeps the sign bit, giving -2^(bits-1) without overflow at 64.
    i64::MIN >> (64 - bits)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
