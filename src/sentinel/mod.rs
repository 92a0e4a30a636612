//! Descriptor-relative NULL sentinels.
//!
//! A sentinel only means NULL relative to the descriptor it was resolved
//! from: `255` is NULL in a 1-byte dictionary column and an ordinary value in
//! a `SMALLINT` one. Every function here is pure, allocation-free and
//! constant-time, so it is safe to call from any number of threads.
//!
//! Each entry point comes in two forms. The plain one uses
//! [`crate::violation::DefaultHandler`]; the `_with` form takes the handler as
//! a type parameter.

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod encoded;
pub mod floating;
pub mod logical;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use encoded::{
    encoded_null_value, encoded_null_value_with, physical_layout, physical_layout_with,
    PhysicalLayout,
};
pub use floating::{float_kind, float_kind_with, floating_null_value, floating_null_value_with};
pub use logical::{logical_int_width_with, logical_null_value, logical_null_value_with};

use crate::kernels::{FloatKind, FpNullSentinel, NULL_FLOAT};
use crate::traits::TypeInfo;
use crate::violation::{DefaultHandler, ViolationHandler};

//==================================================================================
// 3. Read-Side Recognition
//==================================================================================

/// Returns `true` if `value`, read from a column stored under `ti` and
/// widened to `i64`, is that column's NULL.
#[inline]
pub fn is_null_encoded_with<H, T>(ti: &T, value: i64) -> bool
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    value == encoded_null_value_with::<H, T>(ti)
}

#[inline]
pub fn is_null_encoded<T: TypeInfo + ?Sized>(ti: &T, value: i64) -> bool {
    is_null_encoded_with::<DefaultHandler, T>(ti, value)
}

/// Returns `true` if `value`, read from a floating-point column and widened
/// to `f64`, is that column's NULL. The comparison is on bits; a `FLOAT`
/// column's sentinel widens to `f64` exactly, so nothing is rounded.
#[inline]
pub fn is_null_fp_with<H, T>(ti: &T, value: f64) -> bool
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    match float_kind_with::<H, T>(ti) {
        FloatKind::F32 => value.to_bits() == f64::from(NULL_FLOAT).to_bits(),
        FloatKind::F64 => value.is_null(),
    }
}

#[inline]
pub fn is_null_fp<T: TypeInfo + ?Sized>(ti: &T, value: f64) -> bool {
    is_null_fp_with::<DefaultHandler, T>(ti, value)
}

#[cfg(test)]
mod tests;
