//! NULL sentinels for floating-point descriptors.

use crate::kernels::FloatKind;
use crate::traits::TypeInfo;
use crate::types::SqlType;
use crate::violation::{ContractViolation, DefaultHandler, ViolationHandler};

/// Resolves the precision of a floating-point descriptor.
pub fn float_kind_with<H, T>(ti: &T) -> FloatKind
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    if !ti.is_fp() {
        H::violate(ContractViolation::NotFloatingPoint(ti.sql_type()));
    }
    match ti.sql_type() {
        SqlType::Float => FloatKind::F32,
        SqlType::Double => FloatKind::F64,
        other => H::violate(ContractViolation::NotFloatingPoint(other)),
    }
}

/// Returns the NULL sentinel of a `FLOAT` or `DOUBLE` descriptor, widened to
/// `f64`. Encoding fields are ignored.
#[inline]
pub fn floating_null_value_with<H, T>(ti: &T) -> f64
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    float_kind_with::<H, T>(ti).null_value()
}

#[inline]
pub fn floating_null_value<T: TypeInfo + ?Sized>(ti: &T) -> f64 {
    floating_null_value_with::<DefaultHandler, T>(ti)
}

#[inline]
pub fn float_kind<T: TypeInfo + ?Sized>(ti: &T) -> FloatKind {
    float_kind_with::<DefaultHandler, T>(ti)
}
