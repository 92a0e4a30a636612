//! NULL sentinels under a descriptor's physical encoding.
//!
//! The value reserved for NULL follows the stored width, not the logical one:
//! a `DATE` narrowed to 16-bit days uses the `SMALLINT` sentinel, a `BIGINT`
//! packed into 24 bits uses `-2^23`. Each encoding resolves to a
//! [`PhysicalLayout`], which also tells readers how to decode a raw value.

use crate::kernels::{narrowed_null_sentinel, IntWidth};
use crate::sentinel::logical::logical_int_width_with;
use crate::traits::TypeInfo;
use crate::types::EncodingType;
use crate::violation::{ContractViolation, DefaultHandler, ViolationHandler};

/// How one value of an integer-family column is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalLayout {
    /// Stored bytes per value, `1..=8`.
    pub byte_width: usize,
    /// Whether the stored value sign-extends when widened to `i64`.
    pub signed: bool,
    /// The stored value meaning NULL, widened to `i64`.
    pub null_value: i64,
}

impl PhysicalLayout {
    fn from_width(width: IntWidth) -> Self {
        Self {
            byte_width: (width.bits() / 8) as usize,
            signed: width.is_signed(),
            null_value: width.null_value(),
        }
    }
}

/// Resolves the physical layout of `ti`, halting through `H` on any
/// descriptor that has no inline NULL convention.
pub fn physical_layout_with<H, T>(ti: &T) -> PhysicalLayout
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    match ti.compression() {
        EncodingType::None => PhysicalLayout::from_width(logical_int_width_with::<H, T>(ti)),
        EncodingType::DateInDays => match ti.comp_param() {
            0 | 32 => PhysicalLayout::from_width(IntWidth::I32),
            16 => PhysicalLayout::from_width(IntWidth::I16),
            width => H::violate(ContractViolation::DateInDaysWidth(width)),
        },
        EncodingType::Dict => {
            if !ti.is_string() {
                H::violate(ContractViolation::DictOnNonString(ti.sql_type()));
            }
            // 4-byte ids reuse the plain INT sentinel; only the narrow unsigned
            // ids reserve their maximum.
            match ti.size() {
                1 => PhysicalLayout::from_width(IntWidth::U8),
                2 => PhysicalLayout::from_width(IntWidth::U16),
                4 => PhysicalLayout::from_width(IntWidth::I32),
                size => H::violate(ContractViolation::DictStorageSize(size)),
            }
        }
        EncodingType::Fixed => {
            if !(ti.is_integer() || ti.is_time() || ti.is_decimal()) {
                H::violate(ContractViolation::FixedOnUnsupportedType(ti.sql_type()));
            }
            let bits = ti.comp_param();
            let null_value = narrowed_null_sentinel::<H>(bits);
            PhysicalLayout {
                byte_width: (bits / 8) as usize,
                signed: true,
                null_value,
            }
        }
        enc @ (EncodingType::RunLength
        | EncodingType::Diff
        | EncodingType::Sparse
        | EncodingType::GeoInt) => H::violate(ContractViolation::UnsupportedEncoding(enc)),
    }
}

#[inline]
pub fn physical_layout<T: TypeInfo + ?Sized>(ti: &T) -> PhysicalLayout {
    physical_layout_with::<DefaultHandler, T>(ti)
}

/// Returns the NULL sentinel of `ti` as stored, widened to `i64`.
#[inline]
pub fn encoded_null_value_with<H, T>(ti: &T) -> i64
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    physical_layout_with::<H, T>(ti).null_value
}

#[inline]
pub fn encoded_null_value<T: TypeInfo + ?Sized>(ti: &T) -> i64 {
    encoded_null_value_with::<DefaultHandler, T>(ti)
}
