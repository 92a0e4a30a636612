//! NULL sentinels for uncompressed descriptors.
//!
//! Temporal, interval and decimal values are always carried as 64-bit
//! integers in memory, whatever precision they were declared with, so they
//! share the `BIGINT` sentinel. Dictionary-encoded strings are carried as
//! their 32-bit id.

use crate::kernels::IntWidth;
use crate::traits::TypeInfo;
use crate::types::{EncodingType, SqlType, DICT_LOGICAL_SIZE};
use crate::violation::{ContractViolation, DefaultHandler, ViolationHandler};

/// Maps the logical type of `ti` to the integer width its sentinel is taken from.
pub fn logical_int_width_with<H, T>(ti: &T) -> IntWidth
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    let mut sql_type = ti.sql_type();
    if ti.is_string() {
        if ti.compression() != EncodingType::Dict {
            H::violate(ContractViolation::StringNotDictEncoded(ti.compression()));
        }
        if ti.logical_size() != DICT_LOGICAL_SIZE {
            H::violate(ContractViolation::DictLogicalSize(ti.logical_size()));
        }
        sql_type = SqlType::Int;
    } else if ti.compression() != EncodingType::None {
        H::violate(ContractViolation::UnexpectedCompression(ti.compression()));
    }

    match sql_type {
        SqlType::Boolean | SqlType::TinyInt => IntWidth::I8,
        SqlType::SmallInt => IntWidth::I16,
        SqlType::Int => IntWidth::I32,
        SqlType::BigInt
        | SqlType::Timestamp
        | SqlType::Time
        | SqlType::Date
        | SqlType::IntervalDayTime
        | SqlType::IntervalYearMonth
        | SqlType::Decimal
        | SqlType::Numeric => IntWidth::I64,
        SqlType::Null
        | SqlType::Float
        | SqlType::Double
        | SqlType::Text
        | SqlType::Varchar
        | SqlType::Char
        | SqlType::Array
        | SqlType::Point => H::violate(ContractViolation::NoIntegerSentinel(sql_type)),
    }
}

/// Returns the NULL sentinel of an uncompressed integer-family descriptor,
/// or of a dictionary-encoded string read back as its 32-bit id.
#[inline]
pub fn logical_null_value_with<H, T>(ti: &T) -> i64
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    logical_int_width_with::<H, T>(ti).null_value()
}

#[inline]
pub fn logical_null_value<T: TypeInfo + ?Sized>(ti: &T) -> i64 {
    logical_null_value_with::<DefaultHandler, T>(ti)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use crate::violation::PanicOnViolation;

    fn null_of(sql_type: SqlType) -> i64 {
        logical_null_value_with::<PanicOnViolation, _>(&ColumnType::new(sql_type))
    }

    #[test]
    fn test_narrow_integer_types() {
        assert_eq!(null_of(SqlType::Boolean), i8::MIN as i64);
        assert_eq!(null_of(SqlType::TinyInt), i8::MIN as i64);
        assert_eq!(null_of(SqlType::SmallInt), i16::MIN as i64);
        assert_eq!(null_of(SqlType::Int), i32::MIN as i64);
    }

    #[test]
    fn test_temporal_and_decimal_use_bigint_sentinel() {
        for t in [
            SqlType::BigInt,
            SqlType::Timestamp,
            SqlType::Time,
            SqlType::Date,
            SqlType::IntervalDayTime,
            SqlType::IntervalYearMonth,
            SqlType::Decimal,
            SqlType::Numeric,
        ] {
            assert_eq!(null_of(t), i64::MIN, "{}", t);
        }
    }

    #[test]
    fn test_dict_string_reads_as_int_id() {
        // The logical path only looks at the decoded id, not the stored width.
        for size in [1, 2, 4] {
            let ti = ColumnType::dict_text(size);
            assert_eq!(logical_null_value_with::<PanicOnViolation, _>(&ti), i32::MIN as i64);
        }
    }

    #[test]
    #[should_panic(expected = "Dictionary encoded string must have logical size 4, got 8")]
    fn test_dict_string_with_wrong_logical_size_aborts() {
        let ti = ColumnType::dict_text(4).with_logical_size(8);
        logical_null_value_with::<PanicOnViolation, _>(&ti);
    }

    #[test]
    #[should_panic(expected = "String column must be dictionary encoded, got NONE")]
    fn test_plain_string_aborts() {
        logical_null_value_with::<PanicOnViolation, _>(&ColumnType::new(SqlType::Varchar));
    }

    #[test]
    #[should_panic(expected = "Expected an uncompressed type, got encoding FIXED")]
    fn test_compressed_non_string_aborts() {
        logical_null_value_with::<PanicOnViolation, _>(&ColumnType::fixed(SqlType::Int, 16));
    }

    #[test]
    #[should_panic(expected = "Type DOUBLE has no inline integer null")]
    fn test_float_has_no_integer_sentinel() {
        null_of(SqlType::Double);
    }

    #[test]
    #[should_panic(expected = "Type ARRAY has no inline integer null")]
    fn test_array_has_no_integer_sentinel() {
        null_of(SqlType::Array);
    }
}
