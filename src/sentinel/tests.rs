use super::*;
use crate::kernels::{NULL_DOUBLE, NULL_FLOAT};
use crate::types::{ColumnType, EncodingType, SqlType};
use crate::violation::{DeviceAbort, HostAbort, PanicOnViolation};

fn encoded(ti: &ColumnType) -> i64 {
    encoded_null_value_with::<PanicOnViolation, _>(ti)
}

/// A catalog-side descriptor that is not `ColumnType`, to check the sentinel
/// functions only go through `TypeInfo`.
struct CatalogColumn {
    type_code: SqlType,
    encoding: EncodingType,
    param: i32,
    stored_bytes: i32,
}

impl TypeInfo for CatalogColumn {
    fn sql_type(&self) -> SqlType {
        self.type_code
    }

    fn compression(&self) -> EncodingType {
        self.encoding
    }

    fn comp_param(&self) -> i32 {
        self.param
    }

    fn size(&self) -> i32 {
        self.stored_bytes
    }

    fn logical_size(&self) -> i32 {
        if self.encoding == EncodingType::Dict {
            4
        } else {
            self.type_code.natural_size()
        }
    }
}

//==================================================================================
// End-to-end scenarios
//==================================================================================

#[test]
fn test_plain_int_column() {
    let ti = ColumnType::new(SqlType::Int);
    assert_eq!(encoded(&ti), -2_147_483_648);
}

#[test]
fn test_one_byte_dictionary_column() {
    let ti = ColumnType::dict_text(1);
    assert_eq!(encoded(&ti), 255);
}

#[test]
fn test_sixteen_bit_day_encoded_date() {
    let ti = ColumnType::date_in_days(16);
    assert_eq!(encoded(&ti), -32_768);
}

#[test]
fn test_bigint_fixed_24() {
    let ti = ColumnType::fixed(SqlType::BigInt, 24);
    assert_eq!(encoded(&ti), -8_388_608);
}

#[test]
fn test_double_column_is_stable() {
    let ti = ColumnType::new(SqlType::Double);
    let first = floating_null_value_with::<PanicOnViolation, _>(&ti);
    let second = floating_null_value_with::<PanicOnViolation, _>(&ti);
    assert_eq!(first.to_bits(), NULL_DOUBLE.to_bits());
    assert_eq!(first.to_bits(), second.to_bits());
}

//==================================================================================
// Dictionary encoding
//==================================================================================

#[test]
fn test_dictionary_sentinels_by_storage_size() {
    assert_eq!(encoded(&ColumnType::dict_text(1)), (1 << 8) - 1);
    assert_eq!(encoded(&ColumnType::dict_text(2)), (1 << 16) - 1);
}

#[test]
fn test_four_byte_dictionary_uses_signed_int_sentinel() {
    let dict = encoded(&ColumnType::dict_text(4));
    assert_eq!(dict, encoded(&ColumnType::new(SqlType::Int)));
    assert_eq!(dict, i32::MIN as i64);
    assert_ne!(dict, u32::MAX as i64);
}

#[test]
fn test_dictionary_applies_to_every_string_type() {
    for t in [SqlType::Text, SqlType::Varchar, SqlType::Char] {
        let ti = ColumnType {
            sql_type: t,
            ..ColumnType::dict_text(2)
        };
        assert_eq!(encoded(&ti), 65_535, "{}", t);
    }
}

#[test]
#[should_panic(expected = "Unknown size for dictionary encoded type: 8")]
fn test_dictionary_with_unknown_size_aborts() {
    encoded(&ColumnType::dict_text(8));
}

#[test]
#[should_panic(expected = "Dictionary encoding requires a string type, got INTEGER")]
fn test_dictionary_on_integer_aborts() {
    let ti = ColumnType::new(SqlType::Int).with_compression(EncodingType::Dict, 32);
    encoded(&ti);
}

//==================================================================================
// Date in days
//==================================================================================

#[test]
fn test_days_width_zero_and_thirty_two_agree() {
    let legacy = encoded(&ColumnType::date_in_days(0));
    let explicit = encoded(&ColumnType::date_in_days(32));
    assert_eq!(legacy, explicit);
    assert_eq!(legacy, i32::MIN as i64);
}

#[test]
fn test_days_width_differs_from_logical_date() {
    let plain = encoded(&ColumnType::new(SqlType::Date));
    assert_eq!(plain, i64::MIN);
    assert_ne!(plain, encoded(&ColumnType::date_in_days(16)));
}

#[test]
#[should_panic(expected = "Unknown encoding width for date in days: 8")]
fn test_days_with_unknown_width_aborts() {
    encoded(&ColumnType::date_in_days(8));
}

//==================================================================================
// Fixed bit width
//==================================================================================

#[test]
fn test_fixed_sentinel_is_narrowed_minimum() {
    for bits in [8, 16, 24, 32, 40, 48, 56, 64] {
        let ti = ColumnType::fixed(SqlType::BigInt, bits);
        let expected = -(1i128 << (bits - 1));
        assert_eq!(encoded(&ti) as i128, expected, "bits={}", bits);
    }
}

#[test]
fn test_fixed_applies_to_temporal_and_decimal() {
    assert_eq!(encoded(&ColumnType::fixed(SqlType::Timestamp, 32)), i32::MIN as i64);
    assert_eq!(encoded(&ColumnType::fixed(SqlType::Decimal, 16)), i16::MIN as i64);
    assert_eq!(encoded(&ColumnType::fixed(SqlType::Date, 48)), -(1i64 << 47));
}

#[test]
#[should_panic(expected = "Unsupported fixed encoding width: 20")]
fn test_fixed_width_not_multiple_of_eight_aborts() {
    encoded(&ColumnType::fixed(SqlType::Int, 20));
}

#[test]
#[should_panic(expected = "Unsupported fixed encoding width: -8")]
fn test_fixed_negative_width_aborts() {
    encoded(&ColumnType::fixed(SqlType::Int, -8));
}

#[test]
#[should_panic(expected = "Fixed encoding requires an integer, temporal or decimal type, got BOOLEAN")]
fn test_fixed_on_boolean_aborts() {
    encoded(&ColumnType::fixed(SqlType::Boolean, 8));
}

//==================================================================================
// Unsupported encodings and floating point
//==================================================================================

#[test]
#[should_panic(expected = "Encoding DIFF has no inline null sentinel")]
fn test_encoding_without_sentinel_aborts() {
    let ti = ColumnType::new(SqlType::BigInt).with_compression(EncodingType::Diff, 0);
    encoded(&ti);
}

#[test]
#[should_panic(expected = "Type FLOAT has no inline integer null")]
fn test_float_through_encoded_path_aborts() {
    encoded(&ColumnType::new(SqlType::Float));
}

#[test]
fn test_float_sentinel_ignores_encoding_fields() {
    let plain = ColumnType::new(SqlType::Float);
    let odd = plain.with_compression(EncodingType::Fixed, 16).with_size(2);
    let a = floating_null_value_with::<PanicOnViolation, _>(&plain);
    let b = floating_null_value_with::<PanicOnViolation, _>(&odd);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!((a as f32).to_bits(), NULL_FLOAT.to_bits());
}

#[test]
#[should_panic(expected = "Type BIGINT is not floating point")]
fn test_floating_on_integer_aborts() {
    floating_null_value_with::<PanicOnViolation, _>(&ColumnType::new(SqlType::BigInt));
}

//==================================================================================
// Read side, idempotence, handler independence
//==================================================================================

#[test]
fn test_read_side_is_descriptor_relative() {
    let dict = ColumnType::dict_text(1);
    let small = ColumnType::new(SqlType::SmallInt);
    assert!(is_null_encoded_with::<PanicOnViolation, _>(&dict, 255));
    assert!(!is_null_encoded_with::<PanicOnViolation, _>(&small, 255));
    assert!(is_null_encoded_with::<PanicOnViolation, _>(&small, -32_768));
    assert!(!is_null_encoded_with::<PanicOnViolation, _>(&dict, 0));
}

#[test]
fn test_read_side_floats() {
    let float = ColumnType::new(SqlType::Float);
    let double = ColumnType::new(SqlType::Double);
    assert!(is_null_fp_with::<PanicOnViolation, _>(&float, f64::from(NULL_FLOAT)));
    assert!(is_null_fp_with::<PanicOnViolation, _>(&double, NULL_DOUBLE));
    assert!(!is_null_fp_with::<PanicOnViolation, _>(&double, f64::from(NULL_FLOAT)));
    assert!(!is_null_fp_with::<PanicOnViolation, _>(&float, 0.0));
}

#[test]
fn test_read_side_float_does_not_round_doubles() {
    let float = ColumnType::new(SqlType::Float);
    let widened = f64::from(NULL_FLOAT);
    // One ulp away in f64, but rounds to NULL_FLOAT in f32.
    let near = f64::from_bits(widened.to_bits() + 1);
    assert_eq!(near as f32, NULL_FLOAT);
    assert!(!is_null_fp_with::<PanicOnViolation, _>(&float, near));
    assert!(is_null_fp_with::<PanicOnViolation, _>(&float, widened));
}

#[test]
fn test_default_handler_entry_points() {
    let int = ColumnType::new(SqlType::Int);
    let dict = ColumnType::dict_text(1);
    let double = ColumnType::new(SqlType::Double);
    assert_eq!(encoded_null_value(&int), i32::MIN as i64);
    assert_eq!(encoded_null_value(&dict), 255);
    assert_eq!(logical_null_value(&dict), i32::MIN as i64);
    assert_eq!(floating_null_value(&double).to_bits(), NULL_DOUBLE.to_bits());
    assert!(is_null_encoded(&dict, 255));
    assert!(!is_null_encoded(&int, 255));
    assert!(is_null_fp(&double, NULL_DOUBLE));
    assert!(!is_null_fp(&double, 0.0));
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let descriptors = [
        ColumnType::new(SqlType::TinyInt),
        ColumnType::dict_text(2),
        ColumnType::date_in_days(32),
        ColumnType::fixed(SqlType::Time, 40),
    ];
    for ti in &descriptors {
        let before = *ti;
        assert_eq!(encoded(ti), encoded(ti));
        assert_eq!(*ti, before);
    }
}

#[test]
fn test_device_handler_agrees_on_valid_descriptors() {
    let descriptors = [
        ColumnType::new(SqlType::Boolean),
        ColumnType::new(SqlType::IntervalYearMonth),
        ColumnType::dict_text(1),
        ColumnType::dict_text(4),
        ColumnType::date_in_days(16),
        ColumnType::fixed(SqlType::BigInt, 56),
    ];
    for ti in &descriptors {
        assert_eq!(
            encoded_null_value_with::<DeviceAbort, _>(ti),
            encoded_null_value_with::<HostAbort, _>(ti),
            "{}",
            ti
        );
    }
}

#[test]
fn test_layout_widths_follow_storage() {
    let layout = physical_layout_with::<PanicOnViolation, _>(&ColumnType::dict_text(2));
    assert_eq!((layout.byte_width, layout.signed), (2, false));
    let layout = physical_layout_with::<PanicOnViolation, _>(&ColumnType::fixed(SqlType::BigInt, 24));
    assert_eq!((layout.byte_width, layout.signed), (3, true));
    let layout = physical_layout_with::<PanicOnViolation, _>(&ColumnType::new(SqlType::Date));
    assert_eq!(layout.byte_width, 8);
}

#[test]
fn test_foreign_descriptor_through_trait() {
    let column = CatalogColumn {
        type_code: SqlType::Text,
        encoding: EncodingType::Dict,
        param: 16,
        stored_bytes: 2,
    };
    assert_eq!(encoded_null_value_with::<PanicOnViolation, _>(&column), 65_535);
    assert_eq!(logical_null_value_with::<PanicOnViolation, _>(&column), i32::MIN as i64);

    let narrowed = CatalogColumn {
        type_code: SqlType::SmallInt,
        encoding: EncodingType::Fixed,
        param: 8,
        stored_bytes: 1,
    };
    assert!(is_null_encoded_with::<PanicOnViolation, _>(&narrowed, -128));
}
