//! This module defines shared traits used across the sentinel kernels.

use crate::types::{EncodingType, SqlType};

/// Read-only view of a column type descriptor.
///
/// The sentinel functions are generic over this trait so that any catalog
/// representation can be passed in without conversion. Only the five accessor
/// methods are required; the classification predicates default to the
/// logical type's own.
pub trait TypeInfo {
    /// The logical SQL type.
    fn sql_type(&self) -> SqlType;

    /// The physical compression scheme.
    fn compression(&self) -> EncodingType;

    /// Encoding parameter: the bit width for `Fixed`, the day width selector
    /// for `DateInDays`. Meaningless for other encodings.
    fn comp_param(&self) -> i32;

    /// Physical size in bytes of one stored value, `-1` if variable.
    fn size(&self) -> i32;

    /// Size in bytes of one value once decoded to its logical representation.
    fn logical_size(&self) -> i32;

    fn is_string(&self) -> bool {
        self.sql_type().is_string()
    }

    fn is_integer(&self) -> bool {
        self.sql_type().is_integer()
    }

    fn is_fp(&self) -> bool {
        self.sql_type().is_fp()
    }

    fn is_time(&self) -> bool {
        self.sql_type().is_time()
    }

    fn is_decimal(&self) -> bool {
        self.sql_type().is_decimal()
    }
}
