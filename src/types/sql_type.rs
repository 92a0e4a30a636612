//! This module defines the canonical, type-safe representation of the logical
//! column types and storage encodings known to the engine.

use crate::error::SentinelError;
use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical SQL type of a column, independent of how it is stored.
///
/// `Null`, `Array` and `Point` have no inline NULL sentinel; they are listed so
/// that every match over this enum has to say so explicitly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Null,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Numeric,
    Time,
    Timestamp,
    Date,
    IntervalDayTime,
    IntervalYearMonth,
    Text,
    Varchar,
    Char,
    Array,
    Point,
}

impl SqlType {
    /// Converts an Arrow `DataType` into the closest logical `SqlType`.
    ///
    /// Dictionary-of-string types map to `Text`; the key width is an encoding
    /// detail handled by [`crate::types::ColumnType::from_arrow_type`].
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Result<Self, SentinelError> {
        match arrow_type {
            ArrowDataType::Boolean => Ok(Self::Boolean),
            ArrowDataType::Int8 => Ok(Self::TinyInt),
            ArrowDataType::Int16 => Ok(Self::SmallInt),
            ArrowDataType::Int32 => Ok(Self::Int),
            ArrowDataType::Int64 => Ok(Self::BigInt),
            ArrowDataType::Float32 => Ok(Self::Float),
            ArrowDataType::Float64 => Ok(Self::Double),
            ArrowDataType::Decimal128(_, _) => Ok(Self::Decimal),
            ArrowDataType::Time32(_) | ArrowDataType::Time64(_) => Ok(Self::Time),
            ArrowDataType::Timestamp(_, _) => Ok(Self::Timestamp),
            ArrowDataType::Date32 | ArrowDataType::Date64 => Ok(Self::Date),
            ArrowDataType::Utf8 | ArrowDataType::LargeUtf8 => Ok(Self::Text),
            ArrowDataType::Dictionary(_, value) if value.as_ref() == &ArrowDataType::Utf8 => {
                Ok(Self::Text)
            }
            ArrowDataType::Null => Ok(Self::Null),
            dt => Err(SentinelError::UnsupportedType(format!(
                "Cannot convert Arrow type {:?} to SqlType",
                dt
            ))),
        }
    }

    /// Returns `true` for the variable-length character types.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Text | Self::Varchar | Self::Char)
    }

    /// Returns `true` for the four fixed-width integer types.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::TinyInt | Self::SmallInt | Self::Int | Self::BigInt)
    }

    /// Returns `true` if the type is a floating-point number.
    pub fn is_fp(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Returns `true` for `Time`, `Timestamp` and `Date`. Intervals are not
    /// temporal in this sense.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time | Self::Timestamp | Self::Date)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal | Self::Numeric)
    }

    /// The size in bytes of one uncompressed value, or `-1` for
    /// variable-length types.
    pub fn natural_size(&self) -> i32 {
        match self {
            Self::Null => 0,
            Self::Boolean | Self::TinyInt => 1,
            Self::SmallInt => 2,
            Self::Int | Self::Float => 4,
            Self::BigInt
            | Self::Double
            | Self::Decimal
            | Self::Numeric
            | Self::Time
            | Self::Timestamp
            | Self::Date
            | Self::IntervalDayTime
            | Self::IntervalYearMonth => 8,
            Self::Text | Self::Varchar | Self::Char | Self::Array | Self::Point => -1,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "NULL",
            Self::Boolean => "BOOLEAN",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Int => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Date => "DATE",
            Self::IntervalDayTime => "INTERVAL_DAY_TIME",
            Self::IntervalYearMonth => "INTERVAL_YEAR_MONTH",
            Self::Text => "TEXT",
            Self::Varchar => "VARCHAR",
            Self::Char => "CHAR",
            Self::Array => "ARRAY",
            Self::Point => "POINT",
        };
        f.write_str(name)
    }
}

/// The physical compression scheme applied to a column.
///
/// Only the first four carry an inline NULL sentinel. The rest are known to
/// the storage layer but must never reach sentinel resolution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EncodingType {
    #[default]
    None,
    /// String values replaced by integer ids into a dictionary.
    Dict,
    /// Integers narrowed to `comp_param` bits.
    Fixed,
    /// Dates stored as a day count instead of seconds.
    DateInDays,
    RunLength,
    Diff,
    Sparse,
    GeoInt,
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Dict => "DICT",
            Self::Fixed => "FIXED",
            Self::DateInDays => "DAYS",
            Self::RunLength => "RL",
            Self::Diff => "DIFF",
            Self::Sparse => "SPARSE",
            Self::GeoInt => "GEOINT",
        };
        f.write_str(name)
    }
}
