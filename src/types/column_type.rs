//! A concrete, serializable column type descriptor.
//!
//! Sentinel resolution accepts any [`TypeInfo`]; `ColumnType` is the
//! representation this crate ships for catalogs, tests and the Arrow bridge.

use crate::error::{SentinelError, SentinelResult};
use crate::traits::TypeInfo;
use crate::types::{EncodingType, SqlType};
use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of a dictionary id once decoded, whatever its stored width.
pub const DICT_LOGICAL_SIZE: i32 = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub struct ColumnType {
    pub sql_type: SqlType,
    #[serde(default)]
    pub compression: EncodingType,
    #[serde(default)]
    pub comp_param: i32,
    pub size: i32,
    pub logical_size: i32,
}

impl ColumnType {
    /// An uncompressed column of the given logical type.
    pub fn new(sql_type: SqlType) -> Self {
        let size = sql_type.natural_size();
        Self {
            sql_type,
            compression: EncodingType::None,
            comp_param: 0,
            size,
            logical_size: size,
        }
    }

    /// A dictionary-encoded `TEXT` column whose ids are stored in `size` bytes.
    pub fn dict_text(size: i32) -> Self {
        Self {
            sql_type: SqlType::Text,
            compression: EncodingType::Dict,
            comp_param: size * 8,
            size,
            logical_size: DICT_LOGICAL_SIZE,
        }
    }

    /// A column of `sql_type` narrowed to `bits` bits.
    pub fn fixed(sql_type: SqlType, bits: i32) -> Self {
        Self {
            sql_type,
            compression: EncodingType::Fixed,
            comp_param: bits,
            size: bits / 8,
            logical_size: sql_type.natural_size(),
        }
    }

    /// A `DATE` column stored as a day count. `bits` is 16 or 32; `0` is the
    /// legacy spelling of 32.
    pub fn date_in_days(bits: i32) -> Self {
        let size = if bits == 16 { 2 } else { 4 };
        Self {
            sql_type: SqlType::Date,
            compression: EncodingType::DateInDays,
            comp_param: bits,
            size,
            logical_size: SqlType::Date.natural_size(),
        }
    }

    pub fn with_compression(mut self, compression: EncodingType, comp_param: i32) -> Self {
        self.compression = compression;
        self.comp_param = comp_param;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn with_logical_size(mut self, logical_size: i32) -> Self {
        self.logical_size = logical_size;
        self
    }

    /// Builds the descriptor an Arrow column of `arrow_type` is stored under.
    ///
    /// The descriptor's stored width always equals the Arrow value width.
    /// `Date32` is already a day count and maps to 32-bit `DateInDays`,
    /// `Time32` maps to `TIME` narrowed to 32 bits, and dictionary-of-string
    /// maps to `Dict` with the key width as storage size. Types whose Arrow
    /// width has no matching layout (bit-packed `Boolean`, 16-byte
    /// `Decimal128`) are `UnsupportedType`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> SentinelResult<Self> {
        match arrow_type {
            ArrowDataType::Date32 => Ok(Self::date_in_days(32)),
            ArrowDataType::Time32(_) => Ok(Self::fixed(SqlType::Time, 32)),
            ArrowDataType::Boolean => Err(SentinelError::UnsupportedType(
                "Arrow Boolean is bit-packed and has no per-value sentinel".to_string(),
            )),
            ArrowDataType::Dictionary(key, value) if value.as_ref() == &ArrowDataType::Utf8 => {
                match key.as_ref() {
                    ArrowDataType::Int8 | ArrowDataType::UInt8 => Ok(Self::dict_text(1)),
                    ArrowDataType::Int16 | ArrowDataType::UInt16 => Ok(Self::dict_text(2)),
                    ArrowDataType::Int32 => Ok(Self::dict_text(4)),
                    k => Err(SentinelError::UnsupportedType(format!(
                        "Dictionary key type {:?} has no storage width",
                        k
                    ))),
                }
            }
            other => {
                let ti = Self::new(SqlType::from_arrow_type(other)?);
                match other.primitive_width() {
                    Some(width) if width as i32 != ti.size => {
                        Err(SentinelError::UnsupportedType(format!(
                            "Arrow type {:?} stores {} bytes per value, {} stores {}",
                            other, width, ti, ti.size
                        )))
                    }
                    _ => Ok(ti),
                }
            }
        }
    }

    /// Checks the structural invariants a descriptor must satisfy before it
    /// is handed to sentinel resolution.
    ///
    /// This is the recoverable counterpart of the checks the sentinel
    /// functions perform fatally; use it on descriptors read from untrusted
    /// input.
    pub fn validate(&self) -> SentinelResult<()> {
        let invalid = |msg: String| Err(SentinelError::InvalidDescriptor(msg));
        match self.compression {
            EncodingType::None => {
                if self.sql_type.is_string() {
                    return invalid(format!("{} without dictionary encoding has no inline null", self));
                }
                if self.sql_type.natural_size() <= 0 {
                    return invalid(format!("{} has no fixed-width representation", self));
                }
                Ok(())
            }
            EncodingType::Dict => {
                if !self.sql_type.is_string() {
                    return invalid(format!("dictionary encoding requires a string type, got {}", self));
                }
                if self.logical_size != DICT_LOGICAL_SIZE {
                    return invalid(format!(
                        "dictionary ids decode to {} bytes, got logical size {}",
                        DICT_LOGICAL_SIZE, self.logical_size
                    ));
                }
                if !matches!(self.size, 1 | 2 | 4) {
                    return invalid(format!("unsupported dictionary id size {}", self.size));
                }
                Ok(())
            }
            EncodingType::DateInDays => {
                if self.sql_type != SqlType::Date {
                    return invalid(format!("day encoding requires DATE, got {}", self));
                }
                if !matches!(self.comp_param, 0 | 16 | 32) {
                    return invalid(format!("unsupported day encoding width {}", self.comp_param));
                }
                Ok(())
            }
            EncodingType::Fixed => {
                if !(self.sql_type.is_integer() || self.sql_type.is_time() || self.sql_type.is_decimal()) {
                    return invalid(format!("fixed encoding requires an integer, temporal or decimal type, got {}", self));
                }
                if self.comp_param <= 0 || self.comp_param > 64 || self.comp_param % 8 != 0 {
                    return invalid(format!("unsupported fixed encoding width {}", self.comp_param));
                }
                Ok(())
            }
            EncodingType::RunLength | EncodingType::Diff | EncodingType::Sparse | EncodingType::GeoInt => {
                invalid(format!("{} has no inline null sentinel", self))
            }
        }
    }
}

impl TypeInfo for ColumnType {
    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn compression(&self) -> EncodingType {
        self.compression
    }

    fn comp_param(&self) -> i32 {
        self.comp_param
    }

    fn size(&self) -> i32 {
        self.size
    }

    fn logical_size(&self) -> i32 {
        self.logical_size
    }
}

/// Renders as e.g. `TEXT ENCODING DICT(8)` or `BIGINT ENCODING FIXED(24)`.
impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compression {
            EncodingType::None => write!(f, "{}", self.sql_type),
            enc => write!(f, "{} ENCODING {}({})", self.sql_type, enc, self.comp_param),
        }
    }
}
