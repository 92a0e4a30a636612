//! Conversion from sentinel-encoded buffers to Arrow arrays with an explicit
//! validity bitmap.
//!
//! Values are widened to the engine's scalar types (`i64`, `f64`); the slot of
//! a NULL row keeps the widened sentinel, which Arrow masks out.

use arrow::array::{Float64Array, Int64Array};
use arrow::buffer::NullBuffer;

use crate::error::{SentinelError, SentinelResult};
use crate::kernels::FloatKind;
use crate::null_handling::sentinel::{decode_int, read_le, scan_nulls, value_layout, NullMask, ValueLayout};
use crate::traits::TypeInfo;

/// Turns a NULL mask into an Arrow validity buffer, or `None` if no row is NULL.
pub fn null_buffer_from_mask(mask: &NullMask) -> Option<NullBuffer> {
    if mask.not_any() {
        return None;
    }
    let validity: Vec<bool> = mask.iter().by_vals().map(|is_null| !is_null).collect();
    Some(NullBuffer::from(validity))
}

/// Builds the Arrow validity of a sentinel-encoded buffer.
pub fn validity_from_sentinels<T: TypeInfo + ?Sized>(
    ti: &T,
    bytes: &[u8],
) -> SentinelResult<Option<NullBuffer>> {
    let mask = scan_nulls(ti, bytes)?;
    Ok(null_buffer_from_mask(&mask))
}

/// Decodes an integer-family buffer into a nullable `Int64Array`.
pub fn decode_to_int64_array<T: TypeInfo + ?Sized>(ti: &T, bytes: &[u8]) -> SentinelResult<Int64Array> {
    let layout = match value_layout(ti) {
        ValueLayout::Integer(layout) => layout,
        ValueLayout::Float(_) => {
            return Err(SentinelError::UnsupportedType(format!(
                "{} is floating point, decode it as Float64",
                ti.sql_type()
            )))
        }
    };
    let nulls = validity_from_sentinels(ti, bytes)?;
    let values: Vec<i64> = bytes
        .chunks_exact(layout.byte_width)
        .map(|chunk| decode_int(chunk, layout.signed))
        .collect();
    Ok(Int64Array::new(values.into(), nulls))
}

/// Decodes a `FLOAT` or `DOUBLE` buffer into a nullable `Float64Array`.
pub fn decode_to_float64_array<T: TypeInfo + ?Sized>(ti: &T, bytes: &[u8]) -> SentinelResult<Float64Array> {
    let kind = match value_layout(ti) {
        ValueLayout::Float(kind) => kind,
        ValueLayout::Integer(_) => {
            return Err(SentinelError::UnsupportedType(format!(
                "{} is not floating point",
                ti.sql_type()
            )))
        }
    };
    let nulls = validity_from_sentinels(ti, bytes)?;
    let values: Vec<f64> = match kind {
        FloatKind::F32 => bytes
            .chunks_exact(4)
            .map(|chunk| f64::from(f32::from_bits(read_le(chunk) as u32)))
            .collect(),
        FloatKind::F64 => bytes
            .chunks_exact(8)
            .map(|chunk| f64::from_bits(read_le(chunk)))
            .collect(),
    };
    Ok(Float64Array::new(values.into(), nulls))
}
