//! This module contains pure, stateless kernels for sentinel-encoded column
//! buffers: locating NULLs in a raw little-endian buffer, and producing a
//! buffer of NULLs.
//!
//! Comparisons happen on the stored bit pattern in the column's physical width,
//! so the same kernel serves signed, unsigned and floating-point columns.
//! Buffers of 1, 2, 4 or 8-byte values are viewed in place through
//! `bytemuck`; other widths and misaligned buffers are decoded bytewise.

use bitvec::prelude::*;
use bytemuck::Pod;
use num_traits::{AsPrimitive, PrimInt};

use crate::error::{SentinelError, SentinelResult};
use crate::kernels::{FloatKind, NULL_DOUBLE, NULL_FLOAT};
use crate::sentinel::{float_kind_with, physical_layout_with, PhysicalLayout};
use crate::traits::TypeInfo;
use crate::violation::{DefaultHandler, ViolationHandler};

/// One bit per row, set where the row is NULL.
pub type NullMask = BitVec<u8, Lsb0>;

//==================================================================================
// 1. Value Layout
//==================================================================================

/// How one value of any sentinel-carrying column is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLayout {
    Integer(PhysicalLayout),
    Float(FloatKind),
}

impl ValueLayout {
    pub fn byte_width(&self) -> usize {
        match self {
            Self::Integer(layout) => layout.byte_width,
            Self::Float(kind) => kind.byte_width(),
        }
    }

    /// The NULL sentinel as stored, zero-extended into a `u64`.
    pub fn null_pattern(&self) -> u64 {
        match self {
            Self::Integer(layout) => truncate_to_width(layout.null_value as u64, layout.byte_width),
            Self::Float(FloatKind::F32) => u64::from(NULL_FLOAT.to_bits()),
            Self::Float(FloatKind::F64) => NULL_DOUBLE.to_bits(),
        }
    }
}

pub fn value_layout_with<H, T>(ti: &T) -> ValueLayout
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    if ti.is_fp() {
        ValueLayout::Float(float_kind_with::<H, T>(ti))
    } else {
        ValueLayout::Integer(physical_layout_with::<H, T>(ti))
    }
}

pub fn value_layout<T: TypeInfo + ?Sized>(ti: &T) -> ValueLayout {
    value_layout_with::<DefaultHandler, T>(ti)
}

fn truncate_to_width(raw: u64, byte_width: usize) -> u64 {
    if byte_width >= 8 {
        raw
    } else {
        raw & ((1u64 << (byte_width * 8)) - 1)
    }
}

/// Reads one little-endian value of `chunk.len()` bytes, zero-extended.
#[inline]
pub(crate) fn read_le(chunk: &[u8]) -> u64 {
    chunk.iter().rev().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Reads one little-endian integer and widens it to `i64`.
#[inline]
pub(crate) fn decode_int(chunk: &[u8], signed: bool) -> i64 {
    let raw = read_le(chunk);
    if signed {
        let shift = 64 - 8 * chunk.len() as u32;
        ((raw << shift) as i64) >> shift
    } else {
        raw as i64
    }
}

fn rows_in(bytes: &[u8], width: usize) -> SentinelResult<usize> {
    if bytes.len() % width != 0 {
        return Err(SentinelError::BufferMismatch(bytes.len(), width));
    }
    Ok(bytes.len() / width)
}

//==================================================================================
// 2. Scanning
//==================================================================================

fn scan_aligned<P: PrimInt + Pod>(values: &[P], stored: P) -> NullMask {
    // Buffers are little-endian; swap the needle rather than every value.
    let needle = stored.to_le();
    values.iter().map(|&v| v == needle).collect()
}

fn scan_bytewise(bytes: &[u8], width: usize, pattern: u64) -> NullMask {
    bytes.chunks_exact(width).map(|c| read_le(c) == pattern).collect()
}

fn scan_typed<P>(bytes: &[u8], pattern: u64) -> NullMask
where
    P: PrimInt + Pod,
    u64: AsPrimitive<P>,
{
    match bytemuck::try_cast_slice::<u8, P>(bytes) {
        Ok(values) => scan_aligned(values, pattern.as_()),
        Err(e) => {
            log::trace!("scan_nulls: no in-place view ({:?}), decoding bytewise", e);
            scan_bytewise(bytes, std::mem::size_of::<P>(), pattern)
        }
    }
}

fn scan_raw(bytes: &[u8], width: usize, pattern: u64) -> NullMask {
    match width {
        1 => scan_typed::<u8>(bytes, pattern),
        2 => scan_typed::<u16>(bytes, pattern),
        4 => scan_typed::<u32>(bytes, pattern),
        8 => scan_typed::<u64>(bytes, pattern),
        _ => scan_bytewise(bytes, width, pattern),
    }
}

/// Marks every row of `bytes` that holds the NULL sentinel of `ti`.
///
/// # Errors
/// `BufferMismatch` if `bytes` is not a whole number of values.
pub fn scan_nulls_with<H, T>(ti: &T, bytes: &[u8]) -> SentinelResult<NullMask>
where
    H: ViolationHandler,
    T: TypeInfo + ?Sized,
{
    let layout = value_layout_with::<H, T>(ti);
    let width = layout.byte_width();
    let rows = rows_in(bytes, width)?;
    let mask = scan_raw(bytes, width, layout.null_pattern());
    log::debug!(
        "scan_nulls: {} {} rows of {} bytes, {} null",
        rows,
        ti.sql_type(),
        width,
        mask.count_ones()
    );
    Ok(mask)
}

pub fn scan_nulls<T: TypeInfo + ?Sized>(ti: &T, bytes: &[u8]) -> SentinelResult<NullMask> {
    scan_nulls_with::<DefaultHandler, T>(ti, bytes)
}

pub fn null_count<T: TypeInfo + ?Sized>(ti: &T, bytes: &[u8]) -> SentinelResult<usize> {
    Ok(scan_nulls(ti, bytes)?.count_ones())
}

//==================================================================================
// 3. Filling
//==================================================================================

/// Returns a little-endian buffer of `rows` NULLs stored under `ti`.
pub fn fill_nulls<T: TypeInfo + ?Sized>(ti: &T, rows: usize) -> Vec<u8> {
    let layout = value_layout(ti);
    let width = layout.byte_width();
    let pattern = layout.null_pattern().to_le_bytes();
    let mut out = Vec::with_capacity(rows * width);
    for _ in 0..rows {
        out.extend_from_slice(&pattern[..width]);
    }
    out
}

/// Overwrites the rows set in `mask` with the NULL sentinel of `ti`.
///
/// # Errors
/// `BufferMismatch` if `bytes` is not a whole number of values, `MaskLength`
/// if `mask` does not have one bit per row.
pub fn apply_null_mask<T: TypeInfo + ?Sized>(
    ti: &T,
    bytes: &mut [u8],
    mask: &BitSlice<u8, Lsb0>,
) -> SentinelResult<()> {
    let layout = value_layout(ti);
    let width = layout.byte_width();
    let rows = rows_in(bytes, width)?;
    if mask.len() != rows {
        return Err(SentinelError::MaskLength {
            expected: rows,
            actual: mask.len(),
        });
    }
    let pattern = layout.null_pattern().to_le_bytes();
    for row in mask.iter_ones() {
        bytes[row * width..(row + 1) * width].copy_from_slice(&pattern[..width]);
    }
    Ok(())
}
