//! This module serves as the public API for column-level NULL handling on
//! sentinel-encoded buffers.
//!
//! Where the `sentinel` module answers "which value is NULL for this
//! descriptor", this one applies the answer to whole buffers: finding NULL
//! rows, writing NULL rows, and bridging to Arrow's explicit validity bitmap.
//!
//! Buffers are raw little-endian values in the descriptor's physical width.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Scanning and filling kernels over raw buffers.
pub mod sentinel;

/// Conversion to Arrow arrays with a validity bitmap.
pub mod arrow_impl;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use self::arrow_impl::{
    decode_to_float64_array, decode_to_int64_array, null_buffer_from_mask,
    validity_from_sentinels,
};
pub use self::sentinel::{
    apply_null_mask, fill_nulls, null_count, scan_nulls, scan_nulls_with, value_layout,
    value_layout_with, NullMask, ValueLayout,
};
