//! This module serves as the public API for the leaf sentinel tables.
//!
//! Both are pure, stateless and allocation-free, and neither knows about type
//! descriptors. The `sentinel` layer maps a descriptor onto one of their
//! entries.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Integer sentinels: the signed minimum table, the unsigned dictionary-id
/// maximum entries and the computed bit-narrowed minimum.
pub mod int_sentinel;

/// The two process-wide floating-point sentinels.
pub mod fp_sentinel;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use fp_sentinel::{inline_fp_null_value, FloatKind, FpNullSentinel, NULL_DOUBLE, NULL_FLOAT};
pub use int_sentinel::{
    inline_int_null_value, integer_null_sentinel, narrowed_null_sentinel, IntNullSentinel,
    IntWidth,
};
