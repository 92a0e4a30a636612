//! This file is the root of the `inline_nulls` Rust crate.
//!
//! Columns in the engine carry no validity bitmap: a NULL is a reserved value
//! stored in-band. Which value is reserved depends on the column's logical
//! type, its compression and its stored width, and a mismatch silently turns
//! data into NULLs or NULLs into data. This crate owns that mapping.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Resolving the NULL sentinel of a type descriptor (`sentinel`), from the
//!     leaf integer and floating-point tables (`kernels`).
//! 2.  Halting on descriptors that have no sentinel, through a handler chosen
//!     at build time (`violation`).
//! 3.  Applying sentinels to whole column buffers and bridging them to Arrow
//!     validity bitmaps (`null_handling`).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod kernels;
pub mod null_handling;
pub mod observability;
pub mod sentinel;
pub mod traits;
pub mod types;
pub mod violation;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use error::{SentinelError, SentinelResult};
pub use kernels::{NULL_DOUBLE, NULL_FLOAT};
pub use sentinel::{
    encoded_null_value, encoded_null_value_with, floating_null_value, floating_null_value_with,
    is_null_encoded, is_null_fp, logical_null_value, logical_null_value_with,
};
pub use traits::TypeInfo;
pub use types::{ColumnType, EncodingType, SqlType};
pub use violation::{ContractViolation, DefaultHandler, DeviceAbort, HostAbort, ViolationHandler};
