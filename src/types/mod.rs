//! This module defines the core, strongly-typed descriptions of a column's
//! logical type and physical encoding.
//!
//! `SqlType` and `EncodingType` are the two enums every sentinel decision is
//! matched over; `ColumnType` bundles them with the width fields into a
//! descriptor implementing [`crate::traits::TypeInfo`].

pub mod column_type;
pub mod sql_type;

// Re-export the main type(s) for easier access.
pub use column_type::{ColumnType, DICT_LOGICAL_SIZE};
pub use sql_type::{EncodingType, SqlType};
