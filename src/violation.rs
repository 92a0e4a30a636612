//! Fatal contract violations and the per-target strategy for reporting them.
//!
//! A descriptor that cannot carry an inline NULL (wrong encoding for its type,
//! an unknown width, an encoding with no sentinel convention) means an
//! invariant was broken upstream. Returning a best-guess value would turn
//! valid rows into NULLs or the reverse, so every sentinel function halts
//! instead, through a [`ViolationHandler`] chosen at compile time.

use crate::types::{EncodingType, SqlType};
use std::fmt;

/// Every precondition the sentinel functions check.
///
/// The value is `Copy` and holds no heap data, so constructing it costs
/// nothing on targets that never format it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// An integer width outside the sentinel table, e.g. 24 signed or 32 unsigned.
    IntegerWidth { bits: u32, signed: bool },
    /// A string descriptor reached the logical path without dictionary encoding.
    StringNotDictEncoded(EncodingType),
    /// A dictionary-encoded string whose decoded id is not 4 bytes.
    DictLogicalSize(i32),
    /// A non-string descriptor reached the logical path with compression.
    UnexpectedCompression(EncodingType),
    /// A logical type with no inline integer sentinel.
    NoIntegerSentinel(SqlType),
    /// A logical type with no inline floating-point sentinel.
    NotFloatingPoint(SqlType),
    /// A day-encoded date with a width other than 0, 16 or 32.
    DateInDaysWidth(i32),
    /// A dictionary id stored in a width other than 1, 2 or 4 bytes.
    DictStorageSize(i32),
    /// Dictionary encoding applied to a non-string type.
    DictOnNonString(SqlType),
    /// Fixed encoding applied to a type that is not integer, temporal or decimal.
    FixedOnUnsupportedType(SqlType),
    /// A fixed encoding width that is not a multiple of 8 in `8..=64`.
    FixedWidth(i32),
    /// An encoding that has no inline sentinel convention.
    UnsupportedEncoding(EncodingType),
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerWidth { bits, signed } => {
                let sign = if *signed { "signed" } else { "unsigned" };
                write!(f, "No null sentinel for {} {}-bit integers", sign, bits)
            }
            Self::StringNotDictEncoded(enc) => {
                write!(f, "String column must be dictionary encoded, got {}", enc)
            }
            Self::DictLogicalSize(size) => {
                write!(f, "Dictionary encoded string must have logical size 4, got {}", size)
            }
            Self::UnexpectedCompression(enc) => {
                write!(f, "Expected an uncompressed type, got encoding {}", enc)
            }
            Self::NoIntegerSentinel(t) => write!(f, "Type {} has no inline integer null", t),
            Self::NotFloatingPoint(t) => write!(f, "Type {} is not floating point", t),
            Self::DateInDaysWidth(w) => {
                write!(f, "Unknown encoding width for date in days: {}", w)
            }
            Self::DictStorageSize(s) => {
                write!(f, "Unknown size for dictionary encoded type: {}", s)
            }
            Self::DictOnNonString(t) => {
                write!(f, "Dictionary encoding requires a string type, got {}", t)
            }
            Self::FixedOnUnsupportedType(t) => write!(
                f,
                "Fixed encoding requires an integer, temporal or decimal type, got {}",
                t
            ),
            Self::FixedWidth(w) => write!(f, "Unsupported fixed encoding width: {}", w),
            Self::UnsupportedEncoding(enc) => {
                write!(f, "Encoding {} has no inline null sentinel", enc)
            }
        }
    }
}

/// How a violation halts execution on a given target.
///
/// Implementations never return. They are zero-sized markers selected as a
/// type parameter, so the choice costs no runtime branch.
pub trait ViolationHandler {
    fn violate(violation: ContractViolation) -> !;
}

/// Host-side handler: logs the violation, writes it to stderr and aborts the
/// process. It never unwinds, whatever panic strategy the final binary uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostAbort;

impl ViolationHandler for HostAbort {
    #[cold]
    #[inline(never)]
    fn violate(violation: ContractViolation) -> ! {
        log::error!("inline null contract violation: {}", violation);
        eprintln!("inline null contract violation: {}", violation);
        std::process::abort()
    }
}

/// Accelerator-side handler: no formatting, no logging, just abort.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceAbort;

impl ViolationHandler for DeviceAbort {
    #[cold]
    fn violate(_violation: ContractViolation) -> ! {
        std::process::abort()
    }
}

/// The handler used by the non-`_with` sentinel functions.
#[cfg(not(feature = "device"))]
pub type DefaultHandler = HostAbort;

#[cfg(feature = "device")]
pub type DefaultHandler = DeviceAbort;

/// Panics with the violation message, so the fatal paths can be checked with
/// `#[should_panic]`.
#[cfg(test)]
pub(crate) struct PanicOnViolation;

#[cfg(test)]
impl ViolationHandler for PanicOnViolation {
    fn violate(violation: ContractViolation) -> ! {
        panic!("{}", violation)
    }
}
