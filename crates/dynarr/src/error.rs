//! Error type for the recoverable allocation path.
//!
//! The default mutating operations treat allocation failure as fatal
//! (process abort) and capacity overflow as a panic, matching the contract
//! that no operation observes a partially-grown array. The `try_*` variants
//! surface both conditions as values instead; this is their error type.

use std::error::Error;
use std::fmt;

/// Failure to grow an array's allocation.
///
/// Returned by [`DynArr::try_reserve`](crate::DynArr::try_reserve) and
/// [`DynArr::try_push`](crate::DynArr::try_push). On error the array is
/// untouched: length, capacity, and contents are exactly as before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// The requested capacity overflows the address-space limit for the
    /// element type (`usize` arithmetic or `Layout` computation overflowed).
    Overflow,
    /// The allocator could not provide the requested buffer.
    AllocFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "requested capacity overflows usize"),
            Self::AllocFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for CapacityError {}
