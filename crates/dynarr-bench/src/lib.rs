//! Workload builders shared by the dynarr benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArr;

/// Number of elements used by the reference workloads.
pub const REFERENCE_LEN: usize = 10_000;

/// Builds an array holding `0..len` with whatever capacity the growth
/// policy settled on.
pub fn filled(len: usize) -> DynArr<u64> {
    let mut arr = DynArr::new();
    for i in 0..len as u64 {
        arr.push(i);
    }
    arr
}

/// Builds the source slice for bulk-append benchmarks.
pub fn source(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}
